//! Module for reading a json file with log records, and summarizing them.
//!
//! The summary consists of the number of records, the transaction that took the longest
//! between its first and last record, and the operation with the most `ERROR` records.
//!
mod structs;
mod timestamp;
mod functions;

pub use structs::*;
