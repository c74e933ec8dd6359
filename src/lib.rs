//! Summarize a JSON array of log records.
//!
//! The pipeline is: read the file, decode the records, aggregate, print.
//! Every stage returns a `Result`, nothing is printed unless all records decoded.
#[macro_use]
extern crate serde_derive;

pub mod error;
pub mod logrecords;
pub mod utility;

/// The layout of the `timestamp` field of a log record: `2006-01-02 15:04:05.000000`.
/// This is a compatibility contract with the producers of the logging, do not change.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S.%6f";
/// The number of characters of a timestamp rendered in [`TIMESTAMP_LAYOUT`].
pub const TIMESTAMP_LENGTH: usize = 26;
/// The `level` of a log record that counts as an error.
pub const ERROR_LEVEL: &str = "ERROR";
