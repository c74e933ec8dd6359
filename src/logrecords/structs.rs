//! The structs
//!
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The time of a log record.
///
/// The logging has no timezone indicator, so the value is kept naive,
/// and ordering and subtraction are done on the naive value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

/// A log record as it is found in the json array, with the timestamp still as text.
///
/// Every field is optional: a missing field or a `null` results in an empty value.
/// The exception is the timestamp: it is kept as raw json, so a present `null` or number
/// is seen by the timestamp decoder, and only a missing timestamp is empty.
/// Fields not listed here are ignored.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub(crate) struct JsonLogRecord {
    pub service: Option<String>,
    pub level: Option<String>,
    #[serde(deserialize_with = "present_value")]
    pub timestamp: Option<Value>,
    pub operation: Option<String>,
    pub message: Option<String>,
    pub transaction_id: Option<String>,
}

/// A decoded log record.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub service: String,
    pub level: String,
    pub timestamp: Timestamp,
    pub operation: String,
    /// Not used for the summary.
    pub message: String,
    pub transaction_id: String,
}

/// All the log records of a file, in the order of the json array.
#[derive(Debug, Default)]
pub struct AllLogRecords {
    pub logrecords: Vec<LogRecord>,
}

/// The transaction with the longest time between its first and last record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestTransaction {
    pub transaction_id: String,
    pub duration: Duration,
}

/// The operation with the most `ERROR` records.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperationErrors {
    pub operation: String,
    pub errors: usize,
}

// A present field is always `Some`, also when it is `null`.
fn present_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error>
{
    Value::deserialize(deserializer).map(Some)
}
