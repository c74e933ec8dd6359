//! The error types
//!
use std::path::PathBuf;
use thiserror::Error;

/// A `timestamp` value that does not follow the fixed layout.
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("expected {expected} characters for layout 2006-01-02 15:04:05.000000, found {found}")]
    Length { expected: usize, found: usize },
    #[error("does not match layout 2006-01-02 15:04:05.000000")]
    Parse(#[from] chrono::ParseError),
    #[error("second out of range")]
    LeapSecond,
    #[error("does not match layout 2006-01-02 15:04:05.000000, reads as {rendered:?}")]
    Layout { rendered: String },
}

#[derive(Debug, Error)]
pub enum LogStatsError {
    #[error("error reading file {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error decoding log records")]
    Decode(#[from] serde_json::Error),
    #[error("invalid timestamp {value:?} in log record {index}")]
    Timestamp {
        index: usize,
        value: String,
        #[source]
        source: TimestampError,
    },
}
