//! The impls and functions.
//!
use std::{collections::HashMap, fmt, fs, io::{self, Write}, path::Path, time::Instant};
use chrono::Duration;
use serde_json::Value;
use itertools::Itertools;
use log::*;
use anyhow::{Context, Result};
use crate::error::LogStatsError;
use crate::logrecords::{AllLogRecords, JsonLogRecord, LogRecord, LongestTransaction, OperationErrors, Timestamp};
use crate::utility;
use crate::ERROR_LEVEL;

impl LogRecord {
    pub fn is_error(&self) -> bool {
        self.level == ERROR_LEVEL
    }
    /// Turn a json log record into a log record by decoding its timestamp.
    /// `index` is the position in the json array, for reporting.
    fn from_json(
        index: usize,
        json_logrecord: JsonLogRecord,
    ) -> Result<LogRecord, LogStatsError>
    {
        let timestamp = match json_logrecord.timestamp {
            None => Timestamp::default(),
            Some(json_value) => {
                // a non-string timestamp is decoded from its json text, which fails the layout.
                let value = match json_value {
                    Value::String(value) => value,
                    other => other.to_string(),
                };
                match Timestamp::parse(&value) {
                    Ok(timestamp) => timestamp,
                    Err(source) => return Err(LogStatsError::Timestamp { index, value, source }),
                }
            },
        };
        Ok(LogRecord {
            service: json_logrecord.service.unwrap_or_default(),
            level: json_logrecord.level.unwrap_or_default(),
            timestamp,
            operation: json_logrecord.operation.unwrap_or_default(),
            message: json_logrecord.message.unwrap_or_default(),
            transaction_id: json_logrecord.transaction_id.unwrap_or_default(),
        })
    }
}

impl AllLogRecords {
    /// Read the json file at `path` and decode all log records in it.
    pub fn read_logrecords(
        path: &Path,
    ) -> Result<AllLogRecords, LogStatsError>
    {
        let json_data = AllLogRecords::read_file(path)?;
        AllLogRecords::parse_logrecords(&json_data)
    }
    fn read_file(
        path: &Path,
    ) -> Result<Vec<u8>, LogStatsError>
    {
        info!("begin read file: {}", path.display());
        let timer = Instant::now();

        let json_data = fs::read(path)
            .map_err(|source| LogStatsError::ReadFile { path: path.to_path_buf(), source })?;

        info!("end read file: {} bytes, {:?}", json_data.len(), timer.elapsed());
        Ok(json_data)
    }
    /// Decode a json array of log record objects.
    ///
    /// This is all or nothing: a single record with an invalid timestamp fails the whole array.
    pub fn parse_logrecords(
        json_data: &[u8],
    ) -> Result<AllLogRecords, LogStatsError>
    {
        info!("begin parse");
        let timer = Instant::now();

        let json_logrecords: Vec<JsonLogRecord> = serde_json::from_slice(json_data)?;
        let logrecords = json_logrecords
            .into_iter()
            .enumerate()
            .map(|(index, json_logrecord)| LogRecord::from_json(index, json_logrecord))
            .collect::<Result<Vec<LogRecord>, LogStatsError>>()?;

        info!("end parse: {} records, {:?}", logrecords.len(), timer.elapsed());
        Ok(AllLogRecords { logrecords })
    }
    /// The transaction with the longest time between its earliest and latest record.
    ///
    /// Only a transaction with a duration greater than the ones before it is taken,
    /// so with equal durations the transaction seen first in the records wins,
    /// and if no transaction has a duration above zero, the result is empty.
    pub fn longest_transaction(&self) -> LongestTransaction
    {
        let mut longest_transaction = LongestTransaction::default();

        for (transaction_id, mut logrecords) in group_by_first_seen(&self.logrecords, |logrecord| logrecord.transaction_id.as_str())
        {
            logrecords.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
            let duration = match (logrecords.first(), logrecords.last()) {
                (Some(first), Some(last)) => last.timestamp.duration_since(&first.timestamp),
                _ => Duration::zero(),
            };
            debug!("transaction: {}, records: {}, duration: {}", transaction_id, logrecords.len(), utility::format_duration(duration));
            if duration > longest_transaction.duration
            {
                longest_transaction = LongestTransaction {
                    transaction_id: transaction_id.to_string(),
                    duration,
                };
            }
        }
        longest_transaction
    }
    /// The operation with the most records with level `ERROR`.
    ///
    /// With equal error counts the operation seen first in the records wins.
    /// Without any error records, the result is empty with zero errors.
    pub fn operation_with_most_errors(&self) -> OperationErrors
    {
        let mut operation_errors = OperationErrors::default();

        for (operation, logrecords) in group_by_first_seen(&self.logrecords, |logrecord| logrecord.operation.as_str())
        {
            let errors = logrecords.iter().filter(|logrecord| logrecord.is_error()).count();
            debug!("operation: {}, records: {}, errors: {}", operation, logrecords.len(), errors);
            if errors > operation_errors.errors
            {
                operation_errors = OperationErrors {
                    operation: operation.to_string(),
                    errors,
                };
            }
        }
        operation_errors
    }
    /// Write the three summary lines.
    pub fn write_summary<W: Write>(
        &self,
        writer: &mut W,
    ) -> io::Result<()>
    {
        let longest_transaction = self.longest_transaction();
        let operation_errors = self.operation_with_most_errors();

        writeln!(writer, "Total Log Entries: {}", self.logrecords.len())?;
        writeln!(writer, "Longest Transaction: {}", longest_transaction)?;
        writeln!(writer, "Operation with Most Errors: {}", operation_errors)?;
        Ok(())
    }
    pub fn print(&self) -> Result<()>
    {
        info!("print summary");

        let mut stdout = io::stdout().lock();
        self.write_summary(&mut stdout)
            .with_context(|| "Error writing summary to stdout")?;
        stdout.flush()
            .with_context(|| "Error flushing stdout")?;
        Ok(())
    }
}

/// Group the log records by `key`, with the groups in the order their key is first seen.
/// Inside a group, the records keep the order of `logrecords`.
fn group_by_first_seen<'a>(
    logrecords: &'a [LogRecord],
    key: fn(&LogRecord) -> &str,
) -> Vec<(&'a str, Vec<&'a LogRecord>)>
{
    let mut groups: HashMap<&str, Vec<&LogRecord>> = HashMap::new();
    for logrecord in logrecords {
        groups.entry(key(logrecord)).or_default().push(logrecord);
    }
    logrecords
        .iter()
        .map(key)
        .unique()
        .filter_map(|group_key| groups.remove(group_key).map(|group| (group_key, group)))
        .collect()
}

impl Default for LongestTransaction {
    fn default() -> Self {
        LongestTransaction { transaction_id: String::new(), duration: Duration::zero() }
    }
}

impl fmt::Display for LongestTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.transaction_id, utility::format_duration(self.duration))
    }
}

impl fmt::Display for OperationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} Errors)", self.operation, self.errors)
    }
}
