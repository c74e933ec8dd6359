//! The timestamp decoder
//!
use std::{fmt, str::FromStr};
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use crate::error::TimestampError;
use crate::logrecords::Timestamp;
use crate::{TIMESTAMP_LAYOUT, TIMESTAMP_LENGTH};

impl Timestamp {
    /// Parse a timestamp in the fixed layout `2006-01-02 15:04:05.000000`.
    ///
    /// Surrounding double quotes are stripped first, so a raw json string value can be passed as well.
    /// The fraction must have exactly 6 digits, and the value must render back to exactly the input.
    pub fn parse(input: &str) -> Result<Timestamp, TimestampError>
    {
        let input = input.trim_matches('"');
        // chrono accepts single digit months, days and so on; the layout does not.
        if input.len() != TIMESTAMP_LENGTH {
            return Err(TimestampError::Length { expected: TIMESTAMP_LENGTH, found: input.len() });
        }
        let timestamp = Timestamp(NaiveDateTime::parse_from_str(input, TIMESTAMP_LAYOUT)?);
        // chrono represents second 60 as a nanosecond value past one second.
        if timestamp.0.nanosecond() >= 1_000_000_000 {
            return Err(TimestampError::LeapSecond);
        }
        // chrono matches the space in the layout with any run of whitespace.
        let rendered = timestamp.to_string();
        if rendered != input {
            return Err(TimestampError::Layout { rendered });
        }
        Ok(timestamp)
    }
    /// The time between `earlier` and self, negative if `earlier` is later.
    pub fn duration_since(
        &self,
        earlier: &Timestamp,
    ) -> Duration
    {
        self.0.signed_duration_since(earlier.0)
    }
}

/// The zero timestamp: `0001-01-01 00:00:00.000000`, used for a record without a timestamp.
impl Default for Timestamp {
    fn default() -> Self {
        Timestamp(
            NaiveDate::from_ymd_opt(1, 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .unwrap_or_default()
        )
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(input)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_LAYOUT))
    }
}
