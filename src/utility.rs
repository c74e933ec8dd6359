//! Utilities
use chrono::Duration;

const NANOSECONDS_PER_MICROSECOND: u64 = 1_000;
const NANOSECONDS_PER_MILLISECOND: u64 = 1_000_000;
const NANOSECONDS_PER_SECOND: u64 = 1_000_000_000;

/// Render a duration the way the log producers' tooling does: `0s`, `250µs`, `1.5ms`, `10s`, `2h3m4.5s`.
///
/// Below one second the largest fitting unit of ns, µs and ms is used.
/// From one second on, minutes and hours are added when they are non-zero,
/// and once a larger unit is shown, the smaller ones are shown too (`1h0m0s`).
/// A duration beyond the i64 nanosecond range saturates to that range.
pub fn format_duration(duration: Duration) -> String
{
    let nanoseconds = duration
        .num_nanoseconds()
        .unwrap_or(if duration < Duration::zero() { i64::MIN } else { i64::MAX });
    if nanoseconds == 0 {
        return String::from("0s");
    }
    let sign = if nanoseconds < 0 { "-" } else { "" };
    let value = nanoseconds.unsigned_abs();

    if value < NANOSECONDS_PER_SECOND {
        let (precision, unit) = match value {
            v if v < NANOSECONDS_PER_MICROSECOND => (0, "ns"),
            v if v < NANOSECONDS_PER_MILLISECOND => (3, "µs"),
            _ => (6, "ms"),
        };
        let (whole, fraction) = split_fraction(value, precision);
        return format!("{}{}{}{}", sign, whole, fraction, unit);
    }

    let (seconds, fraction) = split_fraction(value, 9);
    let mut rendered = format!("{}{}s", seconds % 60, fraction);
    let minutes = seconds / 60;
    if minutes > 0 {
        rendered = format!("{}m{}", minutes % 60, rendered);
        let hours = minutes / 60;
        if hours > 0 {
            rendered = format!("{}h{}", hours, rendered);
        }
    }
    format!("{}{}", sign, rendered)
}

// Split value into its whole part and the decimal fraction of the lowest `precision` digits.
// The fraction has its trailing zeros removed, and is empty when zero.
fn split_fraction(
    value: u64,
    precision: u32,
) -> (u64, String)
{
    let divisor = 10_u64.pow(precision);
    let fraction = value % divisor;
    if fraction == 0 {
        return (value / divisor, String::new());
    }
    let digits = format!("{:0width$}", fraction, width = precision as usize);
    (value / divisor, format!(".{}", digits.trim_end_matches('0')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_format_zero_duration() {
        assert_eq!(format_duration(Duration::zero()), "0s");
    }

    #[test]
    fn unit_format_sub_second_durations() {
        assert_eq!(format_duration(Duration::nanoseconds(999)), "999ns");
        assert_eq!(format_duration(Duration::microseconds(250)), "250µs");
        assert_eq!(format_duration(Duration::nanoseconds(1_500)), "1.5µs");
        assert_eq!(format_duration(Duration::microseconds(1_500)), "1.5ms");
        assert_eq!(format_duration(Duration::microseconds(999_999)), "999.999ms");
    }

    #[test]
    fn unit_format_second_and_larger_durations() {
        assert_eq!(format_duration(Duration::seconds(10)), "10s");
        assert_eq!(format_duration(Duration::milliseconds(63_750)), "1m3.75s");
        assert_eq!(format_duration(Duration::hours(1)), "1h0m0s");
        assert_eq!(format_duration(Duration::milliseconds(7_384_500)), "2h3m4.5s");
        assert_eq!(format_duration(Duration::microseconds(1_000_001)), "1.000001s");
    }

    #[test]
    fn unit_format_negative_duration() {
        assert_eq!(format_duration(Duration::milliseconds(-1_500)), "-1.5s");
        assert_eq!(format_duration(Duration::microseconds(-250)), "-250µs");
    }

    #[test]
    fn unit_format_duration_beyond_nanosecond_range_saturates() {
        assert_eq!(format_duration(Duration::days(365_000)), "2562047h47m16.854775807s");
    }
}
