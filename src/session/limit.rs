//! Time-limit parsing and elapsed-time formatting.

/// Ticks per minute of time limit.
pub const TICKS_PER_MINUTE: u64 = 60;

/// Convert a raw "time limit in minutes" input into ticks.
///
/// Only the leading whole number is read, so `"2.9"` is 2 minutes and
/// `"1e3"` is 1 minute. Returns `0` (no limit) for absent, blank,
/// negative, or input that does not start with a digit.
#[must_use]
pub fn parse_time_limit(input: Option<&str>) -> u64 {
    let raw = input.map_or("", str::trim_start);
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut seen = false;
    let minutes = digits.fold(0_u64, |acc, d| {
        seen = true;
        acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
    });

    if !seen || negative {
        return 0;
    }
    minutes.saturating_mul(TICKS_PER_MINUTE)
}

/// Format a tick count as MM:SS.
///
/// Minutes keep growing past 59 rather than rolling into hours.
#[must_use]
pub fn format_elapsed(ticks: u64) -> String {
    let minutes = ticks / 60;
    let seconds = ticks % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_limit_minutes() {
        assert_eq!(parse_time_limit(Some("1")), 60);
        assert_eq!(parse_time_limit(Some(" 5 ")), 300);
        assert_eq!(parse_time_limit(Some("0")), 0);
    }

    #[test]
    fn test_parse_time_limit_fractional_truncates() {
        assert_eq!(parse_time_limit(Some("2.9")), 120);
        assert_eq!(parse_time_limit(Some("0.5")), 0);
    }

    #[test]
    fn test_parse_time_limit_reads_leading_digits() {
        assert_eq!(parse_time_limit(Some("1e3")), 60);
        assert_eq!(parse_time_limit(Some("5abc")), 300);
        assert_eq!(parse_time_limit(Some("+3")), 180);
        assert_eq!(
            parse_time_limit(Some("99999999999999999999999")),
            u64::MAX
        );
    }

    #[test]
    fn test_parse_time_limit_invalid_means_unlimited() {
        assert_eq!(parse_time_limit(None), 0);
        assert_eq!(parse_time_limit(Some("")), 0);
        assert_eq!(parse_time_limit(Some("   ")), 0);
        assert_eq!(parse_time_limit(Some("abc")), 0);
        assert_eq!(parse_time_limit(Some("-3")), 0);
        assert_eq!(parse_time_limit(Some("-0")), 0);
        assert_eq!(parse_time_limit(Some(".5")), 0);
        assert_eq!(parse_time_limit(Some("NaN")), 0);
        assert_eq!(parse_time_limit(Some("inf")), 0);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(76), "01:16");
        assert_eq!(format_elapsed(3600), "60:00");
    }
}
