//! Wall-clock timestamp conversion.
//!
//! Log lines carry `HH:MM:SS[.frac]` stamps with no date or timezone. They are
//! converted to plain seconds since midnight; a capture that crosses midnight
//! is left non-monotonic.

use regex::Regex;
use std::sync::LazyLock;

/// Hours and minutes are integers of any width, seconds may carry a fraction
static TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<h>\d+):(?<m>\d+):(?<s>\d+(?:\.\d*)?|\.\d+)$")
        .expect("timestamp regex is valid")
});

/// Parse timestamp from H:M:S[.fff] format to seconds
///
/// Returns `None` if the text is not exactly three `:`-separated numeric
/// components.
pub fn to_seconds(timestamp: &str) -> Option<f64> {
    let captures = TIMESTAMP_REGEX.captures(timestamp.trim())?;

    let hours: f64 = captures["h"].parse().ok()?;
    let minutes: f64 = captures["m"].parse().ok()?;
    let seconds: f64 = captures["s"].parse().ok()?;

    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_seconds() {
        assert_eq!(to_seconds("00:00:00"), Some(0.0));
        assert_eq!(to_seconds("00:01:00"), Some(60.0));
        assert_eq!(to_seconds("01:00:00.000"), Some(3600.0));
        assert_eq!(to_seconds("01:02:03.5"), Some(3723.5));
        assert_eq!(to_seconds("00:00:01.250"), Some(1.25));
    }

    #[test]
    fn test_to_seconds_any_digit_count() {
        assert_eq!(to_seconds("100:0:0"), Some(360000.0));
        assert_eq!(to_seconds("0:5:7"), Some(307.0));
    }

    #[test]
    fn test_to_seconds_rejects_malformed() {
        assert_eq!(to_seconds(""), None);
        assert_eq!(to_seconds("12:30"), None);
        assert_eq!(to_seconds("1:2:3:4"), None);
        assert_eq!(to_seconds("aa:00:00"), None);
        assert_eq!(to_seconds("00:00:1e3"), None);
        assert_eq!(to_seconds("00:00:inf"), None);
        assert_eq!(to_seconds("-1:00:00"), None);
        assert_eq!(to_seconds("0: 0: 1"), None);
    }

    #[test]
    fn test_to_seconds_tolerates_surrounding_whitespace() {
        assert_eq!(to_seconds("  00:00:02.5 "), Some(2.5));
    }
}
