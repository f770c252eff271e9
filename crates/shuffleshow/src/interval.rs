use std::time::Duration;

use crate::error::IntervalError;

/// Delay used whenever the interval text cannot be parsed.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

/// What the launcher's interval field holds on startup.
pub const DEFAULT_INTERVAL_TEXT: &str = "15000";

/// Parse a positive millisecond count, ignoring surrounding whitespace.
pub fn parse_interval(text: &str) -> Result<Duration, IntervalError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(IntervalError::Empty);
    }
    let ms: i64 = trimmed
        .parse()
        .map_err(|_| IntervalError::NotANumber(trimmed.to_string()))?;
    if ms <= 0 {
        return Err(IntervalError::NotPositive(ms));
    }
    Ok(Duration::from_millis(ms as u64))
}

/// The delay to schedule with, plus the reason if the default was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub delay: Duration,
    pub fallback: Option<IntervalError>,
}

/// Resolve interval text for one scheduling decision.
pub fn resolve_interval(text: &str) -> Resolved {
    match parse_interval(text) {
        Ok(delay) => Resolved {
            delay,
            fallback: None,
        },
        Err(e) => Resolved {
            delay: DEFAULT_INTERVAL,
            fallback: Some(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_interval("1500"), Ok(Duration::from_millis(1500)));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_interval("  250\n"), Ok(Duration::from_millis(250)));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert_eq!(
            parse_interval("abc"),
            Err(IntervalError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_interval("1.5"),
            Err(IntervalError::NotANumber("1.5".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_empty_and_non_positive() {
        assert_eq!(parse_interval("   "), Err(IntervalError::Empty));
        assert_eq!(parse_interval("0"), Err(IntervalError::NotPositive(0)));
        assert_eq!(parse_interval("-20"), Err(IntervalError::NotPositive(-20)));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let resolved = resolve_interval("abc");
        assert_eq!(resolved.delay, DEFAULT_INTERVAL);
        assert_eq!(resolved.delay, Duration::from_millis(3000));
        assert!(resolved.fallback.is_some());
    }

    #[test]
    fn test_resolve_valid_has_no_fallback() {
        let resolved = resolve_interval(DEFAULT_INTERVAL_TEXT);
        assert_eq!(resolved.delay, Duration::from_millis(15000));
        assert_eq!(resolved.fallback, None);
    }
}
