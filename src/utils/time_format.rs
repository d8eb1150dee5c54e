//! Timestamp formatting for `create_time` columns.
//!
//! Stored timestamps are human-readable text in a configured UTC offset,
//! e.g. `July 1, 2024 14:05:30`. Both the offset and the chrono pattern come
//! from configuration so output can be pinned in tests and adjusted per
//! deployment.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::fmt::Write as _;

pub const DEFAULT_OFFSET: &str = "+08:00";
pub const DEFAULT_PATTERN: &str = "%B %-d, %Y %H:%M:%S";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimeFormatError {
    #[error("invalid UTC offset '{0}', expected '+HH:MM' or '-HH:MM'")]
    InvalidOffset(String),

    #[error("invalid time format pattern '{0}'")]
    InvalidPattern(String),
}

/// Formats instants in a fixed offset with a chrono `strftime` pattern.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    offset: FixedOffset,
    pattern: String,
}

impl TimeFormatter {
    /// Builds a formatter, rejecting offsets and patterns chrono cannot render.
    pub fn new(offset: &str, pattern: &str) -> Result<Self, TimeFormatError> {
        let offset = parse_offset(offset)?;

        let mut probe = String::new();
        if pattern.is_empty() || write!(probe, "{}", Utc::now().format(pattern)).is_err() {
            return Err(TimeFormatError::InvalidPattern(pattern.to_string()));
        }

        Ok(Self {
            offset,
            pattern: pattern.to_string(),
        })
    }

    /// Formats the given instant.
    pub fn format(&self, at: DateTime<Utc>) -> String {
        let local = at.with_timezone(&self.offset);

        let mut out = String::new();
        match write!(out, "{}", local.format(&self.pattern)) {
            Ok(()) => out,
            Err(_) => local.to_rfc3339(),
        }
    }

    /// Formats the current time.
    pub fn now(&self) -> String {
        self.format(Utc::now())
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(8 * 3600).expect("+08:00 is in range"),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

/// Parses `+HH:MM`, `-HH:MM`, `+HHMM`, `Z` or `UTC`.
pub fn parse_offset(raw: &str) -> Result<FixedOffset, TimeFormatError> {
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    trimmed
        .parse::<FixedOffset>()
        .map_err(|_| TimeFormatError::InvalidOffset(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, 6, 5, 30).unwrap()
    }

    #[test]
    fn test_default_formatter() {
        let formatter = TimeFormatter::default();
        assert_eq!(formatter.format(instant()), "July 1, 2024 14:05:30");
    }

    #[test]
    fn test_custom_offset_and_pattern() {
        let formatter = TimeFormatter::new("-05:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(formatter.format(instant()), "2024-07-01 01:05:30");
    }

    #[test]
    fn test_offset_crossing_day_boundary() {
        let formatter = TimeFormatter::new("+10:00", DEFAULT_PATTERN).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 12, 31, 20, 0, 0).unwrap();
        assert_eq!(formatter.format(late), "January 1, 2025 06:00:00");
    }

    #[test]
    fn test_parse_offset_variants() {
        assert_eq!(parse_offset("+08:00").unwrap().local_minus_utc(), 8 * 3600);
        assert_eq!(parse_offset("+0530").unwrap().local_minus_utc(), 5 * 3600 + 1800);
        assert_eq!(parse_offset("-03:30").unwrap().local_minus_utc(), -(3 * 3600 + 1800));
        assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("utc").unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_offset_rejects_garbage() {
        for raw in ["", "08:00", "+8", "Asia/Shanghai", "+ab:cd"] {
            assert!(parse_offset(raw).is_err(), "'{}' should be rejected", raw);
        }
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert_eq!(
            TimeFormatter::new("+00:00", "%Q").unwrap_err(),
            TimeFormatError::InvalidPattern("%Q".to_string())
        );
        assert!(TimeFormatter::new("+00:00", "").is_err());
    }
}
