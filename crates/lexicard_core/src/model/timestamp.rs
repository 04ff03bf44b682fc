//! Snapshot timestamp parsing.
//!
//! # Invariants
//! - Output is always RFC 3339 in UTC.
//! - Input may be RFC 3339 with an offset, or ISO-8601 without one; offsetless
//!   values are read as UTC.

use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use serde::{Deserialize, Deserializer};

/// Parses a stored `next_review` value.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, ParseError> {
    match DateTime::parse_from_rfc3339(text) {
        Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
        Err(rfc_err) => text
            .parse::<NaiveDateTime>()
            .map(|naive| naive.and_utc())
            .map_err(|_| rfc_err),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_timestamp(&text)
        .map_err(|err| serde::de::Error::custom(format!("invalid timestamp `{text}`: {err}")))
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;
    use chrono::{TimeZone, Timelike, Utc};

    #[test]
    fn offset_timestamps_are_converted_to_utc() {
        let parsed = parse_timestamp("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let parsed = parse_timestamp("2024-05-01T10:00:00.123456").unwrap();
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.nanosecond(), 123_456_000);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_timestamp("next tuesday").is_err());
    }
}
