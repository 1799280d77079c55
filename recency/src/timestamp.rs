//! Timestamp recognition for loosely-typed field values.
//!
//! A value counts as a timestamp only if it resolves to a real calendar
//! date-time. Anything else (null, booleans, nested objects, free text) is
//! treated as absent so the caller can fall through to its next candidate.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Largest distance from the epoch, in milliseconds, that still names a
/// representable calendar date-time (±100,000,000 days).
pub const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Offset-aware layouts beyond RFC 3339 / RFC 2822.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Naive date-time layouts, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, anchored to UTC midnight. Slash and dash dates with a
/// trailing year are month-first, as browsers read them.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Parse a field value into epoch milliseconds.
///
/// Strings are tried against the supported layouts in order; finite numbers
/// are taken as epoch milliseconds. Returns `None` for everything else.
pub fn parse_timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::String(text) => parse_timestamp_str(text),
        Value::Number(number) => {
            let millis = number.as_f64()?;
            if millis.is_finite() && millis.abs() <= MAX_EPOCH_MILLIS {
                Some(millis.trunc() as i64)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Parse a date or date-time string into epoch milliseconds.
pub fn parse_timestamp_str(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.timestamp_millis());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.timestamp_millis());
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(text, format) {
            return Some(parsed.timestamp_millis());
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed.and_utc().timestamp_millis());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn millis(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, min, s)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_timestamp(&json!("2024-06-01T12:30:00+02:00")),
            Some(millis(2024, 6, 1, 10, 30, 0))
        );
        assert_eq!(
            parse_timestamp(&json!("2024-06-01T12:30:00.250Z")),
            Some(millis(2024, 6, 1, 12, 30, 0) + 250)
        );
    }

    #[test]
    fn parses_rfc2822() {
        assert_eq!(
            parse_timestamp(&json!("Sat, 01 Jun 2024 08:00:00 GMT")),
            Some(millis(2024, 6, 1, 8, 0, 0))
        );
    }

    #[test]
    fn parses_offset_without_colon() {
        assert_eq!(
            parse_timestamp(&json!("2024-06-01T08:00:00+0100")),
            Some(millis(2024, 6, 1, 7, 0, 0))
        );
    }

    #[test]
    fn naive_datetimes_are_utc() {
        assert_eq!(
            parse_timestamp(&json!("2024-06-01T08:15:00")),
            Some(millis(2024, 6, 1, 8, 15, 0))
        );
        assert_eq!(
            parse_timestamp(&json!("2024-06-01 08:15:00.5")),
            Some(millis(2024, 6, 1, 8, 15, 0) + 500)
        );
        assert_eq!(
            parse_timestamp(&json!("2024-06-01T08:15")),
            Some(millis(2024, 6, 1, 8, 15, 0))
        );
    }

    #[test]
    fn dates_anchor_to_midnight() {
        assert_eq!(
            parse_timestamp(&json!("2024-01-01")),
            Some(millis(2024, 1, 1, 0, 0, 0))
        );
        assert_eq!(
            parse_timestamp(&json!(" 2024/02/29 ")),
            Some(millis(2024, 2, 29, 0, 0, 0))
        );
    }

    #[test]
    fn month_first_dates() {
        assert_eq!(
            parse_timestamp(&json!("06/01/2024")),
            Some(millis(2024, 6, 1, 0, 0, 0))
        );
        assert_eq!(
            parse_timestamp(&json!("12-31-2023")),
            Some(millis(2023, 12, 31, 0, 0, 0))
        );
        // Day-first reading would be month 13
        assert_eq!(parse_timestamp(&json!("13/01/2024")), None);
    }

    #[test]
    fn long_form_dates() {
        assert_eq!(
            parse_timestamp(&json!("June 1, 2024")),
            Some(millis(2024, 6, 1, 0, 0, 0))
        );
        assert_eq!(
            parse_timestamp(&json!("Sep 15, 2023")),
            Some(millis(2023, 9, 15, 0, 0, 0))
        );
        assert_eq!(parse_timestamp(&json!("Smarch 1, 2024")), None);
    }

    #[test]
    fn numbers_are_epoch_millis() {
        assert_eq!(parse_timestamp(&json!(1_717_200_000_000i64)), Some(1_717_200_000_000));
        assert_eq!(parse_timestamp(&json!(1500.9)), Some(1500));
        assert_eq!(parse_timestamp(&json!(-86_400_000)), Some(-86_400_000));
        assert_eq!(parse_timestamp(&json!(9.0e15)), None);
    }

    #[test]
    fn rejects_invalid_calendar_values() {
        assert_eq!(parse_timestamp(&json!("2024-02-30")), None);
        assert_eq!(parse_timestamp(&json!("2024-13-01")), None);
        assert_eq!(parse_timestamp(&json!("not-a-date")), None);
        assert_eq!(parse_timestamp(&json!("")), None);
        assert_eq!(parse_timestamp(&json!("   ")), None);
    }

    #[test]
    fn rejects_non_temporal_values() {
        assert_eq!(parse_timestamp(&Value::Null), None);
        assert_eq!(parse_timestamp(&json!(true)), None);
        assert_eq!(parse_timestamp(&json!(["2024-01-01"])), None);
        assert_eq!(parse_timestamp(&json!({"date": "2024-01-01"})), None);
    }
}
