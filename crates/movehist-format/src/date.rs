//! Date formatting.
//!
//! Audit payloads carry dates as ISO strings, sometimes as full timestamps.
//! Output is fixed to English month abbreviations regardless of locale.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::PLACEHOLDER;

const DATE_FORMAT: &str = "%d %b %Y";
const DATE_TIME_FORMAT: &str = "%d %b %y %H:%M";

/// Format an ISO date or timestamp as `DD MMM YYYY`: `2022-10-18` renders
/// `18 Oct 2022`. Missing or unparsable input renders the placeholder.
#[must_use]
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_date)
        .map_or_else(|| PLACEHOLDER.to_string(), |date| date.format(DATE_FORMAT).to_string())
}

/// Format a row timestamp as `DD MMM YY HH:mm` (UTC).
#[must_use]
pub fn format_date_time(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(
        || PLACEHOLDER.to_string(),
        |timestamp| timestamp.format(DATE_TIME_FORMAT).to_string(),
    )
}

/// Parse the calendar date out of an ISO date, RFC 3339 timestamp, or naive
/// timestamp.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    // Postgres-style `2022-10-18 00:00:00+00` and similar: keep the date part.
    trimmed
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("2022-10-18"), "18 Oct 2022")]
    #[case(Some("2022-03-01T00:00:00Z"), "01 Mar 2022")]
    #[case(Some("2023-12-25T10:11:12.123456"), "25 Dec 2023")]
    #[case(Some("2021-07-04 00:00:00+00"), "04 Jul 2021")]
    #[case(Some(""), "-")]
    #[case(Some("not a date"), "-")]
    #[case(None, "-")]
    fn formats_dates(#[case] input: Option<&str>, #[case] expected: &str) {
        assert_eq!(format_date(input), expected);
    }

    #[test]
    fn formats_row_timestamps() {
        let timestamp = Utc.with_ymd_and_hms(2022, 10, 18, 14, 5, 0).unwrap();
        assert_eq!(format_date_time(Some(timestamp)), "18 Oct 22 14:05");
        assert_eq!(format_date_time(None), "-");
    }
}
