//! Small text helpers: yes/no, day counts, mileage, names.

use crate::PLACEHOLDER;
use crate::number::group_thousands;

#[must_use]
pub fn format_yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".to_string(),
        Some(false) => "No".to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// `90` renders `90 days`.
#[must_use]
pub fn format_days(days: Option<i64>) -> String {
    days.map_or_else(|| PLACEHOLDER.to_string(), |days| format!("{days} days"))
}

/// `1234` renders `1,234 mi`.
#[must_use]
pub fn format_miles(miles: Option<i64>) -> String {
    miles.map_or_else(
        || PLACEHOLDER.to_string(),
        |miles| {
            let sign = if miles < 0 { "-" } else { "" };
            format!("{sign}{} mi", group_thousands(miles.unsigned_abs()))
        },
    )
}

/// Join first and last name, skipping blank parts. `None` if both are blank.
#[must_use]
pub fn format_full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let name = [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!name.is_empty()).then_some(name)
}
