//! Integer parsing and thousands grouping.

use serde_json::Value;

/// Group the digits of `value` with `,` every three places.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Read an integer column value. Numeric strings are accepted because some
/// audit payloads carry integers as text; fractional numbers are truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|float| float.trunc() as i64)),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|float| float.is_finite())
                    .map(|float| float.trunc() as i64)
            })
        }
        _ => None,
    }
}
