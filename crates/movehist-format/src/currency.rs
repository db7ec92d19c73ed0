//! Currency formatting.

use serde_json::Value;

use crate::PLACEHOLDER;
use crate::number::{group_thousands, integer_from_value};

/// Format integer cents as dollars: `123499` renders `$1,234.99`.
///
/// `Some(0)` renders `$0.00`; only a missing value renders the placeholder.
#[must_use]
pub fn format_cents(cents: Option<i64>) -> String {
    let Some(cents) = cents else {
        return PLACEHOLDER.to_string();
    };
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!(
        "{sign}${}.{:02}",
        group_thousands(magnitude / 100),
        magnitude % 100
    )
}

/// Read a cents column, accepting integers and numeric strings.
#[must_use]
pub fn cents_from_value(value: &Value) -> Option<i64> {
    integer_from_value(value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(Some(123_499), "$1,234.99")]
    #[case(Some(45_985), "$459.85")]
    #[case(Some(5), "$0.05")]
    #[case(Some(0), "$0.00")]
    #[case(Some(-2_500), "-$25.00")]
    #[case(Some(100_000_000), "$1,000,000.00")]
    #[case(None, "-")]
    fn formats_cents(#[case] input: Option<i64>, #[case] expected: &str) {
        assert_eq!(format_cents(input), expected);
    }

    #[test]
    fn zero_is_distinct_from_missing() {
        assert_ne!(format_cents(Some(0)), format_cents(None));
    }

    #[test]
    fn reads_string_cents() {
        assert_eq!(cents_from_value(&json!("45985")), Some(45_985));
        assert_eq!(format_cents(cents_from_value(&json!("oops"))), "-");
    }
}
