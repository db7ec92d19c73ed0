//! Weight and dimension formatting.

use crate::PLACEHOLDER;
use crate::number::group_thousands;

/// Format pounds with thousands separators: `8000` renders `8,000 lbs`.
#[must_use]
pub fn format_weight(pounds: Option<i64>) -> String {
    let Some(pounds) = pounds else {
        return PLACEHOLDER.to_string();
    };
    let sign = if pounds < 0 { "-" } else { "" };
    format!("{sign}{} lbs", group_thousands(pounds.unsigned_abs()))
}

/// Format a height/length/width triple given in thousandths of an inch as
/// `HxLxW in`. Any missing component renders the placeholder.
#[must_use]
pub fn format_dimensions(height: Option<i64>, length: Option<i64>, width: Option<i64>) -> String {
    match (height, length, width) {
        (Some(height), Some(length), Some(width)) => format!(
            "{}x{}x{} in",
            thousandths_to_inches(height),
            thousandths_to_inches(length),
            thousandths_to_inches(width)
        ),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `12500` renders `12.5`; whole inches render without a fraction.
fn thousandths_to_inches(thousandths: i64) -> String {
    let sign = if thousandths < 0 { "-" } else { "" };
    let magnitude = thousandths.unsigned_abs();
    let whole = magnitude / 1000;
    let fraction = magnitude % 1000;
    if fraction == 0 {
        return format!("{sign}{whole}");
    }
    let digits = format!("{fraction:03}");
    format!("{sign}{whole}.{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some(8_000), "8,000 lbs")]
    #[case(Some(500), "500 lbs")]
    #[case(Some(0), "0 lbs")]
    #[case(Some(18_000), "18,000 lbs")]
    #[case(None, "-")]
    fn formats_weights(#[case] input: Option<i64>, #[case] expected: &str) {
        assert_eq!(format_weight(input), expected);
    }

    #[rstest]
    #[case(Some(10_000), Some(20_000), Some(30_000), "10x20x30 in")]
    #[case(Some(12_500), Some(1_250), Some(1_005), "12.5x1.25x1.005 in")]
    #[case(Some(10_000), None, Some(30_000), "-")]
    fn formats_dimensions(
        #[case] height: Option<i64>,
        #[case] length: Option<i64>,
        #[case] width: Option<i64>,
        #[case] expected: &str,
    ) {
        assert_eq!(format_dimensions(height, length, width), expected);
    }
}
