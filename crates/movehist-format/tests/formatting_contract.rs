//! Locale-stable output of the shared helpers, as consumed by history rows.

use movehist_format::*;
use pretty_assertions::assert_eq;

#[test]
fn address_contract() {
    let parts = AddressParts {
        street_address_1: Some("12 Any Street".into()),
        street_address_2: Some("P.O. Box 1234".into()),
        city: Some("Beverly Hills".into()),
        state: Some("CA".into()),
        postal_code: Some("90211".into()),
    };
    assert_eq!(
        format_address(&parts),
        "12 Any Street, P.O. Box 1234, Beverly Hills, CA 90211"
    );
}

#[test]
fn currency_contract() {
    assert_eq!(format_cents(Some(123_499)), "$1,234.99");
    assert_eq!(format_cents(Some(0)), "$0.00");
    assert_eq!(format_cents(None), PLACEHOLDER);
}

#[test]
fn weight_contract() {
    assert_eq!(format_weight(Some(8_000)), "8,000 lbs");
}

#[test]
fn date_contract() {
    assert_eq!(format_date(Some("2022-10-18")), "18 Oct 2022");
    assert_eq!(format_date(None), PLACEHOLDER);
}

#[test]
fn helpers_are_idempotent() {
    for _ in 0..3 {
        assert_eq!(format_cents(Some(45_985)), "$459.85");
        assert_eq!(format_date(Some("2022-10-18")), "18 Oct 2022");
    }
}
