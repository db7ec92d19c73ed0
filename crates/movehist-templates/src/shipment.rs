//! Shipment headers built from record context.
//!
//! Context rows describing a shipment carry `shipment_type` plus either a
//! `shipment_locator` or a short `shipment_id_abbr`. The header reads
//! `HHG shipment #ABC12`.

use movehist_core::{AuditRecord, FieldMap, ShipmentType, value_text};

/// Display label for a shipment type code; unknown codes show raw.
#[must_use]
pub fn shipment_type_label(code: &str) -> String {
    ShipmentType::from_code(code).map_or_else(|| code.to_string(), |kind| kind.label().to_string())
}

/// Header for a single context row, or `None` when the row names no shipment.
#[must_use]
pub fn shipment_label_from(row: &FieldMap) -> Option<String> {
    let text = |key: &str| {
        row.get(key)
            .and_then(value_text)
            .filter(|value| !value.trim().is_empty())
    };
    let kind = text("shipment_type")?;
    let locator = text("shipment_locator")
        .or_else(|| text("shipment_id_abbr").map(|abbr| abbr.to_uppercase()));
    let label = shipment_type_label(&kind);
    Some(match locator {
        Some(locator) => format!("{label} shipment #{locator}"),
        None => format!("{label} shipment"),
    })
}

/// Header for the shipment named by the record's first context row.
#[must_use]
pub fn shipment_label(record: &AuditRecord) -> Option<String> {
    record.context_row(0).and_then(shipment_label_from)
}

/// Shipment header followed by `, <value of key>` when the context carries it,
/// e.g. `HHG shipment #ABC12, Domestic linehaul`.
#[must_use]
pub fn shipment_label_with(record: &AuditRecord, key: &str) -> Option<String> {
    let suffix = record
        .context_text(0, key)
        .filter(|value| !value.trim().is_empty());
    match (shipment_label(record), suffix) {
        (Some(label), Some(suffix)) => Some(format!("{label}, {suffix}")),
        (label, suffix) => label.or(suffix),
    }
}

#[cfg(test)]
mod tests {
    use movehist_core::DbAction;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn with_context(context: serde_json::Value) -> AuditRecord {
        AuditRecord::new(DbAction::Update, "updateMTOShipment", "mto_shipments").with_context(context)
    }

    #[test]
    fn abbreviation_is_upper_cased() {
        let record = with_context(json!([{ "shipment_type": "HHG", "shipment_id_abbr": "a1b2c" }]));
        assert_eq!(shipment_label(&record).as_deref(), Some("HHG shipment #A1B2C"));
    }

    #[test]
    fn locator_wins_over_abbreviation() {
        let record = with_context(json!([{
            "shipment_type": "HHG_INTO_NTS",
            "shipment_locator": "RQ38D4-01",
            "shipment_id_abbr": "a1b2c",
        }]));
        assert_eq!(shipment_label(&record).as_deref(), Some("NTS shipment #RQ38D4-01"));
    }

    #[test]
    fn unknown_type_shows_raw_code() {
        let record = with_context(json!([{ "shipment_type": "HOVERCRAFT", "shipment_id_abbr": "x" }]));
        assert_eq!(shipment_label(&record).as_deref(), Some("HOVERCRAFT shipment #X"));
    }

    #[test]
    fn missing_context_has_no_label() {
        let record = AuditRecord::new(DbAction::Update, "updateMTOShipment", "mto_shipments");
        assert_eq!(shipment_label(&record), None);
    }

    #[test]
    fn label_with_suffix() {
        let record = with_context(json!([{
            "shipment_type": "PPM",
            "shipment_id_abbr": "cc3d2",
            "name": "Domestic origin price",
        }]));
        assert_eq!(
            shipment_label_with(&record, "name").as_deref(),
            Some("PPM shipment #CC3D2, Domestic origin price")
        );

        let move_level = with_context(json!([{ "name": "Move management" }]));
        assert_eq!(shipment_label_with(&move_level, "name").as_deref(), Some("Move management"));
    }
}
