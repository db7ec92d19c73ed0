//! `reweighs` table.

use movehist_core::{DbAction, EventName, Pattern};
use movehist_format::labels;

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::shipment::shipment_label;
use crate::template::EventTemplate;

const REWEIGHS: Pattern<&str> = Pattern::Exact("reweighs");

const REWEIGH_FIELDS: &[FieldSpec] = &[
    field("requested_by", "Requested by", FieldKind::Enum(labels::reweigh_requester)),
    field("requested_at", "Requested", FieldKind::Date),
    field("weight", "Reweigh weight", FieldKind::Weight),
    field("verification_reason", "Reason reweigh was not performed", FieldKind::Text),
    field("verification_provided_at", "Verification provided", FieldKind::Date),
];

pub static REQUEST_REWEIGH: EventTemplate = EventTemplate {
    id: "requestShipmentReweigh.reweighs",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("requestShipmentReweigh"),
    table_name: REWEIGHS,
    name: |_| EventName::text("Requested reweigh"),
    details: |record| labeled_details(record, shipment_label(record), REWEIGH_FIELDS),
};

pub static UPDATE_REWEIGH: EventTemplate = EventTemplate {
    id: "updateReweigh.reweighs",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateReweigh"),
    table_name: REWEIGHS,
    name: |_| EventName::text("Updated reweigh"),
    details: |record| labeled_details(record, shipment_label(record), REWEIGH_FIELDS),
};

pub static TEMPLATES: &[&EventTemplate] = &[&REQUEST_REWEIGH, &UPDATE_REWEIGH];

#[cfg(test)]
mod tests {
    use movehist_core::AuditRecord;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn reweigh_weight_and_requester() {
        let record = AuditRecord::new(DbAction::Insert, "requestShipmentReweigh", "reweighs")
            .with_changed(json!({ "requested_by": "TOO", "requested_at": "2022-10-18T09:00:00Z" }))
            .with_context(json!([{ "shipment_type": "HHG", "shipment_id_abbr": "a1b2c" }]));
        assert_eq!(
            REQUEST_REWEIGH.details(&record).lines(),
            vec![
                "HHG shipment #A1B2C",
                "Requested by: Task ordering officer",
                "Requested: 18 Oct 2022",
            ]
        );

        let update = AuditRecord::new(DbAction::Update, "updateReweigh", "reweighs")
            .with_changed(json!({ "weight": 4350 }));
        assert_eq!(UPDATE_REWEIGH.details(&update).lines(), vec!["Reweigh weight: 4,350 lbs"]);
    }
}
