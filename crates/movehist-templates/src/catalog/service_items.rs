//! `mto_service_items` and the child rows created with them (dimensions,
//! customer contacts).

use movehist_core::{AuditRecord, DbAction, Details, EventName, LabeledDetails, Pattern};
use movehist_format::{format_dimensions, integer_from_value, labels};

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::shipment::shipment_label_with;
use crate::template::EventTemplate;

const SERVICE_ITEMS: Pattern<&str> = Pattern::Exact("mto_service_items");

pub const SERVICE_ITEM_FIELDS: &[FieldSpec] = &[
    field("status", "Status", FieldKind::Enum(labels::service_item_status)),
    field("reason", "Reason", FieldKind::Text),
    field("rejection_reason", "Reason for rejection", FieldKind::Text),
    field("description", "Description", FieldKind::Text),
    field("estimated_weight", "Estimated weight", FieldKind::Weight),
    field("actual_weight", "Actual weight", FieldKind::Weight),
    field("sit_entry_date", "SIT entry date", FieldKind::Date),
    field("sit_departure_date", "SIT departure date", FieldKind::Date),
    field("sit_postal_code", "SIT postal code", FieldKind::Text),
    field("sit_customer_contacted", "Customer contacted", FieldKind::Date),
    field("sit_requested_delivery", "Requested delivery date", FieldKind::Date),
    field("sit_delivery_miles", "SIT delivery miles", FieldKind::Miles),
    field("pricing_estimate", "Pricing estimate", FieldKind::Cents),
];

const CUSTOMER_CONTACT_FIELDS: &[FieldSpec] = &[
    field("first_available_delivery_date", "First available delivery date", FieldKind::Date),
    field("date_of_contact", "Date of contact", FieldKind::Date),
    field("time_military", "Time of contact", FieldKind::Text),
];

/// `HHG shipment #ABC12, Domestic linehaul`, or just the service name for
/// move-level items.
fn service_header(record: &AuditRecord) -> Option<String> {
    shipment_label_with(record, "name")
}

fn service_item_details(record: &AuditRecord) -> Details {
    labeled_details(record, service_header(record), SERVICE_ITEM_FIELDS)
}

fn review_event_name(record: &AuditRecord) -> EventName {
    let label = match record.changed_text("status").as_deref() {
        Some("APPROVED") => "Approved service item",
        Some("REJECTED") => "Rejected service item",
        _ => "Updated service item",
    };
    EventName::text(label)
}

pub static CREATE_SERVICE_ITEM: EventTemplate = EventTemplate {
    id: "createMTOServiceItem.mto_service_items",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createMTOServiceItem"),
    table_name: SERVICE_ITEMS,
    name: |_| EventName::text("Requested service item"),
    details: service_item_details,
};

pub static APPROVE_SHIPMENT_SERVICE_ITEM: EventTemplate = EventTemplate {
    id: "approveShipment.mto_service_items",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("approveShipment"),
    table_name: SERVICE_ITEMS,
    name: |_| EventName::text("Approved service item"),
    details: service_item_details,
};

pub static APPROVE_MOVE_SERVICE_ITEM: EventTemplate = EventTemplate {
    id: "updateMoveTaskOrderStatus.mto_service_items",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("updateMoveTaskOrderStatus"),
    table_name: SERVICE_ITEMS,
    name: |_| EventName::text("Approved service item"),
    details: service_item_details,
};

pub static REVIEW_SERVICE_ITEM: EventTemplate = EventTemplate {
    id: "updateMTOServiceItemStatus.mto_service_items",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMTOServiceItemStatus"),
    table_name: SERVICE_ITEMS,
    name: review_event_name,
    details: service_item_details,
};

pub static UPDATE_SERVICE_ITEM: EventTemplate = EventTemplate {
    id: "updateMTOServiceItem.mto_service_items",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMTOServiceItem"),
    table_name: SERVICE_ITEMS,
    name: |_| EventName::text("Updated service item"),
    details: service_item_details,
};

pub static CREATE_DIMENSIONS: EventTemplate = EventTemplate {
    id: "createMTOServiceItem.mto_service_item_dimensions",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createMTOServiceItem"),
    table_name: Pattern::Exact("mto_service_item_dimensions"),
    name: |_| EventName::text("Requested service item"),
    details: |record| {
        let mut details = LabeledDetails::with_header(service_header(record));
        let label = match record.changed_text("type").as_deref() {
            Some("CRATE") => "Crate size",
            _ => "Item size",
        };
        let dimension = |column: &str| record.changed(column).and_then(integer_from_value);
        details.push(
            label,
            format_dimensions(
                dimension("height_thousandth_inches"),
                dimension("length_thousandth_inches"),
                dimension("width_thousandth_inches"),
            ),
        );
        Details::Labeled(details)
    },
};

pub static CREATE_CUSTOMER_CONTACT: EventTemplate = EventTemplate {
    id: "createMTOServiceItem.mto_service_item_customer_contacts",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createMTOServiceItem"),
    table_name: Pattern::Exact("mto_service_item_customer_contacts"),
    name: |_| EventName::text("Requested service item"),
    details: |record| labeled_details(record, service_header(record), CUSTOMER_CONTACT_FIELDS),
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &CREATE_SERVICE_ITEM,
    &APPROVE_SHIPMENT_SERVICE_ITEM,
    &APPROVE_MOVE_SERVICE_ITEM,
    &REVIEW_SERVICE_ITEM,
    &UPDATE_SERVICE_ITEM,
    &CREATE_DIMENSIONS,
    &CREATE_CUSTOMER_CONTACT,
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn review_label_follows_status() {
        let approved = AuditRecord::new(DbAction::Update, "updateMTOServiceItemStatus", "mto_service_items")
            .with_changed(json!({ "status": "APPROVED" }))
            .with_context(json!([{
                "name": "Domestic origin SIT",
                "shipment_type": "HHG",
                "shipment_id_abbr": "a1b2c",
            }]));
        let display = REVIEW_SERVICE_ITEM.render(&approved);
        assert_eq!(display.event_name, EventName::text("Approved service item"));
        assert_eq!(
            display.details.lines(),
            vec!["HHG shipment #A1B2C, Domestic origin SIT", "Status: Approved"]
        );

        let rejected = AuditRecord::new(DbAction::Update, "updateMTOServiceItemStatus", "mto_service_items")
            .with_changed(json!({ "status": "REJECTED", "rejection_reason": "Not needed" }));
        assert_eq!(
            REVIEW_SERVICE_ITEM.event_name_display(&rejected),
            EventName::text("Rejected service item")
        );
        assert!(REVIEW_SERVICE_ITEM.details(&rejected).contains("Reason for rejection: Not needed"));
    }

    #[test]
    fn crate_dimensions_render_in_inches() {
        let record = AuditRecord::new(DbAction::Insert, "createMTOServiceItem", "mto_service_item_dimensions")
            .with_changed(json!({
                "type": "CRATE",
                "height_thousandth_inches": 12_500,
                "length_thousandth_inches": 1_250,
                "width_thousandth_inches": 1_005,
            }));
        let details = CREATE_DIMENSIONS.details(&record);
        assert_eq!(details.as_labeled().unwrap().value_of("Crate size"), Some("12.5x1.25x1.005 in"));
    }

    #[test]
    fn move_level_item_uses_service_name_as_header() {
        let record = AuditRecord::new(DbAction::Insert, "updateMoveTaskOrderStatus", "mto_service_items")
            .with_changed(json!({ "status": "APPROVED" }))
            .with_context(json!([{ "name": "Move management" }]));
        let details = APPROVE_MOVE_SERVICE_ITEM.details(&record);
        assert_eq!(details.as_labeled().unwrap().header.as_deref(), Some("Move management"));
    }
}
