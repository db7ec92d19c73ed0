//! `orders` table.

use movehist_core::{AuditRecord, DbAction, Details, EventName, LabeledDetails, Pattern};
use movehist_format::labels;

use crate::assignment::append_assignments;
use crate::fields::{FieldKind, FieldSpec, field, labeled_fields};
use crate::template::EventTemplate;

const ORDERS: Pattern<&str> = Pattern::Exact("orders");

pub const ORDERS_FIELDS: &[FieldSpec] = &[
    field("orders_type", "Orders type", FieldKind::Enum(labels::orders_type)),
    field("orders_type_detail", "Orders type detail", FieldKind::Enum(labels::orders_type_detail)),
    field("issue_date", "Orders date", FieldKind::Date),
    field("report_by_date", "Report by date", FieldKind::Date),
    field("orders_number", "Orders number", FieldKind::Text),
    field("has_dependents", "Dependents included", FieldKind::YesNo),
    field("grade", "Pay grade", FieldKind::Enum(labels::pay_grade)),
    field("department_indicator", "Dept. indicator", FieldKind::Enum(labels::department_indicator)),
    field("tac", "HHG TAC", FieldKind::Text),
    field("sac", "HHG SAC", FieldKind::Text),
    field("nts_tac", "NTS TAC", FieldKind::Text),
    field("nts_sac", "NTS SAC", FieldKind::Text),
    field("amended_orders_acknowledged_at", "Amended orders acknowledged", FieldKind::Date),
];

/// Duty location ids resolve to names carried in context.
const DUTY_LOCATIONS: [(&str, &str, &str); 2] = [
    ("origin_duty_location_id", "origin_duty_location_name", "Current duty location"),
    ("new_duty_location_id", "new_duty_location_name", "New duty location"),
];

fn orders_details(record: &AuditRecord) -> Details {
    let mut details = LabeledDetails::default();
    for (column, context_key, label) in DUTY_LOCATIONS {
        if record.has_changed(column)
            && let Some(name) = record.context_text(0, context_key)
        {
            details.push(label, name);
        }
    }
    labeled_fields(record, ORDERS_FIELDS, &mut details);
    append_assignments(record, &mut details);
    Details::Labeled(details)
}

pub static CREATE_ORDERS: EventTemplate = EventTemplate {
    id: "createOrders.orders",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createOrders"),
    table_name: ORDERS,
    name: |_| EventName::text("Submitted orders"),
    details: orders_details,
};

pub static UPDATE_ORDERS: EventTemplate = EventTemplate {
    id: "updateOrder.orders",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateOrder"),
    table_name: ORDERS,
    name: |_| EventName::text("Updated orders"),
    details: orders_details,
};

pub static COUNSELING_UPDATE_ORDERS: EventTemplate = EventTemplate {
    id: "counselingUpdateOrder.orders",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("counselingUpdateOrder"),
    table_name: ORDERS,
    name: |_| EventName::text("Updated orders"),
    details: orders_details,
};

pub static UPLOAD_AMENDED_ORDERS: EventTemplate = EventTemplate {
    id: "uploadAmendedOrders.orders",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("uploadAmendedOrders"),
    table_name: ORDERS,
    name: |_| EventName::text("Updated orders"),
    details: |_| Details::text("New amended orders were uploaded"),
};

pub static ACKNOWLEDGE_AMENDED_ORDERS: EventTemplate = EventTemplate {
    id: "acknowledgeAmendedOrders.orders",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("acknowledgeAmendedOrders"),
    table_name: ORDERS,
    name: |_| EventName::text("Acknowledged amended orders"),
    details: orders_details,
};

pub static UPDATE_ANY_ORDERS: EventTemplate = EventTemplate {
    id: "*.orders",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Any,
    table_name: ORDERS,
    name: |_| EventName::text("Updated orders"),
    details: orders_details,
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &CREATE_ORDERS,
    &UPDATE_ORDERS,
    &COUNSELING_UPDATE_ORDERS,
    &UPLOAD_AMENDED_ORDERS,
    &ACKNOWLEDGE_AMENDED_ORDERS,
    &UPDATE_ANY_ORDERS,
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn orders_codes_map_to_labels() {
        let record = AuditRecord::new(DbAction::Update, "updateOrder", "orders")
            .with_changed(json!({
                "orders_type": "PERMANENT_CHANGE_OF_STATION",
                "grade": "E_5",
                "issue_date": "2022-10-18",
                "has_dependents": true,
            }));
        let details = UPDATE_ORDERS.details(&record);
        let labeled = details.as_labeled().unwrap();
        assert_eq!(labeled.value_of("Orders type"), Some("Permanent Change Of Station (PCS)"));
        assert_eq!(labeled.value_of("Pay grade"), Some("E-5"));
        assert_eq!(labeled.value_of("Orders date"), Some("18 Oct 2022"));
        assert_eq!(labeled.value_of("Dependents included"), Some("Yes"));
    }

    #[test]
    fn duty_location_names_come_from_context() {
        let record = AuditRecord::new(DbAction::Update, "counselingUpdateOrder", "orders")
            .with_changed(json!({ "new_duty_location_id": "c56a" }))
            .with_context(json!([{ "new_duty_location_name": "Fort Gordon" }]));
        assert_eq!(
            COUNSELING_UPDATE_ORDERS.details(&record).lines(),
            vec!["New duty location: Fort Gordon"]
        );
    }

    #[test]
    fn amended_orders_upload_is_a_sentence() {
        let record = AuditRecord::new(DbAction::Update, "uploadAmendedOrders", "orders")
            .with_changed(json!({ "uploaded_amended_orders_id": "2b7f" }));
        assert_eq!(
            UPLOAD_AMENDED_ORDERS.details(&record),
            Details::text("New amended orders were uploaded")
        );
    }
}
