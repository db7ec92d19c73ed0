//! `mto_shipments` table.

use movehist_core::{AuditRecord, DbAction, DetailField, Details, EventName, Pattern, ShipmentType};
use movehist_format::labels;

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::shipment::shipment_label;
use crate::template::EventTemplate;

const SHIPMENTS: Pattern<&str> = Pattern::Exact("mto_shipments");

pub const SHIPMENT_FIELDS: &[FieldSpec] = &[
    field("status", "Status", FieldKind::Enum(labels::shipment_status)),
    field("requested_pickup_date", "Requested pickup date", FieldKind::Date),
    field("scheduled_pickup_date", "Scheduled pickup date", FieldKind::Date),
    field("actual_pickup_date", "Actual pickup date", FieldKind::Date),
    field("requested_delivery_date", "Requested delivery date", FieldKind::Date),
    field("scheduled_delivery_date", "Scheduled delivery date", FieldKind::Date),
    field("actual_delivery_date", "Actual delivery date", FieldKind::Date),
    field("required_delivery_date", "Required delivery date", FieldKind::Date),
    field("prime_estimated_weight", "Estimated weight", FieldKind::Weight),
    field("prime_actual_weight", "Actual weight", FieldKind::Weight),
    field("nts_recorded_weight", "Previously recorded weight", FieldKind::Weight),
    field("actual_pro_gear_weight", "Actual pro-gear weight", FieldKind::Weight),
    field("actual_spouse_pro_gear_weight", "Actual spouse pro-gear weight", FieldKind::Weight),
    field("billable_weight_cap", "Billable weight", FieldKind::Weight),
    field("billable_weight_justification", "Billable weight remarks", FieldKind::Text),
    field("sit_days_allowance", "SIT days allowance", FieldKind::Days),
    field("distance", "Distance", FieldKind::Miles),
    field("customer_remarks", "Customer remarks", FieldKind::Text),
    field("counselor_remarks", "Counselor remarks", FieldKind::Text),
    field("diversion", "Diversion", FieldKind::YesNo),
    field("diversion_reason", "Reason for diversion", FieldKind::Text),
    field("rejection_reason", "Rejection reason", FieldKind::Text),
    field("uses_external_vendor", "Uses external vendor", FieldKind::YesNo),
    field("service_order_number", "Service order #", FieldKind::Text),
    field("tac_type", "TAC type", FieldKind::Text),
    field("sac_type", "SAC type", FieldKind::Text),
];

const BILLABLE_WEIGHT_FIELDS: &[FieldSpec] = &[
    field("billable_weight_cap", "Billable weight", FieldKind::Weight),
    field("billable_weight_justification", "Billable weight remarks", FieldKind::Text),
];

const TERMINATION_FIELDS: &[FieldSpec] = &[
    field("status", "Status", FieldKind::Enum(labels::shipment_status)),
    field("termination_comments", "Comments", FieldKind::Text),
    field("terminated_at", "Terminated", FieldKind::Date),
];

fn shipment_details(record: &AuditRecord) -> Details {
    labeled_details(record, shipment_label(record), SHIPMENT_FIELDS)
}

fn is_ppm(record: &AuditRecord) -> bool {
    record
        .context_str(0, "shipment_type")
        .and_then(ShipmentType::from_code)
        == Some(ShipmentType::Ppm)
}

/// Status changes share one formatter; the label follows the new status.
fn status_event_name(record: &AuditRecord) -> EventName {
    let label = match record.changed_text("status").as_deref() {
        Some("APPROVED") => "Approved shipment",
        Some("REJECTED") => "Rejected shipment",
        Some("CANCELED") => "Shipment canceled",
        Some("CANCELLATION_REQUESTED") => "Requested shipment cancellation",
        Some("DIVERSION_REQUESTED") => "Requested diversion",
        _ => "Updated shipment",
    };
    EventName::text(label)
}

pub static CREATE_SHIPMENT: EventTemplate = EventTemplate {
    id: "createMTOShipment.mto_shipments",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createMTOShipment"),
    table_name: SHIPMENTS,
    name: |record| {
        if is_ppm(record) {
            EventName::text("PPM Shipment Created")
        } else {
            EventName::text("Created shipment")
        }
    },
    details: |record| {
        let mut details = shipment_details(record);
        // A new PPM starts in DRAFT; the status is left blank rather than
        // reporting the draft state.
        if !is_ppm(record) {
            return details;
        }
        if let Details::Labeled(labeled) = &mut details {
            match labeled.fields.iter_mut().find(|f| f.label == "Status") {
                Some(status) => status.value.clear(),
                None => labeled.fields.insert(
                    0,
                    DetailField {
                        label: "Status".to_string(),
                        value: String::new(),
                    },
                ),
            }
        }
        details
    },
};

pub static UPDATE_SHIPMENT: EventTemplate = EventTemplate {
    id: "updateMTOShipment.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMTOShipment"),
    table_name: SHIPMENTS,
    name: |_| EventName::text("Updated shipment"),
    details: shipment_details,
};

pub static PATCH_SHIPMENT: EventTemplate = EventTemplate {
    id: "patchMTOShipment.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("patchMTOShipment"),
    table_name: SHIPMENTS,
    name: |_| EventName::text("Updated shipment"),
    details: shipment_details,
};

pub static APPROVE_SHIPMENT: EventTemplate = EventTemplate {
    id: "approveShipment.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("approveShipment"),
    table_name: SHIPMENTS,
    name: |_| EventName::text("Approved shipment"),
    details: shipment_details,
};

pub static UPDATE_SHIPMENT_STATUS: EventTemplate = EventTemplate {
    id: "updateMTOShipmentStatus.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMTOShipmentStatus"),
    table_name: SHIPMENTS,
    name: status_event_name,
    details: shipment_details,
};

pub static REQUEST_DIVERSION: EventTemplate = EventTemplate {
    id: "requestShipmentDiversion.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("requestShipmentDiversion"),
    table_name: SHIPMENTS,
    name: |_| EventName::text("Requested diversion"),
    details: shipment_details,
};

pub static APPROVE_DIVERSION: EventTemplate = EventTemplate {
    id: "approveShipmentDiversion.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("approveShipmentDiversion"),
    table_name: SHIPMENTS,
    name: |_| EventName::text("Approved diversion"),
    details: shipment_details,
};

pub static REQUEST_CANCELLATION: EventTemplate = EventTemplate {
    id: "requestShipmentCancellation.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("requestShipmentCancellation"),
    table_name: SHIPMENTS,
    name: |_| EventName::text("Requested shipment cancellation"),
    details: shipment_details,
};

pub static DELETE_SHIPMENT: EventTemplate = EventTemplate {
    id: "deleteShipment.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("deleteShipment"),
    table_name: SHIPMENTS,
    name: |_| EventName::text("Deleted shipment"),
    details: |record| {
        shipment_label(record).map_or(Details::Placeholder, |label| {
            Details::text(format!("{label} deleted"))
        })
    },
};

pub static TERMINATE_SHIPMENT: EventTemplate = EventTemplate {
    id: "terminateShipment.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("terminateShipment"),
    table_name: SHIPMENTS,
    name: |_| EventName::text("Shipment terminated for cause"),
    details: |record| labeled_details(record, shipment_label(record), TERMINATION_FIELDS),
};

pub static UPDATE_BILLABLE_WEIGHT: EventTemplate = EventTemplate {
    id: "updateBillableWeight.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateBillableWeight"),
    table_name: SHIPMENTS,
    name: |_| EventName::text("Updated billable weight"),
    details: |record| labeled_details(record, shipment_label(record), BILLABLE_WEIGHT_FIELDS),
};

pub static UPDATE_ANY_SHIPMENT: EventTemplate = EventTemplate {
    id: "*.mto_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Any,
    table_name: SHIPMENTS,
    name: status_event_name,
    details: shipment_details,
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &CREATE_SHIPMENT,
    &UPDATE_SHIPMENT,
    &PATCH_SHIPMENT,
    &APPROVE_SHIPMENT,
    &UPDATE_SHIPMENT_STATUS,
    &REQUEST_DIVERSION,
    &APPROVE_DIVERSION,
    &REQUEST_CANCELLATION,
    &DELETE_SHIPMENT,
    &TERMINATE_SHIPMENT,
    &UPDATE_BILLABLE_WEIGHT,
    &UPDATE_ANY_SHIPMENT,
];
