//! `ppm_shipments` and the PPM closeout documents: weight tickets, moving
//! expenses, pro-gear weight tickets.

use movehist_core::{AuditRecord, DbAction, Details, EventName, Pattern};
use movehist_format::labels;

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::shipment::shipment_label;
use crate::template::EventTemplate;

const PPM_SHIPMENTS: Pattern<&str> = Pattern::Exact("ppm_shipments");

/// Columns the customer fills in when starting PPM closeout documentation.
pub const DOCUMENT_PROCESS_KEYS: [&str; 4] = [
    "actual_moving_date",
    "actual_pickup_postal_code",
    "actual_destination_postal_code",
    "has_received_advance",
];

pub const PPM_FIELDS: &[FieldSpec] = &[
    field("status", "Status", FieldKind::Enum(labels::ppm_shipment_status)),
    field("expected_departure_date", "Expected departure date", FieldKind::Date),
    field("actual_moving_date", "Departure date", FieldKind::Date),
    field("pickup_postal_code", "Origin ZIP", FieldKind::Text),
    field("secondary_pickup_postal_code", "Second origin ZIP", FieldKind::Text),
    field("actual_pickup_postal_code", "Actual origin ZIP", FieldKind::Text),
    field("destination_postal_code", "Destination ZIP", FieldKind::Text),
    field("secondary_destination_postal_code", "Second destination ZIP", FieldKind::Text),
    field("actual_destination_postal_code", "Actual destination ZIP", FieldKind::Text),
    field("sit_expected", "SIT expected", FieldKind::YesNo),
    field("estimated_weight", "Estimated weight", FieldKind::Weight),
    field("has_pro_gear", "Pro-gear", FieldKind::YesNo),
    field("pro_gear_weight", "Pro-gear weight", FieldKind::Weight),
    field("spouse_pro_gear_weight", "Spouse pro-gear weight", FieldKind::Weight),
    field("estimated_incentive", "Estimated incentive", FieldKind::Cents),
    field("has_requested_advance", "Advance requested", FieldKind::YesNo),
    field("advance_amount_requested", "Advance amount requested", FieldKind::Cents),
    field("has_received_advance", "Advance received", FieldKind::YesNo),
    field("advance_amount_received", "Advance amount received", FieldKind::Cents),
    field("final_incentive", "Final incentive", FieldKind::Cents),
];

const WEIGHT_TICKET_FIELDS: &[FieldSpec] = &[
    field("vehicle_description", "Vehicle description", FieldKind::Text),
    field("empty_weight", "Empty weight", FieldKind::Weight),
    field("full_weight", "Full weight", FieldKind::Weight),
    field("owns_trailer", "Owns trailer", FieldKind::YesNo),
    field("trailer_meets_criteria", "Trailer meets criteria", FieldKind::YesNo),
    field("adjusted_net_weight", "Adjusted net weight", FieldKind::Weight),
    field("net_weight_remarks", "Net weight remarks", FieldKind::Text),
    field("status", "Status", FieldKind::Enum(labels::ppm_document_status)),
    field("reason", "Reason", FieldKind::Text),
];

const MOVING_EXPENSE_FIELDS: &[FieldSpec] = &[
    field("moving_expense_type", "Expense type", FieldKind::Enum(labels::moving_expense_type)),
    field("description", "Description", FieldKind::Text),
    field("amount", "Amount", FieldKind::Cents),
    field("paid_with_gtcc", "Paid with GTCC", FieldKind::YesNo),
    field("sit_start_date", "SIT start date", FieldKind::Date),
    field("sit_end_date", "SIT end date", FieldKind::Date),
    field("status", "Status", FieldKind::Enum(labels::ppm_document_status)),
    field("reason", "Reason", FieldKind::Text),
];

const PRO_GEAR_FIELDS: &[FieldSpec] = &[
    field("belongs_to_self", "Belongs to customer", FieldKind::YesNo),
    field("description", "Description", FieldKind::Text),
    field("has_weight_tickets", "Has weight tickets", FieldKind::YesNo),
    field("weight", "Weight", FieldKind::Weight),
    field("status", "Status", FieldKind::Enum(labels::ppm_document_status)),
    field("reason", "Reason", FieldKind::Text),
];

fn ppm_details(record: &AuditRecord) -> Details {
    labeled_details(record, shipment_label(record), PPM_FIELDS)
}

pub static UPDATE_PPM: EventTemplate = EventTemplate {
    id: "updateMTOShipment.ppm_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMTOShipment"),
    table_name: PPM_SHIPMENTS,
    name: |record| {
        if record.has_all_changed(&DOCUMENT_PROCESS_KEYS) {
            EventName::text("Customer Began PPM Document Process")
        } else {
            EventName::text("Updated shipment")
        }
    },
    details: ppm_details,
};

pub static SUBMIT_DOCUMENTATION: EventTemplate = EventTemplate {
    id: "submitPPMShipmentDocumentation.ppm_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("submitPPMShipmentDocumentation"),
    table_name: PPM_SHIPMENTS,
    name: |_| EventName::text("Submitted PPM documentation"),
    details: ppm_details,
};

pub static FINISH_DOCUMENT_REVIEW: EventTemplate = EventTemplate {
    id: "finishDocumentReview.ppm_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("finishDocumentReview"),
    table_name: PPM_SHIPMENTS,
    name: |_| EventName::text("Completed PPM document review"),
    details: ppm_details,
};

pub static UPDATE_ANY_PPM: EventTemplate = EventTemplate {
    id: "*.ppm_shipments",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Any,
    table_name: PPM_SHIPMENTS,
    name: |_| EventName::text("Updated shipment"),
    details: ppm_details,
};

pub static UPDATE_WEIGHT_TICKET: EventTemplate = EventTemplate {
    id: "updateWeightTicket.weight_tickets",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateWeightTicket"),
    table_name: Pattern::Exact("weight_tickets"),
    name: |_| EventName::text("Updated weight ticket"),
    details: |record| labeled_details(record, shipment_label(record), WEIGHT_TICKET_FIELDS),
};

pub static UPDATE_MOVING_EXPENSE: EventTemplate = EventTemplate {
    id: "updateMovingExpense.moving_expenses",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMovingExpense"),
    table_name: Pattern::Exact("moving_expenses"),
    name: |_| EventName::text("Updated expense"),
    details: |record| labeled_details(record, shipment_label(record), MOVING_EXPENSE_FIELDS),
};

pub static UPDATE_PRO_GEAR: EventTemplate = EventTemplate {
    id: "updateProGearWeightTicket.progear_weight_tickets",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateProGearWeightTicket"),
    table_name: Pattern::Exact("progear_weight_tickets"),
    name: |_| EventName::text("Updated pro-gear"),
    details: |record| labeled_details(record, shipment_label(record), PRO_GEAR_FIELDS),
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &UPDATE_PPM,
    &SUBMIT_DOCUMENTATION,
    &FINISH_DOCUMENT_REVIEW,
    &UPDATE_ANY_PPM,
    &UPDATE_WEIGHT_TICKET,
    &UPDATE_MOVING_EXPENSE,
    &UPDATE_PRO_GEAR,
];
