//! `sit_extensions` table: storage-in-transit extension requests.

use movehist_core::{AuditRecord, DbAction, Details, EventName, Pattern};
use movehist_format::labels;

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::shipment::shipment_label;
use crate::template::EventTemplate;

const SIT_EXTENSIONS: Pattern<&str> = Pattern::Exact("sit_extensions");

pub const SIT_EXTENSION_FIELDS: &[FieldSpec] = &[
    field("status", "Status", FieldKind::Enum(labels::sit_extension_status)),
    field("request_reason", "Reason", FieldKind::Enum(labels::sit_extension_reason)),
    field("requested_days", "Requested days", FieldKind::Text),
    field("approved_days", "Approved days", FieldKind::Text),
    field("contractor_remarks", "Contractor remarks", FieldKind::Text),
    field("office_remarks", "Office remarks", FieldKind::Text),
    field("decision_date", "Decision date", FieldKind::Date),
];

fn sit_extension_details(record: &AuditRecord) -> Details {
    labeled_details(record, shipment_label(record), SIT_EXTENSION_FIELDS)
}

pub static CREATE_SIT_EXTENSION: EventTemplate = EventTemplate {
    id: "createSITExtension.sit_extensions",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createSITExtension"),
    table_name: SIT_EXTENSIONS,
    name: |_| EventName::text("SIT extension requested"),
    details: sit_extension_details,
};

pub static CREATE_APPROVED_SIT_EXTENSION: EventTemplate = EventTemplate {
    id: "createApprovedSITDurationUpdate.sit_extensions",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createApprovedSITDurationUpdate"),
    table_name: SIT_EXTENSIONS,
    name: |_| EventName::text("SIT extension approved"),
    details: sit_extension_details,
};

pub static APPROVE_SIT_EXTENSION: EventTemplate = EventTemplate {
    id: "approveSITExtension.sit_extensions",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("approveSITExtension"),
    table_name: SIT_EXTENSIONS,
    name: |_| EventName::text("SIT extension approved"),
    details: sit_extension_details,
};

pub static DENY_SIT_EXTENSION: EventTemplate = EventTemplate {
    id: "denySITExtension.sit_extensions",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("denySITExtension"),
    table_name: SIT_EXTENSIONS,
    name: |_| EventName::text("SIT extension denied"),
    details: sit_extension_details,
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &CREATE_SIT_EXTENSION,
    &CREATE_APPROVED_SIT_EXTENSION,
    &APPROVE_SIT_EXTENSION,
    &DENY_SIT_EXTENSION,
];
