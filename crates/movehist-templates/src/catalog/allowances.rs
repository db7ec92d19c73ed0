//! `entitlements` table (allowances).
//!
//! `updateAllowance` shows its boolean columns as raw `true` / `false` while
//! every other allowance event shows `Yes` / `No`.

use movehist_core::{AuditRecord, DbAction, Details, EventName, Pattern};

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::template::EventTemplate;

const ENTITLEMENTS: Pattern<&str> = Pattern::Exact("entitlements");

const fn allowance_fields(flag: FieldKind) -> [FieldSpec; 12] {
    [
        field("authorized_weight", "Authorized weight", FieldKind::Weight),
        field("weight_restriction", "Weight restriction", FieldKind::Weight),
        field("pro_gear_weight", "Pro-gear", FieldKind::Weight),
        field("pro_gear_weight_spouse", "Spouse pro-gear", FieldKind::Weight),
        field("required_medical_equipment_weight", "RME", FieldKind::Weight),
        field("ub_allowance", "UB allowance", FieldKind::Weight),
        field("storage_in_transit", "Storage in transit (SIT)", FieldKind::Days),
        field("dependents_authorized", "Dependents authorized", flag),
        field("organizational_clothing_and_individual_equipment", "OCIE", flag),
        field("gun_safe", "Gun safe", flag),
        field("accompanied_tour", "Accompanied tour", flag),
        field("dependents_under_twelve", "Dependents under age 12", FieldKind::Text),
    ]
}

pub const ALLOWANCE_FIELDS: &[FieldSpec] = &allowance_fields(FieldKind::YesNo);

const RAW_ALLOWANCE_FIELDS: &[FieldSpec] = &allowance_fields(FieldKind::RawBool);

fn allowance_details(record: &AuditRecord) -> Details {
    labeled_details(record, None, ALLOWANCE_FIELDS)
}

pub static UPDATE_ALLOWANCE: EventTemplate = EventTemplate {
    id: "updateAllowance.entitlements",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateAllowance"),
    table_name: ENTITLEMENTS,
    name: |_| EventName::text("Updated allowances"),
    details: |record| labeled_details(record, None, RAW_ALLOWANCE_FIELDS),
};

pub static COUNSELING_UPDATE_ALLOWANCE: EventTemplate = EventTemplate {
    id: "counselingUpdateAllowance.entitlements",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("counselingUpdateAllowance"),
    table_name: ENTITLEMENTS,
    name: |_| EventName::text("Updated allowances"),
    details: allowance_details,
};

pub static UPDATE_ORDER_ALLOWANCE: EventTemplate = EventTemplate {
    id: "updateOrder.entitlements",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateOrder"),
    table_name: ENTITLEMENTS,
    name: |_| EventName::text("Updated orders"),
    details: allowance_details,
};

pub static COUNSELING_UPDATE_ORDER_ALLOWANCE: EventTemplate = EventTemplate {
    id: "counselingUpdateOrder.entitlements",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("counselingUpdateOrder"),
    table_name: ENTITLEMENTS,
    name: |_| EventName::text("Updated orders"),
    details: allowance_details,
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &UPDATE_ALLOWANCE,
    &COUNSELING_UPDATE_ALLOWANCE,
    &UPDATE_ORDER_ALLOWANCE,
    &COUNSELING_UPDATE_ORDER_ALLOWANCE,
];
