//! `service_members` and `backup_contacts`: the customer profile.

use movehist_core::{AuditRecord, DbAction, Details, EventName, Pattern};
use movehist_format::labels;

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::template::EventTemplate;

const SERVICE_MEMBERS: Pattern<&str> = Pattern::Exact("service_members");
const BACKUP_CONTACTS: Pattern<&str> = Pattern::Exact("backup_contacts");

pub const PROFILE_FIELDS: &[FieldSpec] = &[
    field("first_name", "First name", FieldKind::Text),
    field("middle_name", "Middle name", FieldKind::Text),
    field("last_name", "Last name", FieldKind::Text),
    field("suffix", "Suffix", FieldKind::Text),
    field("affiliation", "Branch", FieldKind::Enum(labels::branch)),
    field("edipi", "DoD ID", FieldKind::Text),
    field("emplid", "EMPLID", FieldKind::Text),
    field("personal_email", "Personal email", FieldKind::Text),
    field("telephone", "Best contact phone", FieldKind::Text),
    field("secondary_telephone", "Alt. phone", FieldKind::Text),
    field("email_is_preferred", "Email preferred", FieldKind::YesNo),
    field("phone_is_preferred", "Phone preferred", FieldKind::YesNo),
];

const BACKUP_CONTACT_FIELDS: &[FieldSpec] = &[
    field("name", "Backup contact name", FieldKind::Text),
    field("email", "Backup contact email", FieldKind::Text),
    field("phone", "Backup contact phone", FieldKind::Text),
];

fn profile_details(record: &AuditRecord) -> Details {
    labeled_details(record, None, PROFILE_FIELDS)
}

fn backup_contact_details(record: &AuditRecord) -> Details {
    labeled_details(record, None, BACKUP_CONTACT_FIELDS)
}

pub static PATCH_SERVICE_MEMBER: EventTemplate = EventTemplate {
    id: "patchServiceMember.service_members",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("patchServiceMember"),
    table_name: SERVICE_MEMBERS,
    name: |_| EventName::text("Updated profile"),
    details: profile_details,
};

pub static UPDATE_CUSTOMER: EventTemplate = EventTemplate {
    id: "updateCustomer.service_members",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateCustomer"),
    table_name: SERVICE_MEMBERS,
    name: |_| EventName::text("Updated profile"),
    details: profile_details,
};

pub static CREATE_BACKUP_CONTACT: EventTemplate = EventTemplate {
    id: "createServiceMemberBackupContact.backup_contacts",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createServiceMemberBackupContact"),
    table_name: BACKUP_CONTACTS,
    name: |_| EventName::text("Added backup contact"),
    details: backup_contact_details,
};

pub static UPDATE_BACKUP_CONTACT: EventTemplate = EventTemplate {
    id: "*.backup_contacts",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Any,
    table_name: BACKUP_CONTACTS,
    name: |_| EventName::text("Updated profile"),
    details: backup_contact_details,
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &PATCH_SERVICE_MEMBER,
    &UPDATE_CUSTOMER,
    &CREATE_BACKUP_CONTACT,
    &UPDATE_BACKUP_CONTACT,
];
