//! Office user assignment changes.
//!
//! Moves record which office user holds each role in an `*_assigned_id`
//! column. Setting the column to a user adds an "assigned" field naming the
//! user from context; setting it to `null` adds an "unassigned" sentence.

use movehist_core::{AuditRecord, LabeledDetails};
use movehist_format::{PLACEHOLDER, format_full_name};

/// Assignment column and the role it names, in display order.
pub const ASSIGNMENT_ROLES: [(&str, &str); 5] = [
    ("sc_assigned_id", "Counselor"),
    ("sc_closeout_assigned_id", "Closeout counselor"),
    ("too_assigned_id", "Task ordering officer"),
    ("too_destination_assigned_id", "Destination task ordering officer"),
    ("tio_payment_request_assigned_id", "Task invoicing officer"),
];

/// Name of the newly assigned office user, from context.
#[must_use]
pub fn assigned_user_name(record: &AuditRecord) -> Option<String> {
    let first = record.context_text(0, "assigned_office_user_first_name");
    let last = record.context_text(0, "assigned_office_user_last_name");
    format_full_name(first.as_deref(), last.as_deref())
}

/// `true` when the record touches any assignment column.
#[must_use]
pub fn has_assignment_change(record: &AuditRecord) -> bool {
    ASSIGNMENT_ROLES
        .iter()
        .any(|(column, _)| record.has_changed(column))
}

pub fn append_assignments(record: &AuditRecord, details: &mut LabeledDetails) {
    for (column, role) in ASSIGNMENT_ROLES {
        if !record.has_changed(column) {
            continue;
        }
        if record.is_explicit_null(column) {
            details.note(format!("{role} unassigned"));
        } else {
            let name = assigned_user_name(record).unwrap_or_else(|| PLACEHOLDER.to_string());
            details.push(format!("{role} assigned"), name);
        }
    }
}
