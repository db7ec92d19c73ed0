//! `customer_support_remarks` table.

use movehist_core::{AuditRecord, DbAction, Details, EventName, Pattern};

use crate::template::EventTemplate;

const REMARKS: Pattern<&str> = Pattern::Exact("customer_support_remarks");

/// The remark body; deletions only carry it in the old values.
fn remark_content(record: &AuditRecord) -> Details {
    record
        .merged_text("content")
        .filter(|content| !content.trim().is_empty())
        .map_or(Details::Placeholder, Details::text)
}

pub static CREATE_REMARK: EventTemplate = EventTemplate {
    id: "createCustomerSupportRemark.customer_support_remarks",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createCustomerSupportRemark"),
    table_name: REMARKS,
    name: |_| EventName::text("Created customer support remark"),
    details: remark_content,
};

pub static UPDATE_REMARK: EventTemplate = EventTemplate {
    id: "updateCustomerSupportRemark.customer_support_remarks",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateCustomerSupportRemark"),
    table_name: REMARKS,
    name: |_| EventName::text("Edited customer support remark"),
    details: remark_content,
};

pub static DELETE_REMARK: EventTemplate = EventTemplate {
    id: "deleteCustomerSupportRemark.customer_support_remarks",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("deleteCustomerSupportRemark"),
    table_name: REMARKS,
    name: |_| EventName::text("Deleted customer support remark"),
    details: remark_content,
};

pub static TEMPLATES: &[&EventTemplate] = &[&CREATE_REMARK, &UPDATE_REMARK, &DELETE_REMARK];
