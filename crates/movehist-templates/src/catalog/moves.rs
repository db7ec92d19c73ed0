//! `moves` table: submission, approval, flags, assignments, cancellation.

use movehist_core::{AuditRecord, DbAction, Details, EventName, LabeledDetails, Pattern};
use movehist_format::{PLACEHOLDER, labels};

use crate::assignment::append_assignments;
use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::template::EventTemplate;

const MOVES: Pattern<&str> = Pattern::Exact("moves");

pub const MOVE_FIELDS: &[FieldSpec] = &[
    field("status", "Status", FieldKind::Enum(labels::move_status)),
    field("locator", "Move code", FieldKind::Text),
    field("submitted_at", "Submitted", FieldKind::Date),
    field("approved_at", "Approved", FieldKind::Date),
    field("service_counseling_completed_at", "Counseling completed", FieldKind::Date),
    field("financial_review_flag", "Flagged for financial review", FieldKind::YesNo),
    field("financial_review_remarks", "Financial review remarks", FieldKind::Text),
    field("excess_weight_qualified_at", "Excess weight qualified", FieldKind::Date),
    field("excess_weight_acknowledged_at", "Excess weight acknowledged", FieldKind::Date),
    field("billable_weights_reviewed_at", "Billable weights reviewed", FieldKind::Date),
    field("cancel_reason", "Reason for cancellation", FieldKind::Text),
];

fn move_details(record: &AuditRecord) -> Details {
    labeled_details(record, None, MOVE_FIELDS)
}

pub static SUBMIT_FOR_APPROVAL: EventTemplate = EventTemplate {
    id: "submitMoveForApproval.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("submitMoveForApproval"),
    table_name: MOVES,
    name: |_| EventName::text("Submitted move"),
    details: |_| Details::text("Received customer signature"),
};

pub static SUBMIT_FOR_SERVICE_COUNSELING: EventTemplate = EventTemplate {
    id: "submitMoveForServiceCounseling.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("submitMoveForServiceCounseling"),
    table_name: MOVES,
    name: |_| EventName::text("Submitted move"),
    details: |_| Details::text("Received customer signature"),
};

pub static APPROVE_MOVE: EventTemplate = EventTemplate {
    id: "updateMoveTaskOrderStatus.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMoveTaskOrderStatus"),
    table_name: MOVES,
    name: |_| EventName::text("Approved move"),
    details: move_details,
};

pub static FINANCIAL_REVIEW_FLAG: EventTemplate = EventTemplate {
    id: "setFinancialReviewFlag.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("setFinancialReviewFlag"),
    table_name: MOVES,
    name: |record| {
        if record.changed_bool("financial_review_flag") == Some(true) {
            EventName::text("Flagged move")
        } else {
            EventName::text("Unflagged move")
        }
    },
    details: |record| {
        let mut details = LabeledDetails::default();
        if record.changed_bool("financial_review_flag") == Some(true) {
            details.note("Move flagged for financial review");
            if let Some(remarks) = record.changed_text("financial_review_remarks") {
                details.push("Financial review remarks", remarks);
            }
        } else {
            details.note("Move unflagged for financial review");
        }
        Details::Labeled(details)
    },
};

pub static ACKNOWLEDGE_EXCESS_WEIGHT: EventTemplate = EventTemplate {
    id: "acknowledgeExcessWeightRisk.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("acknowledgeExcessWeightRisk"),
    table_name: MOVES,
    name: |_| EventName::text("Updated move"),
    details: |_| Details::text("Dismissed excess weight alert"),
};

pub static REVIEWED_BILLABLE_WEIGHTS: EventTemplate = EventTemplate {
    id: "updateMTOReviewedBillableWeightsAt.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMTOReviewedBillableWeightsAt"),
    table_name: MOVES,
    name: |_| EventName::text("Updated move"),
    details: |_| Details::text("Reviewed weights"),
};

fn assignment_details(record: &AuditRecord) -> Details {
    let mut details = LabeledDetails::default();
    append_assignments(record, &mut details);
    Details::Labeled(details)
}

pub static ASSIGN_OFFICE_USER: EventTemplate = EventTemplate {
    id: "updateAssignedOfficeUser.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateAssignedOfficeUser"),
    table_name: MOVES,
    name: |_| EventName::text("Updated move"),
    details: assignment_details,
};

pub static UNASSIGN_OFFICE_USER: EventTemplate = EventTemplate {
    id: "deleteAssignedOfficeUser.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("deleteAssignedOfficeUser"),
    table_name: MOVES,
    name: |_| EventName::text("Updated move"),
    details: assignment_details,
};

pub static CANCEL_MOVE: EventTemplate = EventTemplate {
    id: "cancelMove.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("cancelMove"),
    table_name: MOVES,
    name: |_| EventName::text("Canceled move"),
    details: move_details,
};

pub static UPDATE_CLOSEOUT_OFFICE: EventTemplate = EventTemplate {
    id: "updateCloseoutOffice.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateCloseoutOffice"),
    table_name: MOVES,
    name: |_| EventName::text("Updated closeout office"),
    details: |record| {
        let mut details = LabeledDetails::default();
        let office = record
            .context_text(0, "closeout_office_name")
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        details.push("Closeout office", office);
        Details::Labeled(details)
    },
};

pub static UPDATE_MOVE: EventTemplate = EventTemplate {
    id: "*.moves",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Any,
    table_name: MOVES,
    name: |_| EventName::text("Updated move"),
    details: move_details,
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &SUBMIT_FOR_APPROVAL,
    &SUBMIT_FOR_SERVICE_COUNSELING,
    &APPROVE_MOVE,
    &FINANCIAL_REVIEW_FLAG,
    &ACKNOWLEDGE_EXCESS_WEIGHT,
    &REVIEWED_BILLABLE_WEIGHTS,
    &ASSIGN_OFFICE_USER,
    &UNASSIGN_OFFICE_USER,
    &CANCEL_MOVE,
    &UPDATE_CLOSEOUT_OFFICE,
    &UPDATE_MOVE,
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn submission_shows_signature_sentence() {
        let record = AuditRecord::new(DbAction::Update, "submitMoveForApproval", "moves");
        let display = SUBMIT_FOR_APPROVAL.render(&record);
        assert_eq!(display.event_name, EventName::text("Submitted move"));
        assert_eq!(display.details, Details::text("Received customer signature"));
    }

    #[test]
    fn financial_review_flag_branches_on_value() {
        let flagged = AuditRecord::new(DbAction::Update, "setFinancialReviewFlag", "moves")
            .with_changed(json!({
                "financial_review_flag": true,
                "financial_review_remarks": "Destination address is unusual",
            }));
        let display = FINANCIAL_REVIEW_FLAG.render(&flagged);
        assert_eq!(display.event_name, EventName::text("Flagged move"));
        assert!(display.details.contains("Move flagged for financial review"));
        assert!(display.details.contains("Financial review remarks: Destination address is unusual"));

        let unflagged = AuditRecord::new(DbAction::Update, "setFinancialReviewFlag", "moves")
            .with_changed(json!({ "financial_review_flag": false }));
        assert_eq!(
            FINANCIAL_REVIEW_FLAG.event_name_display(&unflagged),
            EventName::text("Unflagged move")
        );
    }

    #[test]
    fn status_update_maps_move_status() {
        let record = AuditRecord::new(DbAction::Update, "updateMoveTaskOrderStatus", "moves")
            .with_changed(json!({ "status": "APPROVED", "approved_at": "2022-10-18T14:05:00Z" }));
        let details = APPROVE_MOVE.details(&record);
        let labeled = details.as_labeled().unwrap();
        assert_eq!(labeled.value_of("Status"), Some("Move approved"));
        assert_eq!(labeled.value_of("Approved"), Some("18 Oct 2022"));
    }

    #[test]
    fn unassigning_officer_adds_note() {
        let record = AuditRecord::new(DbAction::Update, "deleteAssignedOfficeUser", "moves")
            .with_changed(json!({ "too_assigned_id": null }));
        let details = UNASSIGN_OFFICE_USER.details(&record);
        assert!(details.contains("Task ordering officer unassigned"));
    }

    #[test]
    fn closeout_office_comes_from_context() {
        let record = AuditRecord::new(DbAction::Update, "updateCloseoutOffice", "moves")
            .with_changed(json!({ "closeout_office_id": "6e1c" }))
            .with_context(json!([{ "closeout_office_name": "Los Angeles AFB" }]));
        let details = UPDATE_CLOSEOUT_OFFICE.details(&record);
        assert_eq!(details.as_labeled().unwrap().value_of("Closeout office"), Some("Los Angeles AFB"));
    }

    #[test]
    fn reviewed_weights_is_a_static_sentence() {
        let record = AuditRecord::new(DbAction::Update, "updateMTOReviewedBillableWeightsAt", "moves")
            .with_changed(json!({ "billable_weights_reviewed_at": "2022-10-18" }));
        assert_eq!(REVIEWED_BILLABLE_WEIGHTS.details(&record).to_string(), "Reviewed weights");
    }
}
