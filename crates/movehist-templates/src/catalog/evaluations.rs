//! `evaluation_reports` table (quality assurance evaluations).

use movehist_core::{AuditRecord, DbAction, Details, EventName, Pattern};
use movehist_format::labels;

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::shipment::shipment_label;
use crate::template::EventTemplate;

pub const EVALUATION_FIELDS: &[FieldSpec] = &[
    field("inspection_type", "Inspection type", FieldKind::Enum(labels::inspection_type)),
    field("inspection_date", "Inspection date", FieldKind::Date),
    field("location", "Location", FieldKind::Enum(labels::evaluation_location)),
    field("location_description", "Location description", FieldKind::Text),
    field("evaluation_length_minutes", "Evaluation length (minutes)", FieldKind::Text),
    field("violations_observed", "Violations observed", FieldKind::YesNo),
    field("remarks", "Remarks", FieldKind::Text),
    field("submitted_at", "Submitted", FieldKind::Date),
];

/// Shipment evaluations name the shipment; move-level ones carry no shipment
/// context and get a fixed header.
fn evaluation_header(record: &AuditRecord) -> Option<String> {
    shipment_label(record).or_else(|| Some("Counseling evaluation".to_string()))
}

fn evaluation_details(record: &AuditRecord) -> Details {
    labeled_details(record, evaluation_header(record), EVALUATION_FIELDS)
}

pub static SUBMIT_EVALUATION_REPORT: EventTemplate = EventTemplate {
    id: "submitEvaluationReport.evaluation_reports",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("submitEvaluationReport"),
    table_name: Pattern::Exact("evaluation_reports"),
    name: |_| EventName::text("Submitted evaluation report"),
    details: evaluation_details,
};

pub static TEMPLATES: &[&EventTemplate] = &[&SUBMIT_EVALUATION_REPORT];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn submitted_report_fields() {
        let record = AuditRecord::new(DbAction::Update, "submitEvaluationReport", "evaluation_reports")
            .with_changed(json!({
                "inspection_type": "PHYSICAL",
                "location": "ORIGIN",
                "violations_observed": false,
            }))
            .with_context(json!([{ "shipment_type": "HHG", "shipment_id_abbr": "a1b2c" }]));
        assert_eq!(
            SUBMIT_EVALUATION_REPORT.details(&record).lines(),
            vec![
                "HHG shipment #A1B2C",
                "Inspection type: Physical",
                "Location: Origin",
                "Violations observed: No",
            ]
        );
    }

    #[test]
    fn counseling_report_gets_fixed_header() {
        let record = AuditRecord::new(DbAction::Update, "submitEvaluationReport", "evaluation_reports")
            .with_changed(json!({ "inspection_type": "DATA_REVIEW" }));
        let details = SUBMIT_EVALUATION_REPORT.details(&record);
        assert_eq!(
            details.as_labeled().unwrap().header.as_deref(),
            Some("Counseling evaluation")
        );
    }
}
