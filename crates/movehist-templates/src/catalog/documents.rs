//! Document uploads: `user_uploads` and `proof_of_service_docs`.

use movehist_core::{AuditRecord, DbAction, Details, EventName, LabeledDetails, Pattern};
use movehist_format::labels::{self, label_or_raw};

use crate::shipment::shipment_label;
use crate::template::EventTemplate;

use super::payment_requests::payment_request_number;

const USER_UPLOADS: Pattern<&str> = Pattern::Exact("user_uploads");

/// `HHG shipment #ABC12, Weight ticket`, with the file name as a field.
fn upload_details(record: &AuditRecord) -> Details {
    let kind = record
        .context_str(0, "upload_type")
        .map(|code| label_or_raw(labels::upload_type, code));
    let header = match (shipment_label(record), kind) {
        (Some(label), Some(kind)) => Some(format!("{label}, {kind}")),
        (label, kind) => label.or(kind),
    };
    let mut details = LabeledDetails::with_header(header);
    if let Some(filename) = record.context_text(0, "filename") {
        details.push("Document", filename);
    }
    Details::Labeled(details)
}

pub static CREATE_PPM_UPLOAD: EventTemplate = EventTemplate {
    id: "createPPMUpload.user_uploads",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createPPMUpload"),
    table_name: USER_UPLOADS,
    name: |_| EventName::text("Uploaded document"),
    details: upload_details,
};

pub static DELETE_UPLOAD: EventTemplate = EventTemplate {
    id: "deleteUpload.user_uploads",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("deleteUpload"),
    table_name: USER_UPLOADS,
    name: |_| EventName::text("Deleted document"),
    details: upload_details,
};

pub static CREATE_ANY_UPLOAD: EventTemplate = EventTemplate {
    id: "*.user_uploads",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Any,
    table_name: USER_UPLOADS,
    name: |_| EventName::text("Uploaded document"),
    details: upload_details,
};

pub static CREATE_PROOF_OF_SERVICE: EventTemplate = EventTemplate {
    id: "*.proof_of_service_docs",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Any,
    table_name: Pattern::Exact("proof_of_service_docs"),
    name: |_| EventName::text("Uploaded proof of service document"),
    details: |record| {
        payment_request_number(record).map_or(Details::Placeholder, |number| {
            Details::text(format!("Payment request #{number}"))
        })
    },
};

pub static TEMPLATES: &[&EventTemplate] = &[
    &CREATE_PPM_UPLOAD,
    &DELETE_UPLOAD,
    &CREATE_ANY_UPLOAD,
    &CREATE_PROOF_OF_SERVICE,
];
