//! `mto_agents` table: releasing and receiving agents on a shipment.

use movehist_core::{AuditRecord, DbAction, Details, EventName, Pattern};
use movehist_format::labels::{self, label_or_raw};
use movehist_format::format_full_name;

use crate::fields::{FieldKind, FieldSpec, field, labeled_details};
use crate::shipment::shipment_label;
use crate::template::EventTemplate;

const AGENTS: Pattern<&str> = Pattern::Exact("mto_agents");

const AGENT_FIELDS: &[FieldSpec] = &[
    field("agent_type", "Agent type", FieldKind::Enum(labels::agent_type)),
    field("first_name", "First name", FieldKind::Text),
    field("last_name", "Last name", FieldKind::Text),
    field("email", "Email", FieldKind::Text),
    field("phone", "Phone", FieldKind::Text),
];

fn agent_details(record: &AuditRecord) -> Details {
    labeled_details(record, shipment_label(record), AGENT_FIELDS)
}

pub static CREATE_AGENT: EventTemplate = EventTemplate {
    id: "createMTOShipment.mto_agents",
    action: Pattern::Exact(DbAction::Insert),
    event_name: Pattern::Exact("createMTOShipment"),
    table_name: AGENTS,
    name: |_| EventName::text("Added agent"),
    details: agent_details,
};

pub static UPDATE_AGENT: EventTemplate = EventTemplate {
    id: "updateMTOShipment.mto_agents",
    action: Pattern::Exact(DbAction::Update),
    event_name: Pattern::Exact("updateMTOShipment"),
    table_name: AGENTS,
    name: |_| EventName::text("Updated agent"),
    details: agent_details,
};

pub static REMOVE_AGENT: EventTemplate = EventTemplate {
    id: "*.mto_agents",
    action: Pattern::Exact(DbAction::Delete),
    event_name: Pattern::Any,
    table_name: AGENTS,
    name: |_| EventName::text("Removed agent"),
    details: |record| {
        // Deleted rows only carry the agent in their old values.
        let role = record
            .old_text("agent_type")
            .map_or_else(|| "Agent".to_string(), |code| label_or_raw(labels::agent_type, &code));
        let first = record.old_text("first_name");
        let last = record.old_text("last_name");
        match format_full_name(first.as_deref(), last.as_deref()) {
            Some(name) => Details::text(format!("{role} removed: {name}")),
            None => Details::text(format!("{role} removed")),
        }
    },
};

pub static TEMPLATES: &[&EventTemplate] = &[&CREATE_AGENT, &UPDATE_AGENT, &REMOVE_AGENT];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn created_agent_fields() {
        let record = AuditRecord::new(DbAction::Insert, "createMTOShipment", "mto_agents")
            .with_changed(json!({
                "agent_type": "RELEASING_AGENT",
                "first_name": "Grace",
                "email": "grace@example.com",
            }))
            .with_context(json!([{ "shipment_type": "HHG", "shipment_id_abbr": "a1b2c" }]));
        assert_eq!(
            CREATE_AGENT.details(&record).lines(),
            vec![
                "HHG shipment #A1B2C",
                "Agent type: Releasing agent",
                "First name: Grace",
                "Email: grace@example.com",
            ]
        );
    }

    #[test]
    fn removed_agent_reads_old_values() {
        let record = AuditRecord::new(DbAction::Delete, "", "mto_agents").with_old(json!({
            "agent_type": "RECEIVING_AGENT",
            "first_name": "Ada",
            "last_name": "Lovelace",
        }));
        assert_eq!(
            REMOVE_AGENT.details(&record),
            Details::text("Receiving agent removed: Ada Lovelace")
        );
    }
}
