//! The event template: a match pattern plus two formatters.

use std::fmt;

use movehist_core::{AuditRecord, DbAction, Details, EventDisplay, EventName, Pattern};
use serde::Serialize;

/// Produces the event label for a matched record.
pub type NameFn = fn(&AuditRecord) -> EventName;

/// Produces the details body for a matched record.
pub type DetailsFn = fn(&AuditRecord) -> Details;

/// Describes how to recognize one kind of audit record and how to present it.
///
/// Templates are `static` values built at compile time; the formatters are
/// plain function pointers so a template is `Copy` and carries no state.
#[derive(Clone, Copy)]
pub struct EventTemplate {
    /// Stable identifier, `<eventName>.<tableName>` with `*` for wildcards.
    pub id: &'static str,
    pub action: Pattern<DbAction>,
    pub event_name: Pattern<&'static str>,
    pub table_name: Pattern<&'static str>,
    pub name: NameFn,
    pub details: DetailsFn,
}

/// Fallback template used when nothing in the registry matches.
pub static UNDEFINED_EVENT: EventTemplate = EventTemplate {
    id: "undefined",
    action: Pattern::Any,
    event_name: Pattern::Any,
    table_name: Pattern::Any,
    name: |_| EventName::text("Undefined event type"),
    details: |_| Details::Placeholder,
};

impl EventTemplate {
    /// Every concrete field equals the record's value.
    #[must_use]
    pub fn matches(&self, record: &AuditRecord) -> bool {
        self.action.matches(&record.action)
            && self.event_name.matches_str(&record.event_name)
            && self.table_name.matches_str(&record.table_name)
    }

    /// Number of concrete (non-wildcard) match fields, 0 to 3.
    #[must_use]
    pub fn specificity(&self) -> u8 {
        u8::from(self.action.is_concrete())
            + u8::from(self.event_name.is_concrete())
            + u8::from(self.table_name.is_concrete())
    }

    /// `true` when some record could match both templates.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.action.overlaps(&other.action)
            && self.event_name.overlaps(&other.event_name)
            && self.table_name.overlaps(&other.table_name)
    }

    #[must_use]
    pub fn event_name_display(&self, record: &AuditRecord) -> EventName {
        (self.name)(record)
    }

    #[must_use]
    pub fn details(&self, record: &AuditRecord) -> Details {
        (self.details)(record)
    }

    #[must_use]
    pub fn render(&self, record: &AuditRecord) -> EventDisplay {
        EventDisplay {
            event_name: self.event_name_display(record),
            details: self.details(record),
        }
    }

    #[must_use]
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id.to_string(),
            action: self.action.to_string(),
            event_name: self.event_name.to_string(),
            table_name: self.table_name.to_string(),
            specificity: self.specificity(),
        }
    }
}

impl fmt::Debug for EventTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventTemplate")
            .field("id", &self.id)
            .field("action", &self.action)
            .field("event_name", &self.event_name)
            .field("table_name", &self.table_name)
            .finish_non_exhaustive()
    }
}

/// Listing view of a template, used by `movehist templates`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateSummary {
    pub id: String,
    pub action: String,
    pub event_name: String,
    pub table_name: String,
    pub specificity: u8,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static CREATE_SHIPMENT: EventTemplate = EventTemplate {
        id: "createMTOShipment.mto_shipments",
        action: Pattern::Exact(DbAction::Insert),
        event_name: Pattern::Exact("createMTOShipment"),
        table_name: Pattern::Exact("mto_shipments"),
        name: |_| EventName::text("Created shipment"),
        details: |_| Details::Placeholder,
    };

    static ANY_UPLOAD: EventTemplate = EventTemplate {
        id: "*.user_uploads",
        action: Pattern::Exact(DbAction::Insert),
        event_name: Pattern::Any,
        table_name: Pattern::Exact("user_uploads"),
        name: |_| EventName::text("Uploaded document"),
        details: |_| Details::Placeholder,
    };

    #[test]
    fn matches_requires_every_concrete_field() {
        let record = AuditRecord::new(DbAction::Insert, "createMTOShipment", "mto_shipments");
        assert!(CREATE_SHIPMENT.matches(&record));

        let wrong_action = AuditRecord::new(DbAction::Update, "createMTOShipment", "mto_shipments");
        assert!(!CREATE_SHIPMENT.matches(&wrong_action));

        let wrong_table = AuditRecord::new(DbAction::Insert, "createMTOShipment", "addresses");
        assert!(!CREATE_SHIPMENT.matches(&wrong_table));
    }

    #[test]
    fn wildcard_event_name_matches_empty_name() {
        let record = AuditRecord::new(DbAction::Insert, "", "user_uploads");
        assert!(ANY_UPLOAD.matches(&record));
    }

    #[test]
    fn specificity_counts_concrete_fields() {
        assert_eq!(CREATE_SHIPMENT.specificity(), 3);
        assert_eq!(ANY_UPLOAD.specificity(), 2);
        assert_eq!(UNDEFINED_EVENT.specificity(), 0);
    }

    #[test]
    fn overlap_is_symmetric() {
        assert!(!CREATE_SHIPMENT.overlaps(&ANY_UPLOAD));
        assert!(UNDEFINED_EVENT.overlaps(&ANY_UPLOAD));
        assert!(ANY_UPLOAD.overlaps(&UNDEFINED_EVENT));
    }

    #[test]
    fn undefined_event_renders_placeholder() {
        let record = AuditRecord::new(DbAction::Delete, "whatever", "nothing");
        let display = UNDEFINED_EVENT.render(&record);
        assert_eq!(display.event_name, EventName::text("Undefined event type"));
        assert_eq!(display.details, Details::Placeholder);
    }

    #[test]
    fn summary_uses_star_for_wildcards() {
        let summary = ANY_UPLOAD.summary();
        assert_eq!(summary.event_name, "*");
        assert_eq!(summary.action, "INSERT");
        assert_eq!(summary.table_name, "user_uploads");
        assert_eq!(summary.specificity, 2);
    }
}
