//! Template registry and resolution.
//!
//! The registry is assembled explicitly through [`RegistryBuilder`] and is
//! immutable afterwards. Resolution never fails: records with no matching
//! template (and absent records) resolve to [`UNDEFINED_EVENT`].
//!
//! ```text
//! most_specific   pick the match with the most concrete fields;
//!                 equal specificity keeps the earlier registration
//! first_match     pick the earliest registered match
//! ```

use std::collections::HashSet;

use movehist_core::{AuditRecord, EventDisplay, MatchStrategy};
use serde::Serialize;

use crate::catalog;
use crate::error::RegistryError;
use crate::template::{EventTemplate, TemplateSummary, UNDEFINED_EVENT};

/// Two templates that can claim the same record without the strategy being
/// able to order them meaningfully.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Ambiguity {
    pub first: String,
    pub second: String,
}

impl Ambiguity {
    fn describe(&self) -> String {
        format!("{} <-> {}", self.first, self.second)
    }
}

/// Ordered, immutable collection of event templates.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<&'static EventTemplate>,
    strategy: MatchStrategy,
}

impl TemplateRegistry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The production catalogue under the default strategy.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_parts(catalog::all(), MatchStrategy::default())
    }

    /// The production catalogue under an explicit strategy.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Ambiguous`] when `reject_ambiguous` is set and
    /// the catalogue holds templates the strategy cannot order.
    pub fn standard_with(
        strategy: MatchStrategy,
        reject_ambiguous: bool,
    ) -> Result<Self, RegistryError> {
        Self::builder()
            .register_all(catalog::all())
            .strategy(strategy)
            .reject_ambiguous(reject_ambiguous)
            .build()
    }

    fn from_parts(templates: Vec<&'static EventTemplate>, strategy: MatchStrategy) -> Self {
        Self {
            templates,
            strategy,
        }
    }

    /// Find the template for `record`, falling back to [`UNDEFINED_EVENT`].
    #[must_use]
    pub fn resolve(&self, record: Option<&AuditRecord>) -> &'static EventTemplate {
        let Some(record) = record else {
            return &UNDEFINED_EVENT;
        };

        let mut candidates = self.templates.iter().copied().filter(|t| t.matches(record));
        let found = match self.strategy {
            MatchStrategy::FirstMatch => candidates.next(),
            MatchStrategy::MostSpecific => candidates.reduce(|best, template| {
                if template.specificity() > best.specificity() {
                    template
                } else {
                    best
                }
            }),
        };

        found.unwrap_or_else(|| {
            tracing::debug!(
                action = %record.action,
                event_name = %record.event_name,
                table_name = %record.table_name,
                "no event template matched"
            );
            &UNDEFINED_EVENT
        })
    }

    /// Resolve and render in one step.
    #[must_use]
    pub fn render(&self, record: &AuditRecord) -> EventDisplay {
        self.resolve(Some(record)).render(record)
    }

    /// Pairs of overlapping templates the strategy cannot order.
    ///
    /// Under `most_specific` these are overlapping templates of equal
    /// specificity. Under `first_match` a later template is flagged when an
    /// earlier, no more specific template overlaps it, since the earlier one
    /// claims its records first.
    #[must_use]
    pub fn ambiguities(&self) -> Vec<Ambiguity> {
        find_ambiguities(&self.templates, self.strategy)
    }

    #[must_use]
    pub fn templates(&self) -> &[&'static EventTemplate] {
        &self.templates
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<TemplateSummary> {
        self.templates.iter().map(|t| t.summary()).collect()
    }

    #[must_use]
    pub const fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn find_ambiguities(templates: &[&'static EventTemplate], strategy: MatchStrategy) -> Vec<Ambiguity> {
    let mut found = Vec::new();
    for (index, earlier) in templates.iter().enumerate() {
        for later in &templates[index + 1..] {
            if !earlier.overlaps(later) {
                continue;
            }
            let clash = match strategy {
                MatchStrategy::MostSpecific => earlier.specificity() == later.specificity(),
                MatchStrategy::FirstMatch => earlier.specificity() <= later.specificity(),
            };
            if clash {
                found.push(Ambiguity {
                    first: earlier.id.to_string(),
                    second: later.id.to_string(),
                });
            }
        }
    }
    found
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Assembles a [`TemplateRegistry`]. Registration order is significant.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    templates: Vec<&'static EventTemplate>,
    strategy: MatchStrategy,
    reject_ambiguous: bool,
}

impl RegistryBuilder {
    #[must_use]
    pub fn register(mut self, template: &'static EventTemplate) -> Self {
        self.templates.push(template);
        self
    }

    #[must_use]
    pub fn register_all(
        mut self,
        templates: impl IntoIterator<Item = &'static EventTemplate>,
    ) -> Self {
        self.templates.extend(templates);
        self
    }

    #[must_use]
    pub const fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fail [`build`](Self::build) instead of logging when ambiguities exist.
    #[must_use]
    pub const fn reject_ambiguous(mut self, reject: bool) -> Self {
        self.reject_ambiguous = reject;
        self
    }

    /// Finish the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] when two templates share an id,
    /// and [`RegistryError::Ambiguous`] when ambiguity rejection is enabled and
    /// the templates cannot be ordered by the chosen strategy.
    pub fn build(self) -> Result<TemplateRegistry, RegistryError> {
        let mut seen = HashSet::new();
        for template in &self.templates {
            if !seen.insert(template.id) {
                return Err(RegistryError::DuplicateId(template.id.to_string()));
            }
        }

        let ambiguities = find_ambiguities(&self.templates, self.strategy);
        if !ambiguities.is_empty() {
            if self.reject_ambiguous {
                return Err(RegistryError::Ambiguous {
                    pairs: ambiguities.iter().map(Ambiguity::describe).collect(),
                });
            }
            for ambiguity in &ambiguities {
                tracing::warn!(
                    first = %ambiguity.first,
                    second = %ambiguity.second,
                    strategy = %self.strategy,
                    "ambiguous event templates"
                );
            }
        }

        tracing::debug!(
            templates = self.templates.len(),
            strategy = %self.strategy,
            "template registry built"
        );
        Ok(TemplateRegistry::from_parts(self.templates, self.strategy))
    }
}

#[cfg(test)]
mod tests {
    use movehist_core::{DbAction, Details, EventName, Pattern};
    use pretty_assertions::assert_eq;

    use super::*;

    static SPECIFIC: EventTemplate = EventTemplate {
        id: "updateMTOShipment.mto_shipments",
        action: Pattern::Exact(DbAction::Update),
        event_name: Pattern::Exact("updateMTOShipment"),
        table_name: Pattern::Exact("mto_shipments"),
        name: |_| EventName::text("specific"),
        details: |_| Details::Placeholder,
    };

    static GENERIC: EventTemplate = EventTemplate {
        id: "*.mto_shipments",
        action: Pattern::Exact(DbAction::Update),
        event_name: Pattern::Any,
        table_name: Pattern::Exact("mto_shipments"),
        name: |_| EventName::text("generic"),
        details: |_| Details::Placeholder,
    };

    static GENERIC_TWIN: EventTemplate = EventTemplate {
        id: "updateMTOShipment.*",
        action: Pattern::Exact(DbAction::Update),
        event_name: Pattern::Exact("updateMTOShipment"),
        table_name: Pattern::Any,
        name: |_| EventName::text("twin"),
        details: |_| Details::Placeholder,
    };

    fn update_shipment() -> AuditRecord {
        AuditRecord::new(DbAction::Update, "updateMTOShipment", "mto_shipments")
    }

    fn registry(strategy: MatchStrategy, templates: &[&'static EventTemplate]) -> TemplateRegistry {
        TemplateRegistry::builder()
            .register_all(templates.iter().copied())
            .strategy(strategy)
            .build()
            .unwrap()
    }

    #[test]
    fn absent_record_resolves_to_undefined() {
        let registry = registry(MatchStrategy::MostSpecific, &[&SPECIFIC]);
        assert_eq!(registry.resolve(None).id, UNDEFINED_EVENT.id);
    }

    #[test]
    fn unmatched_record_resolves_to_undefined() {
        let registry = registry(MatchStrategy::MostSpecific, &[&SPECIFIC, &GENERIC]);
        let record = AuditRecord::new(DbAction::Delete, "updateMTOShipment", "mto_shipments");
        let display = registry.render(&record);
        assert_eq!(display.event_name, EventName::text("Undefined event type"));
        assert_eq!(display.details, Details::Placeholder);
    }

    #[test]
    fn most_specific_ignores_registration_order() {
        let registry = registry(MatchStrategy::MostSpecific, &[&GENERIC, &SPECIFIC]);
        assert_eq!(registry.resolve(Some(&update_shipment())).id, SPECIFIC.id);
    }

    #[test]
    fn first_match_honors_registration_order() {
        let registry = registry(MatchStrategy::FirstMatch, &[&GENERIC, &SPECIFIC]);
        assert_eq!(registry.resolve(Some(&update_shipment())).id, GENERIC.id);
    }

    #[test]
    fn most_specific_tie_keeps_earlier_registration() {
        let registry = registry(MatchStrategy::MostSpecific, &[&GENERIC, &GENERIC_TWIN]);
        assert_eq!(registry.resolve(Some(&update_shipment())).id, GENERIC.id);
    }

    #[test]
    fn generic_template_still_handles_other_events() {
        let registry = registry(MatchStrategy::MostSpecific, &[&SPECIFIC, &GENERIC]);
        let record = AuditRecord::new(DbAction::Update, "approveShipment", "mto_shipments");
        assert_eq!(registry.resolve(Some(&record)).id, GENERIC.id);
    }

    #[test]
    fn equal_specificity_overlap_is_ambiguous() {
        let registry = registry(MatchStrategy::MostSpecific, &[&GENERIC, &GENERIC_TWIN, &SPECIFIC]);
        assert_eq!(
            registry.ambiguities(),
            vec![Ambiguity {
                first: GENERIC.id.to_string(),
                second: GENERIC_TWIN.id.to_string(),
            }]
        );
    }

    #[test]
    fn first_match_flags_shadowed_templates() {
        let shadowed = registry(MatchStrategy::FirstMatch, &[&GENERIC, &SPECIFIC]);
        assert_eq!(shadowed.ambiguities().len(), 1);

        let ordered = registry(MatchStrategy::FirstMatch, &[&SPECIFIC, &GENERIC]);
        assert!(ordered.ambiguities().is_empty());
    }

    #[test]
    fn reject_ambiguous_fails_build() {
        let result = TemplateRegistry::builder()
            .register(&GENERIC)
            .register(&GENERIC_TWIN)
            .reject_ambiguous(true)
            .build();
        let err = result.unwrap_err();
        assert!(matches!(err, RegistryError::Ambiguous { .. }));
        assert!(err.to_string().contains("*.mto_shipments <-> updateMTOShipment.*"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = TemplateRegistry::builder()
            .register(&SPECIFIC)
            .register(&SPECIFIC)
            .build();
        assert!(matches!(result, Err(RegistryError::DuplicateId(id)) if id == SPECIFIC.id));
    }

    #[test]
    fn empty_registry_always_falls_back() {
        let registry = TemplateRegistry::builder().build().unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.resolve(Some(&update_shipment())).id, UNDEFINED_EVENT.id);
    }
}
