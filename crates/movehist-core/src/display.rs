//! Display output produced by event templates.
//!
//! These are structured, renderable values rather than a wire format: a
//! history view (or the `movehist` CLI) decides how to lay them out. Every
//! type can also flatten itself into plain text lines.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder rendered wherever a value is missing.
pub const PLACEHOLDER: &str = "-";

// ---------------------------------------------------------------------------
// EventName
// ---------------------------------------------------------------------------

/// Short label naming what happened.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventName {
    Text { text: String },
    /// Two-line label, e.g. an action followed by a reference number.
    TwoLine { first: String, second: String },
}

impl EventName {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    #[must_use]
    pub fn two_line(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::TwoLine {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { text } => f.write_str(text),
            Self::TwoLine { first, second } => write!(f, "{first}\n{second}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

/// A label/value pair in a labeled details body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

/// Generic details layout: optional bold header, fields, trailing sentences.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LabeledDetails {
    pub header: Option<String>,
    pub fields: Vec<DetailField>,
    pub notes: Vec<String>,
}

impl LabeledDetails {
    #[must_use]
    pub fn with_header(header: Option<String>) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.fields.push(DetailField {
            label: label.into(),
            value: value.into(),
        });
    }

    pub fn note(&mut self, sentence: impl Into<String>) {
        self.notes.push(sentence.into());
    }

    /// Value of the first field with this label.
    #[must_use]
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.fields.is_empty() && self.notes.is_empty()
    }
}

/// Service item names billed against one shipment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ShipmentServices {
    /// "HHG shipment #ABC12" style label.
    pub header: String,
    /// Comma-joined service item names, in context order.
    pub services: String,
}

/// Layout for payment request reviews.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PaymentDetails {
    pub approved_total: Option<String>,
    pub rejected_total: Option<String>,
    /// Comma-joined move-level service names.
    pub move_services: Option<String>,
    pub shipments: Vec<ShipmentServices>,
    /// Individual service item amounts, in context order.
    pub service_amounts: Vec<DetailField>,
}

impl PaymentDetails {
    /// Amount displayed for a service item name.
    #[must_use]
    pub fn amount_of(&self, name: &str) -> Option<&str> {
        self.service_amounts
            .iter()
            .find(|field| field.label == name)
            .map(|field| field.value.as_str())
    }
}

/// Details body of a history row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Details {
    /// Nothing to show beyond the placeholder.
    Placeholder,
    Text { text: String },
    Labeled(LabeledDetails),
    Payment(PaymentDetails),
}

impl Details {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    #[must_use]
    pub const fn as_labeled(&self) -> Option<&LabeledDetails> {
        match self {
            Self::Labeled(labeled) => Some(labeled),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_payment(&self) -> Option<&PaymentDetails> {
        match self {
            Self::Payment(payment) => Some(payment),
            _ => None,
        }
    }

    /// Flatten into plain text lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Placeholder => vec![PLACEHOLDER.to_string()],
            Self::Text { text } => vec![text.clone()],
            Self::Labeled(labeled) => {
                let mut lines = Vec::with_capacity(labeled.fields.len() + labeled.notes.len() + 1);
                if let Some(header) = &labeled.header {
                    lines.push(header.clone());
                }
                lines.extend(
                    labeled
                        .fields
                        .iter()
                        .map(|field| format!("{}: {}", field.label, field.value)),
                );
                lines.extend(labeled.notes.iter().cloned());
                if lines.is_empty() {
                    lines.push(PLACEHOLDER.to_string());
                }
                lines
            }
            Self::Payment(payment) => {
                let mut lines = Vec::new();
                if let Some(total) = &payment.approved_total {
                    lines.push(format!("Approved service items total: {total}"));
                }
                if let Some(total) = &payment.rejected_total {
                    lines.push(format!("Rejected service items total: {total}"));
                }
                if let Some(services) = &payment.move_services {
                    lines.push(format!("Move services: {services}"));
                }
                for shipment in &payment.shipments {
                    lines.push(shipment.header.clone());
                    lines.push(format!("Shipment services: {}", shipment.services));
                }
                lines.extend(
                    payment
                        .service_amounts
                        .iter()
                        .map(|field| format!("{}: {}", field.label, field.value)),
                );
                lines
            }
        }
    }

    /// `true` if any flattened line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

// ---------------------------------------------------------------------------
// Rendered rows
// ---------------------------------------------------------------------------

/// Event name and details resolved for one audit record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventDisplay {
    pub event_name: EventName,
    pub details: Details,
}

/// One row of the move history listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: Option<String>,
    /// `DD MMM YY HH:mm`, or the placeholder when the row has no timestamp.
    pub date: String,
    pub event_name: EventName,
    pub details: Details,
    pub modified_by: String,
}

/// A page of history rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryPage {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
    pub total_count: usize,
    pub rows: Vec<HistoryRow>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn placeholder_renders_dash() {
        assert_eq!(Details::Placeholder.lines(), vec!["-".to_string()]);
        assert!(Details::Placeholder.contains("-"));
    }

    #[test]
    fn labeled_lines_keep_order() {
        let mut labeled = LabeledDetails::with_header(Some("HHG shipment #ABC12".into()));
        labeled.push("Requested pickup date", "18 Oct 2022");
        labeled.push("Counselor remarks", "fragile");
        labeled.note("Task ordering officer unassigned");

        assert_eq!(
            Details::Labeled(labeled).lines(),
            vec![
                "HHG shipment #ABC12".to_string(),
                "Requested pickup date: 18 Oct 2022".to_string(),
                "Counselor remarks: fragile".to_string(),
                "Task ordering officer unassigned".to_string(),
            ]
        );
    }

    #[test]
    fn empty_labeled_details_fall_back_to_placeholder() {
        assert_eq!(Details::Labeled(LabeledDetails::default()).lines(), vec!["-"]);
    }

    #[test]
    fn two_line_event_name_display() {
        let name = EventName::two_line("Submitted payment request", "#1234-5678-1");
        assert_eq!(name.to_string(), "Submitted payment request\n#1234-5678-1");
    }

    #[test]
    fn details_serialize_with_kind_tag() {
        let value = serde_json::to_value(Details::text("Reviewed weights")).unwrap();
        assert_eq!(value["kind"], "text");
        assert_eq!(value["text"], "Reviewed weights");

        let value = serde_json::to_value(Details::Placeholder).unwrap();
        assert_eq!(value["kind"], "placeholder");
    }

    #[test]
    fn payment_lines() {
        let payment = PaymentDetails {
            approved_total: Some("$459.85".into()),
            rejected_total: None,
            move_services: Some("Move management".into()),
            shipments: vec![ShipmentServices {
                header: "HHG shipment #ABC12".into(),
                services: "Domestic linehaul, Fuel surcharge".into(),
            }],
            service_amounts: vec![DetailField {
                label: "Move management".into(),
                value: "$0.00".into(),
            }],
        };
        assert_eq!(payment.amount_of("Move management"), Some("$0.00"));
        let details = Details::Payment(payment);
        assert!(details.contains("Approved service items total: $459.85"));
        assert!(details.contains("Shipment services: Domestic linehaul, Fuel surcharge"));
        assert!(!details.contains("Rejected"));
    }
}
