//! Declarative field tables for the labeled details layout.
//!
//! Most templates differ only in which columns they show and how each column
//! is formatted. A template lists [`FieldSpec`]s; [`labeled_fields`] walks the
//! list in order and emits one label/value pair per changed column.

use movehist_core::{AuditRecord, Details, LabeledDetails, value_text};
use movehist_format::labels::label_or_raw;
use movehist_format::{
    LabelLookup, PLACEHOLDER, cents_from_value, format_cents, format_date, format_days,
    format_miles, format_weight, format_yes_no, integer_from_value,
};
use serde_json::Value;

use crate::assignment::append_assignments;

/// How a column value is rendered.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    /// ISO date as `DD MMM YYYY`.
    Date,
    /// Pounds as `8,000 lbs`.
    Weight,
    /// Integer cents as `$1,234.99`.
    Cents,
    /// Boolean as `Yes` / `No`.
    YesNo,
    /// Boolean as `true` / `false`.
    RawBool,
    Days,
    Miles,
    /// Backend enum code through a label table; unknown codes show raw.
    Enum(LabelLookup),
}

/// One displayed column: where to read it, what to call it, how to format it.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub column: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Shorthand used by the catalogue tables.
#[must_use]
pub const fn field(column: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        column,
        label,
        kind,
    }
}

/// Render a single value. `null` and unparsable input render the placeholder.
#[must_use]
pub fn format_value(kind: FieldKind, value: &Value) -> String {
    match kind {
        FieldKind::Text => value_text(value).unwrap_or_else(|| PLACEHOLDER.to_string()),
        FieldKind::Date => format_date(value_text(value).as_deref()),
        FieldKind::Weight => format_weight(integer_from_value(value)),
        FieldKind::Cents => format_cents(cents_from_value(value)),
        FieldKind::YesNo => format_yes_no(bool_value(value)),
        FieldKind::RawBool => {
            bool_value(value).map_or_else(|| PLACEHOLDER.to_string(), |flag| flag.to_string())
        }
        FieldKind::Days => format_days(integer_from_value(value)),
        FieldKind::Miles => format_miles(integer_from_value(value)),
        FieldKind::Enum(lookup) => value_text(value)
            .map_or_else(|| PLACEHOLDER.to_string(), |code| label_or_raw(lookup, &code)),
    }
}

fn bool_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// Append one field per changed column, in table order.
///
/// A column is shown when its changed value is non-blank. A column cleared to
/// `null` or `""` is shown as the placeholder only if it previously held a
/// value; columns that stay empty are skipped.
pub fn labeled_fields(record: &AuditRecord, specs: &[FieldSpec], details: &mut LabeledDetails) {
    for spec in specs {
        let Some(value) = record.changed(spec.column) else {
            continue;
        };
        if !is_blank(value) {
            details.push(spec.label, format_value(spec.kind, value));
        } else if record.old(spec.column).is_some_and(|old| !is_blank(old)) {
            details.push(spec.label, PLACEHOLDER);
        }
    }
}

/// The generic labeled layout: header, table fields, then assignment changes.
#[must_use]
pub fn labeled_details(record: &AuditRecord, header: Option<String>, specs: &[FieldSpec]) -> Details {
    let mut details = LabeledDetails::with_header(header);
    labeled_fields(record, specs, &mut details);
    append_assignments(record, &mut details);
    Details::Labeled(details)
}
