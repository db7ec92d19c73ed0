//! The audit record consumed by the template engine.
//!
//! Records arrive from the backend history API already fetched and are never
//! mutated here. Column maps hold JSON scalars; context rows hold the
//! denormalized lookup data (shipment type, locator, service item name) the
//! backend attaches for display.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::DbAction;
use crate::errors::CoreError;

/// Column name to value mapping, used for changed values, old values and
/// context rows.
pub type FieldMap = BTreeMap<String, Value>;

/// One change-tracking row describing a change to a business entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub action: DbAction,
    /// Business operation that produced the row; may be empty.
    #[serde(default)]
    pub event_name: String,
    pub table_name: String,
    #[serde(default)]
    pub changed_values: Option<FieldMap>,
    #[serde(default)]
    pub old_values: Option<FieldMap>,
    /// Ordered auxiliary rows. Order matters when several child entities are
    /// described (e.g. the service items of one payment request).
    #[serde(default)]
    pub context: Option<Vec<FieldMap>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_tstamp_tx: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_user_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_user_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_user_email: Option<String>,
}

/// Render a JSON scalar as display text. `null` renders as `None`.
#[must_use]
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

impl AuditRecord {
    /// Create a record with no changed values, old values or context.
    #[must_use]
    pub fn new(action: DbAction, event_name: &str, table_name: &str) -> Self {
        Self {
            id: None,
            action,
            event_name: event_name.to_string(),
            table_name: table_name.to_string(),
            changed_values: None,
            old_values: None,
            context: None,
            action_tstamp_tx: None,
            session_user_first_name: None,
            session_user_last_name: None,
            session_user_email: None,
        }
    }

    /// Decode a record from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` if the text is not a valid record.
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        serde_json::from_str(text).map_err(CoreError::from)
    }

    /// Decode a record from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` if the value is not a valid record.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(CoreError::from)
    }

    #[must_use]
    pub fn with_changed(mut self, values: Value) -> Self {
        self.changed_values = Some(object_to_map(values));
        self
    }

    #[must_use]
    pub fn with_old(mut self, values: Value) -> Self {
        self.old_values = Some(object_to_map(values));
        self
    }

    #[must_use]
    pub fn with_context(mut self, rows: Value) -> Self {
        let rows = match rows {
            Value::Array(items) => items.into_iter().map(object_to_map).collect(),
            single @ Value::Object(_) => vec![object_to_map(single)],
            _ => Vec::new(),
        };
        self.context = Some(rows);
        self
    }

    // -- changed / old values ---------------------------------------------

    /// Raw changed value. An explicit `null` is returned as `Some(Value::Null)`.
    #[must_use]
    pub fn changed(&self, key: &str) -> Option<&Value> {
        self.changed_values.as_ref()?.get(key)
    }

    #[must_use]
    pub fn old(&self, key: &str) -> Option<&Value> {
        self.old_values.as_ref()?.get(key)
    }

    /// `true` when `key` is present in the changed values, even as `null`.
    #[must_use]
    pub fn has_changed(&self, key: &str) -> bool {
        self.changed(key).is_some()
    }

    /// `true` when every key in `keys` is present in the changed values.
    #[must_use]
    pub fn has_all_changed(&self, keys: &[&str]) -> bool {
        !keys.is_empty() && keys.iter().all(|key| self.has_changed(key))
    }

    /// `true` when `key` was explicitly set to `null`.
    #[must_use]
    pub fn is_explicit_null(&self, key: &str) -> bool {
        matches!(self.changed(key), Some(Value::Null))
    }

    #[must_use]
    pub fn changed_text(&self, key: &str) -> Option<String> {
        self.changed(key).and_then(value_text)
    }

    #[must_use]
    pub fn old_text(&self, key: &str) -> Option<String> {
        self.old(key).and_then(value_text)
    }

    /// Current value of a column: the changed value when the column changed
    /// (a cleared column yields `None`), otherwise the old value.
    #[must_use]
    pub fn merged(&self, key: &str) -> Option<&Value> {
        match self.changed(key) {
            Some(Value::Null) => None,
            Some(value) => Some(value),
            None => self.old(key).filter(|value| !value.is_null()),
        }
    }

    #[must_use]
    pub fn merged_text(&self, key: &str) -> Option<String> {
        self.merged(key).and_then(value_text)
    }

    /// Changed boolean, accepting `"true"`/`"false"` strings as well.
    #[must_use]
    pub fn changed_bool(&self, key: &str) -> Option<bool> {
        match self.changed(key)? {
            Value::Bool(flag) => Some(*flag),
            Value::String(text) => text.parse().ok(),
            _ => None,
        }
    }

    // -- context ----------------------------------------------------------

    #[must_use]
    pub fn context_rows(&self) -> &[FieldMap] {
        self.context.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn context_row(&self, index: usize) -> Option<&FieldMap> {
        self.context_rows().get(index)
    }

    /// String-valued context field. Non-string values yield `None`.
    #[must_use]
    pub fn context_str(&self, index: usize, key: &str) -> Option<&str> {
        self.context_row(index)?.get(key)?.as_str()
    }

    #[must_use]
    pub fn context_text(&self, index: usize, key: &str) -> Option<String> {
        self.context_row(index)?.get(key).and_then(value_text)
    }
}

fn object_to_map(value: Value) -> FieldMap {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => FieldMap::new(),
    }
}
