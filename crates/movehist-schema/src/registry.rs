//! Schema registry for the move history types.
//!
//! The `SchemaRegistry` builds JSON Schemas from movehist-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use movehist_core::AuditRecord;
use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the input record schema.
pub const AUDIT_RECORD: &str = "audit_record";

/// Store of the JSON Schemas at the move history boundary.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).expect("schemars output is valid JSON"),
        );
    };
}

impl SchemaRegistry {
    /// Build a registry with the input record schema and every rendered
    /// output schema.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on a `schemars`-generated
    /// schema, which does not happen for derived schemas.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Input ---
        register!(schemas, AUDIT_RECORD, movehist_core::AuditRecord);

        // --- Rendered output ---
        register!(schemas, "event_display", movehist_core::EventDisplay);
        register!(schemas, "history_row", movehist_core::HistoryRow);
        register!(schemas, "history_page", movehist_core::HistoryPage);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate a raw input row and decode it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` when the row does not satisfy
    /// the audit record schema, or `SchemaError::Decode` if decoding fails.
    pub fn validate_record(&self, instance: serde_json::Value) -> Result<AuditRecord, SchemaError> {
        self.validate(AUDIT_RECORD, &instance)?;
        Ok(AuditRecord::from_value(instance)?)
    }

    /// Pretty-printed schema document, for export.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown.
    pub fn export(&self, name: &str) -> Result<String, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        serde_json::to_string_pretty(schema).map_err(|e| SchemaError::Generation(format!("{e}")))
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
