//! Cross-cutting error types for movehist.
//!
//! Template resolution and formatting never fail. Errors only arise at the
//! input boundary, when raw JSON is decoded into an [`AuditRecord`], or when a
//! textual option cannot be parsed. Domain-specific errors (`RegistryError`,
//! `SchemaError`, `ConfigError`) live in their respective crates.
//!
//! [`AuditRecord`]: crate::record::AuditRecord

use thiserror::Error;

/// Errors that can be raised by any movehist crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Raw input could not be decoded into an audit record.
    #[error("Invalid audit record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    /// A textual value failed validation (unknown enum code, bad format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
