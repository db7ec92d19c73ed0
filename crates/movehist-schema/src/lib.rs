//! # movehist-schema
//!
//! JSON Schema registry and validation for the move history boundary.
//!
//! This crate provides:
//! - `SchemaRegistry`: schemas for the audit record input and the rendered
//!   output types, generated from `movehist-core` with `schemars`
//! - validation of raw JSON against those schemas with `jsonschema`
//! - schema export for the `movehist schema` command
//!
//! ## Architecture
//!
//! Types are defined in `movehist-core` with `#[derive(JsonSchema)]`. This
//! crate only registers, validates and exports. The CLI validates input rows
//! here before decoding them into `AuditRecord`s.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
