//! # movehist-core
//!
//! Core types for the move history template engine.
//!
//! This crate provides the foundational types shared across all movehist crates:
//! - `AuditRecord`, the change-tracking row produced by the backend
//! - `Pattern`, the wildcard-or-exact matcher used by event templates
//! - Database action, shipment type, and output enums
//! - Display output types (event names, details bodies, history rows)
//! - Cross-cutting error types

pub mod display;
pub mod enums;
pub mod errors;
pub mod pattern;
pub mod record;

pub use display::{
    DetailField, Details, EventDisplay, EventName, HistoryPage, HistoryRow, LabeledDetails,
    PaymentDetails, ShipmentServices,
};
pub use enums::{DbAction, MatchStrategy, OutputFormat, ShipmentType};
pub use errors::CoreError;
pub use pattern::Pattern;
pub use record::{AuditRecord, FieldMap, value_text};
