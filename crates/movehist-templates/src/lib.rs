//! # movehist-templates
//!
//! Resolves audit records to human-readable history rows.
//!
//! - [`EventTemplate`]: a match pattern (action, event name, table name) plus
//!   an event-name formatter and a details formatter
//! - [`TemplateRegistry`]: an explicitly built, immutable, ordered template list
//!   with a pure [`TemplateRegistry::resolve`] that never fails
//! - [`fields`]: declarative field-spec tables driving the generic labeled
//!   details layout
//! - [`catalog`]: every production template, grouped by table
//! - [`history`]: history-page rows and pagination
//!
//! ```
//! use movehist_core::{AuditRecord, DbAction};
//! use movehist_templates::TemplateRegistry;
//!
//! let registry = TemplateRegistry::standard();
//! let record = AuditRecord::new(DbAction::Update, "somethingUnheardOf", "mystery_table");
//! let display = registry.render(&record);
//! assert_eq!(display.event_name.to_string(), "Undefined event type");
//! ```

pub mod assignment;
pub mod catalog;
pub mod fields;
pub mod history;
pub mod registry;
pub mod shipment;
pub mod template;

mod error;

pub use error::RegistryError;
pub use history::{modified_by, paginate, render_history, render_row};
pub use registry::{Ambiguity, RegistryBuilder, TemplateRegistry};
pub use template::{EventTemplate, TemplateSummary, UNDEFINED_EVENT};
