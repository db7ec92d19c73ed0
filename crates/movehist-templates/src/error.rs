//! Registry construction errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two or more templates can claim the same record and the strategy
    /// cannot order them.
    #[error("Ambiguous event templates: {}", pairs.join("; "))]
    Ambiguous { pairs: Vec<String> },

    /// The same template id was registered twice.
    #[error("Duplicate event template id: {0}")]
    DuplicateId(String),
}
