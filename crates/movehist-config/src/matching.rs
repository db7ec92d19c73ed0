//! Template matching configuration.

use movehist_core::MatchStrategy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchingConfig {
    /// Which template wins when several match one record.
    #[serde(default)]
    pub strategy: MatchStrategy,

    /// Refuse to build a registry that contains ambiguous template pairs.
    #[serde(default)]
    pub reject_ambiguous: bool,
}
