//! Output rendering configuration.

use movehist_core::OutputFormat;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default rows per history page.
const fn default_per_page() -> u32 {
    20
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Rows per page when paginating history output.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl OutputConfig {
    /// Reject values the renderer cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "output.per_page".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            per_page: default_per_page(),
        }
    }
}
