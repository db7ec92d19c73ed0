//! # movehist-config
//!
//! Layered configuration loading for movehist using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MOVEHIST_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.movehist/config.toml`
//! 4. User-level `~/.config/movehist/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MOVEHIST_MATCHING__STRATEGY` -> `matching.strategy`,
//! `MOVEHIST_OUTPUT__PER_PAGE` -> `output.per_page`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use movehist_config::HistoryConfig;
//!
//! let config = HistoryConfig::load_with_dotenv().expect("config");
//! println!("strategy: {}", config.matching.strategy);
//! ```

mod error;
mod matching;
mod output;

pub use error::ConfigError;
pub use matching::MatchingConfig;
pub use output::OutputConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "MOVEHIST_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".movehist/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl HistoryConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load with an optional explicit config file layered above the
    /// discovered ones. A missing explicit file is an error.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.exists()
        {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }
        let config: Self = Self::figment_with(explicit).extract()?;
        config.output.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain without an explicit file.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Render as a TOML document in the same shape the config files use.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("movehist").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use movehist_core::{MatchStrategy, OutputFormat};

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = HistoryConfig::default();
        assert_eq!(config.matching.strategy, MatchStrategy::MostSpecific);
        assert!(!config.matching.reject_ambiguous);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.per_page, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: HistoryConfig = HistoryConfig::figment().extract()?;
            assert_eq!(config.output.per_page, 20);
            Ok(())
        });
    }

    #[test]
    fn toml_output_reads_back() {
        let mut config = HistoryConfig::default();
        config.matching.strategy = MatchStrategy::FirstMatch;
        config.output.per_page = 5;

        let text = config.to_toml().expect("serializes");
        assert!(text.contains("strategy = \"first_match\""));
        let back: HistoryConfig = Figment::from(Toml::string(&text)).extract().expect("parses");
        assert_eq!(back, config);
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let err = HistoryConfig::load_from(Some(Path::new("/nonexistent/movehist.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile { .. }));
    }
}
