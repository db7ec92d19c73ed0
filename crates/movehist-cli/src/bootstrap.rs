use std::path::Path;

use anyhow::Context;
use movehist_config::HistoryConfig;
use movehist_core::MatchStrategy;
use movehist_templates::TemplateRegistry;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<HistoryConfig> {
    load_dotenv(flags.config.as_deref())?;
    HistoryConfig::load_from(flags.config.as_deref()).context("failed to load movehist configuration")
}

/// Build the standard registry, letting a command-line strategy win over config.
pub fn build_registry(
    config: &HistoryConfig,
    strategy: Option<MatchStrategy>,
) -> anyhow::Result<TemplateRegistry> {
    let strategy = strategy.unwrap_or(config.matching.strategy);
    TemplateRegistry::standard_with(strategy, config.matching.reject_ambiguous)
        .with_context(|| format!("failed to build template registry (strategy={strategy})"))
}

/// Load `.env` next to an explicit config file, else from the working directory.
fn load_dotenv(config_path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(dir) = config_path.and_then(Path::parent) {
        let env_path = dir.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
