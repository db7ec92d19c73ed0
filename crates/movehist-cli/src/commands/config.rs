use movehist_config::HistoryConfig;

/// Handle `movehist config`.
pub fn handle(config: &HistoryConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
