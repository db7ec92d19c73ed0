use figment::Jail;
use movehist_config::HistoryConfig;
use movehist_core::{MatchStrategy, OutputFormat};
use pretty_assertions::assert_eq;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("MOVEHIST_MATCHING__STRATEGY", "first_match");
        jail.set_env("MOVEHIST_MATCHING__REJECT_AMBIGUOUS", "true");
        jail.set_env("MOVEHIST_OUTPUT__FORMAT", "table");
        jail.set_env("MOVEHIST_OUTPUT__PER_PAGE", "75");

        let config = HistoryConfig::load().expect("config loads");
        assert_eq!(config.matching.strategy, MatchStrategy::FirstMatch);
        assert!(config.matching.reject_ambiguous);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.output.per_page, 75);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".movehist")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".movehist/config.toml",
            r#"
[output]
format = "raw"
per_page = 10
"#,
        )?;
        jail.set_env("MOVEHIST_OUTPUT__FORMAT", "json");

        let config = HistoryConfig::load().expect("config loads");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.per_page, 10);
        Ok(())
    });
}

#[test]
fn unrelated_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("OUTPUT__PER_PAGE", "3");
        let config = HistoryConfig::load().expect("config loads");
        assert_eq!(config.output.per_page, 20);
        Ok(())
    });
}
