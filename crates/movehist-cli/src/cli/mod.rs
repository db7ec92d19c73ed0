use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `movehist` binary.
#[derive(Debug, Parser)]
#[command(name = "movehist", version, about = "Move history event rendering")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `output.format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered over the discovered ones
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::global::StrategyArg;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["movehist", "--format", "table", "--verbose", "check"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["movehist", "templates", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Templates(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["movehist", "--format", "xml", "check"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn render_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["movehist", "render"]).expect("cli should parse");
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.input, "-");
        assert_eq!(args.page, None);
        assert!(!args.validate);
    }

    #[test]
    fn render_accepts_paging_and_strategy() {
        let cli = Cli::try_parse_from([
            "movehist",
            "render",
            "history.jsonl",
            "--page",
            "2",
            "--per-page",
            "10",
            "--strategy",
            "first-match",
            "--validate",
        ])
        .expect("cli should parse");
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.input, "history.jsonl");
        assert_eq!(args.page, Some(2));
        assert_eq!(args.per_page, Some(10));
        assert_eq!(args.strategy, Some(StrategyArg::FirstMatch));
        assert!(args.validate);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["movehist", "--config", "/tmp/movehist.toml", "check"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(
            flags.config.as_deref(),
            Some(std::path::Path::new("/tmp/movehist.toml"))
        );
        assert_eq!(flags.format, None);
    }
}
