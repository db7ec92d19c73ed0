use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl From<movehist_core::OutputFormat> for OutputFormat {
    fn from(format: movehist_core::OutputFormat) -> Self {
        match format {
            movehist_core::OutputFormat::Json => Self::Json,
            movehist_core::OutputFormat::Table => Self::Table,
            movehist_core::OutputFormat::Raw => Self::Raw,
        }
    }
}

/// Template matching strategy as accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StrategyArg {
    MostSpecific,
    FirstMatch,
}

impl From<StrategyArg> for movehist_core::MatchStrategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::MostSpecific => Self::MostSpecific,
            StrategyArg::FirstMatch => Self::FirstMatch,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// `None` defers to `output.format` from configuration.
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub config: Option<PathBuf>,
}

impl GlobalFlags {
    /// Flag value if given, otherwise the configured format.
    #[must_use]
    pub fn effective_format(&self, configured: movehist_core::OutputFormat) -> OutputFormat {
        self.format.unwrap_or_else(|| configured.into())
    }
}
