use clap::{Args, Subcommand};

use crate::cli::global::StrategyArg;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Render audit records into move history rows.
    Render(RenderArgs),
    /// List registered event templates.
    Templates(TemplatesArgs),
    /// Report template pairs the matching strategy cannot order.
    Check(CheckArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
    /// Print the effective configuration as TOML.
    Config,
}

/// Arguments for `movehist render`.
#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// JSON array or JSON Lines file of audit records, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: String,
    /// Page to show (1-based). Without it every row is printed.
    #[arg(long)]
    pub page: Option<u32>,
    /// Rows per page (defaults to `output.per_page`).
    #[arg(long)]
    pub per_page: Option<u32>,
    /// Validate each record against the `audit_record` schema first.
    #[arg(long)]
    pub validate: bool,
    /// Override the configured matching strategy.
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

/// Arguments for `movehist templates`.
#[derive(Clone, Debug, Args)]
pub struct TemplatesArgs {
    /// Only templates for this table (`*` lists wildcard-table templates).
    #[arg(long)]
    pub table: Option<String>,
    /// Only templates for this event name (`*` lists wildcard-event templates).
    #[arg(long)]
    pub event: Option<String>,
}

/// Arguments for `movehist check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Check under this strategy instead of the configured one.
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

/// Arguments for `movehist schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list the registered names.
    pub type_name: Option<String>,
}
