use movehist_config::HistoryConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: &Commands,
    config: &HistoryConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Render(args) => commands::render::handle(args, config, flags),
        Commands::Templates(args) => commands::templates::handle(args, config, flags),
        Commands::Check(args) => commands::check::handle(args, config, flags),
        Commands::Schema(args) => commands::schema::handle(args, config, flags),
        Commands::Config => commands::config::handle(config),
    }
}
