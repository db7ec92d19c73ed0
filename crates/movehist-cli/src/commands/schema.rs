use movehist_config::HistoryConfig;
use movehist_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output;

/// Handle `movehist schema`.
pub fn handle(args: &SchemaArgs, config: &HistoryConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    match &args.type_name {
        Some(name) => {
            println!("{}", registry.export(name)?);
            Ok(())
        }
        None => output::output(&registry.list(), flags.effective_format(config.output.format)),
    }
}
