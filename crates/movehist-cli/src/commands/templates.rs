use movehist_config::HistoryConfig;
use movehist_core::Pattern;
use movehist_templates::{EventTemplate, TemplateRegistry, TemplateSummary};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TemplatesArgs;
use crate::output;

/// Handle `movehist templates`.
pub fn handle(
    args: &TemplatesArgs,
    config: &HistoryConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let registry = TemplateRegistry::standard();
    let summaries = select(&registry, args.table.as_deref(), args.event.as_deref());
    output::output(&summaries, flags.effective_format(config.output.format))
}

fn select(
    registry: &TemplateRegistry,
    table: Option<&str>,
    event: Option<&str>,
) -> Vec<TemplateSummary> {
    let table = table.map(Pattern::<String>::parse_filter);
    let event = event.map(Pattern::<String>::parse_filter);
    registry
        .templates()
        .iter()
        .filter(|template| keep(template, table.as_ref(), event.as_ref()))
        .map(|template| template.summary())
        .collect()
}

fn keep(
    template: &EventTemplate,
    table: Option<&Pattern<String>>,
    event: Option<&Pattern<String>>,
) -> bool {
    table.is_none_or(|filter| field_passes(filter, &template.table_name))
        && event.is_none_or(|filter| field_passes(filter, &template.event_name))
}

/// `*` selects wildcard fields; a concrete filter selects every template
/// that would accept that value.
fn field_passes(filter: &Pattern<String>, field: &Pattern<&'static str>) -> bool {
    match filter {
        Pattern::Any => !field.is_concrete(),
        Pattern::Exact(value) => field.matches_str(value),
    }
}
