use movehist_config::HistoryConfig;
use movehist_core::{HistoryPage, HistoryRow};
use movehist_templates::{paginate, render_history};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenderArgs;
use crate::input;
use crate::output;

/// Handle `movehist render`.
pub fn handle(args: &RenderArgs, config: &HistoryConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = bootstrap::build_registry(config, args.strategy.map(Into::into))?;
    let decoded = input::load_records(&args.input, args.validate)?;
    if decoded.rejected > 0 {
        tracing::warn!(
            rejected = decoded.rejected,
            rendered = decoded.records.len(),
            "some audit records were skipped"
        );
    }

    let rows = render_history(&registry, &decoded.records);
    let per_page = args.per_page.unwrap_or(config.output.per_page);
    let page = select_page(rows, args.page, per_page);
    output::output_history(&page, flags.effective_format(config.output.format))
}

/// One requested page, or every row when no page was asked for.
fn select_page(rows: Vec<HistoryRow>, page: Option<u32>, per_page: u32) -> HistoryPage {
    match page {
        Some(page) => paginate(rows, page, per_page),
        None => {
            let all = u32::try_from(rows.len()).unwrap_or(u32::MAX);
            paginate(rows, 1, all)
        }
    }
}
