use anyhow::{Context, bail};
use movehist_config::HistoryConfig;
use movehist_core::MatchStrategy;
use movehist_templates::{Ambiguity, TemplateRegistry};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::output;

#[derive(Debug, Serialize)]
struct CheckReport {
    strategy: MatchStrategy,
    templates: usize,
    ambiguities: Vec<Ambiguity>,
}

/// Handle `movehist check`. Fails when any ambiguous pair is found.
pub fn handle(args: &CheckArgs, config: &HistoryConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let strategy = args.strategy.map_or(config.matching.strategy, Into::into);
    let report = report(strategy)?;
    let found = report.ambiguities.len();
    output::output(&report, flags.effective_format(config.output.format))?;

    if found > 0 {
        bail!("{found} ambiguous template pair(s) under {strategy}");
    }
    Ok(())
}

fn report(strategy: MatchStrategy) -> anyhow::Result<CheckReport> {
    let registry = TemplateRegistry::standard_with(strategy, false)
        .context("failed to build template registry")?;
    Ok(CheckReport {
        strategy,
        templates: registry.len(),
        ambiguities: registry.ambiguities(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(MatchStrategy::MostSpecific)]
    #[case(MatchStrategy::FirstMatch)]
    fn standard_catalogue_is_clean(#[case] strategy: MatchStrategy) {
        let report = report(strategy).expect("registry builds");
        assert!(report.ambiguities.is_empty(), "{:?}", report.ambiguities);
        assert!(report.templates > 50);
    }
}
