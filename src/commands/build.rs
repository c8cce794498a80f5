use crate::cli::Cli;
use crate::domain::models::{BuildContext, ProjectConfig, SourceLayout, TemplateVars};
use crate::services::output::{print_one, summary_text};
use crate::services::profiles::{build_all, build_selected};
use crate::services::template::{default_vars, merge_vars};

pub fn handle_build(
    cli: &Cli,
    config: &ProjectConfig,
    layout: SourceLayout,
    vars: TemplateVars,
) -> anyhow::Result<()> {
    let releases_dir = cli.releases_dir(config.releases_dir.as_deref());
    let ctx = BuildContext {
        layout,
        releases_dir,
        vars,
    };

    let selected = cli.selected_profiles();
    let summary = if selected.is_empty() {
        build_all(&ctx)?
    } else {
        build_selected(&ctx, &selected)?
    };

    let skipped: usize = summary.profiles.iter().map(|r| r.skipped.len()).sum();
    tracing::info!(
        profiles = summary.profiles.len(),
        skipped,
        "build finished"
    );
    print_one(cli.json, summary, summary_text)
}

/// Defaults, then the config file, then `--var` flags.
pub fn resolve_vars(cli: &Cli, config: &ProjectConfig) -> TemplateVars {
    let today = chrono::Local::now().date_naive();
    let vars = merge_vars(default_vars(today), config.variables.clone());
    merge_vars(vars, cli.vars.iter().cloned())
}
