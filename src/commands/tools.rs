use crate::cli::Cli;
use crate::domain::models::{SourceLayout, TemplateVars};
use crate::services::analyzer::analyze_project;
use crate::services::assets::generate_source_assets;
use crate::services::output::print_one;

pub fn handle_analyze(cli: &Cli) -> anyhow::Result<bool> {
    let Some(dir) = &cli.analyze else {
        return Ok(false);
    };
    let analysis = analyze_project(dir)?;
    print_one(cli.json, analysis, |a| {
        let mark = |b: bool| if b { "yes" } else { "no" };
        [
            format!("project: {}", a.path),
            format!("css/: {}", mark(a.has_css)),
            format!("js/: {}", mark(a.has_js)),
            format!("index.html: {}", mark(a.has_html)),
            format!("package.json: {}", mark(a.has_package_json)),
            format!("git: {}", mark(a.has_git)),
            format!("framework: {:?}", a.framework).to_lowercase(),
            format!("recommendation: {}", a.recommendation),
            format!(
                "profiles: {}",
                a.suggested_profiles
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        ]
        .join("\n")
    })?;
    Ok(true)
}

pub fn handle_assets(cli: &Cli, layout: &SourceLayout, vars: &TemplateVars) -> anyhow::Result<bool> {
    if !cli.assets {
        return Ok(false);
    }
    let report = generate_source_assets(layout, vars)?;
    print_one(cli.json, report, |r| {
        format!("created {} assets in {}", r.files.len(), r.img_dir)
    })?;
    Ok(true)
}
