use crate::domain::models::{display_path, Framework, Profile, ProjectAnalysis};
use anyhow::Context;
use std::path::Path;

const FRAMEWORK_MARKERS: [(&str, Framework); 4] = [
    ("react", Framework::React),
    ("vue", Framework::Vue),
    ("angular", Framework::Angular),
    ("svelte", Framework::Svelte),
];

/// Inspects an existing project to suggest which release fits it.
pub fn analyze_project(dir: &Path) -> anyhow::Result<ProjectAnalysis> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }
    let has_css = dir.join("css").is_dir();
    let has_js = dir.join("js").is_dir();
    let has_html = dir.join("index.html").is_file();
    let package_json = dir.join("package.json");
    let has_package_json = package_json.is_file();
    let has_git = dir.join(".git").exists();

    let framework = if has_package_json {
        let raw = std::fs::read(&package_json)
            .with_context(|| format!("read {}", package_json.display()))?;
        detect_framework(&String::from_utf8_lossy(&raw))
    } else {
        Framework::None
    };

    let (recommendation, suggested_profiles) = recommend(framework, has_css, has_js, has_html);
    tracing::debug!(?framework, has_css, has_js, has_html, "analyzed project");

    Ok(ProjectAnalysis {
        path: display_path(dir),
        has_css,
        has_js,
        has_html,
        has_package_json,
        has_git,
        framework,
        recommendation: recommendation.to_string(),
        suggested_profiles,
    })
}

/// First marker found in `package.json` wins, in react/vue/angular/svelte order.
pub fn detect_framework(package_json: &str) -> Framework {
    FRAMEWORK_MARKERS
        .iter()
        .find(|(marker, _)| package_json.contains(marker))
        .map(|(_, fw)| *fw)
        .unwrap_or(Framework::None)
}

fn recommend(
    framework: Framework,
    has_css: bool,
    has_js: bool,
    has_html: bool,
) -> (&'static str, Vec<Profile>) {
    match framework {
        Framework::React | Framework::Vue | Framework::Angular => (
            "framework project: take the CSS variables and the JS utilities, port the HTML components to the framework",
            vec![Profile::Individual],
        ),
        _ if has_css && has_js => (
            "complete web project: take only the HTML components you need, or the CSS variables for design consistency",
            vec![Profile::HtmlOnly, Profile::Individual],
        ),
        _ if has_html && !has_css => (
            "HTML without styles: take the full CSS system",
            vec![Profile::CssOnly],
        ),
        _ => (
            "new or basic project: take the complete install",
            vec![Profile::Complete],
        ),
    }
}
