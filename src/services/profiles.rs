//! Release assembly, one function per profile.

use crate::domain::constants::{
    BASE_STRUCTURE, CSS_FILES, HTML_COMPONENTS, HTML_ONLY_SLOTS, INDIVIDUAL_PREFIX,
    INSTALLER_NAME, JS_FILES, MINIMAL_CSS, MINIMAL_CSS_FILES, MINIMAL_FOOTER, MINIMAL_JS,
    MINIMAL_MAIN, SLOT_ASIDE, SLOT_CSS, SLOT_FOOTER, SLOT_HEADER, SLOT_JS, SLOT_MAIN,
};
use crate::domain::models::{display_path, BuildContext, BuildReport, BuildSummary, Profile};
use crate::services::assets::{copy_manifest, create_placeholder_assets};
use crate::services::emit::{check_releases_dir, empty_dir, Emitter};
use crate::services::installer::installer_script;
use crate::services::readme::readme_for;
use crate::services::template::{fill_slots, read_and_render, render, unresolved};
use anyhow::Context;
use std::path::Path;

/// Empties the releases directory, then builds every profile.
pub fn build_all(ctx: &BuildContext) -> anyhow::Result<BuildSummary> {
    tracing::info!(releases = %ctx.releases_dir.display(), "building all profiles");
    check_releases_dir(&ctx.releases_dir, &ctx.layout)?;
    empty_dir(&ctx.releases_dir)
        .with_context(|| format!("clean {}", ctx.releases_dir.display()))?;
    let profiles = Profile::ALL
        .into_iter()
        .map(|p| build_profile(ctx, p))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(BuildSummary {
        releases_dir: display_path(&ctx.releases_dir),
        cleaned: true,
        profiles,
    })
}

pub fn build_selected(ctx: &BuildContext, profiles: &[Profile]) -> anyhow::Result<BuildSummary> {
    check_releases_dir(&ctx.releases_dir, &ctx.layout)?;
    let profiles = profiles
        .iter()
        .map(|p| build_profile(ctx, *p))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(BuildSummary {
        releases_dir: display_path(&ctx.releases_dir),
        cleaned: false,
        profiles,
    })
}

pub fn build_profile(ctx: &BuildContext, profile: Profile) -> anyhow::Result<BuildReport> {
    let out = ctx.output_dir(profile);
    tracing::info!(%profile, out = %out.display(), "building");
    let mut emitter = Emitter::new(&out)?;
    match profile {
        Profile::Complete => build_complete(ctx, &mut emitter),
        Profile::Minimal => build_minimal(ctx, &mut emitter),
        Profile::HtmlOnly => build_html_only(ctx, &mut emitter),
        Profile::CssOnly => build_css_only(ctx, &mut emitter),
        Profile::JsOnly => build_js_only(ctx, &mut emitter),
        Profile::Individual => build_individual(ctx, &mut emitter),
    }
    .with_context(|| format!("build {} profile", profile))?;
    emitter.write("README.md", readme_for(profile, &ctx.vars))?;

    let report = emitter.finish(profile);
    tracing::info!(
        %profile,
        files = report.files.len(),
        skipped = report.skipped.len(),
        "built"
    );
    Ok(report)
}

fn build_complete(ctx: &BuildContext, e: &mut Emitter) -> anyhow::Result<()> {
    let base = component(ctx, e, BASE_STRUCTURE)?;
    let header = component(ctx, e, "header.html")?;
    let main = component(ctx, e, "main-content.html")?;
    let aside = component(ctx, e, "aside.html")?;
    let footer = component(ctx, e, "footer.html")?;
    let css = css_links(&CSS_FILES);
    let js = script_tags(&JS_FILES);

    let html = fill_slots(
        base,
        [
            (SLOT_HEADER, header.as_str()),
            (SLOT_MAIN, main.as_str()),
            (SLOT_ASIDE, aside.as_str()),
            (SLOT_FOOTER, footer.as_str()),
            (SLOT_CSS, css.as_str()),
            (SLOT_JS, js.as_str()),
        ],
    );
    write_index(e, html)?;

    e.copy_files_in(&ctx.layout.styles_dir(), "css")?;
    e.copy_files_in(&ctx.layout.scripts_dir(), "js")?;
    create_placeholder_assets(e, &ctx.layout, &ctx.vars)?;
    copy_manifest(e, &ctx.layout)?;
    Ok(())
}

fn build_minimal(ctx: &BuildContext, e: &mut Emitter) -> anyhow::Result<()> {
    let base = component(ctx, e, BASE_STRUCTURE)?;
    let header = component(ctx, e, "header.html")?;
    let main = render(MINIMAL_MAIN, &ctx.vars);
    let footer = render(MINIMAL_FOOTER, &ctx.vars);
    let css = css_links(&[MINIMAL_CSS_FILES[0], MINIMAL_CSS_FILES[1], "minimal.css"]);
    let js = script_tags(&["minimal.js"]);

    let html = fill_slots(
        base,
        [
            (SLOT_HEADER, header.as_str()),
            (SLOT_MAIN, main.as_str()),
            (SLOT_ASIDE, ""),
            (SLOT_FOOTER, footer.as_str()),
            (SLOT_CSS, css.as_str()),
            (SLOT_JS, js.as_str()),
        ],
    );
    write_index(e, html)?;

    let styles = ctx.layout.styles_dir();
    for file in MINIMAL_CSS_FILES {
        e.copy_if_exists(&styles.join(file), Path::new("css").join(file))?;
    }
    e.write("css/minimal.css", MINIMAL_CSS)?;
    e.write("js/minimal.js", MINIMAL_JS)?;
    create_placeholder_assets(e, &ctx.layout, &ctx.vars)?;
    Ok(())
}

fn build_html_only(ctx: &BuildContext, e: &mut Emitter) -> anyhow::Result<()> {
    e.copy_dir(&ctx.layout.components_dir(), "components")?;
    let base = component(ctx, e, BASE_STRUCTURE)?;
    write_index(e, fill_slots(base, HTML_ONLY_SLOTS))?;
    Ok(())
}

fn build_css_only(ctx: &BuildContext, e: &mut Emitter) -> anyhow::Result<()> {
    e.copy_files_in(&ctx.layout.styles_dir(), "css")?;
    Ok(())
}

fn build_js_only(ctx: &BuildContext, e: &mut Emitter) -> anyhow::Result<()> {
    e.copy_files_in(&ctx.layout.scripts_dir(), "js")?;
    Ok(())
}

fn build_individual(ctx: &BuildContext, e: &mut Emitter) -> anyhow::Result<()> {
    let styles = ctx.layout.styles_dir();
    for file in CSS_FILES {
        e.copy_if_exists(&styles.join(file), format!("{INDIVIDUAL_PREFIX}{file}"))?;
    }
    let scripts = ctx.layout.scripts_dir();
    for file in JS_FILES {
        e.copy_if_exists(&scripts.join(file), format!("{INDIVIDUAL_PREFIX}{file}"))?;
    }
    for file in HTML_COMPONENTS {
        e.copy_if_exists(&ctx.layout.component(file), file)?;
    }
    e.write(INSTALLER_NAME, installer_script(&ctx.vars))?;
    e.make_executable(INSTALLER_NAME)?;
    Ok(())
}

/// Rendered component fragment; empty (and recorded as skipped) when missing.
fn component(ctx: &BuildContext, e: &mut Emitter, name: &str) -> anyhow::Result<String> {
    let path = ctx.layout.component(name);
    match read_and_render(&path, &ctx.vars)? {
        Some(text) => Ok(text),
        None => {
            e.skip(&path);
            Ok(String::new())
        }
    }
}

fn write_index(e: &mut Emitter, html: String) -> anyhow::Result<()> {
    let left = unresolved(&html);
    if !left.is_empty() {
        tracing::debug!(placeholders = ?left, "index.html keeps unresolved placeholders");
    }
    e.write("index.html", html)
}

fn css_links(files: &[&str]) -> String {
    files
        .iter()
        .map(|f| format!("    <link rel=\"stylesheet\" href=\"css/{f}\">"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn script_tags(files: &[&str]) -> String {
    files
        .iter()
        .map(|f| format!("    <script src=\"js/{f}\"></script>"))
        .collect::<Vec<_>>()
        .join("\n")
}
