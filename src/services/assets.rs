use crate::domain::constants::{
    FAVICON_ICO, PLACEHOLDER_APPLE_TOUCH_ICON, PLACEHOLDER_OG_IMAGE, SOURCE_FAVICON,
    SOURCE_ICON_512, SVG_ASSETS,
};
use crate::domain::models::{display_path, AssetsReport, SourceLayout, TemplateVars};
use crate::services::emit::Emitter;
use crate::services::template::render;
use anyhow::Context;
use std::path::Path;

/// Fills `img/` of a release: favicon, any source SVGs, and fallbacks for the
/// social images that were not provided.
pub fn create_placeholder_assets(
    emitter: &mut Emitter,
    layout: &SourceLayout,
    vars: &TemplateVars,
) -> anyhow::Result<()> {
    let img = Path::new("img");
    emitter.ensure_dir(img)?;
    emitter.write(img.join("favicon.ico"), FAVICON_ICO)?;

    let source_img = layout.img_dir();
    for asset in SVG_ASSETS {
        let src = source_img.join(asset);
        if src.is_file() {
            emitter.copy_if_exists(&src, img.join(asset))?;
        }
    }

    if !emitter.exists(img.join("og-image.svg")) {
        emitter.write(img.join("og-image.svg"), render(PLACEHOLDER_OG_IMAGE, vars))?;
    }
    if !emitter.exists(img.join("apple-touch-icon.svg")) {
        emitter.write(img.join("apple-touch-icon.svg"), PLACEHOLDER_APPLE_TOUCH_ICON)?;
    }
    Ok(())
}

pub fn copy_manifest(emitter: &mut Emitter, layout: &SourceLayout) -> anyhow::Result<()> {
    emitter.copy_if_exists(&layout.manifest(), "manifest.json")?;
    Ok(())
}

/// Writes the source SVG set into `<root>/img`, overwriting what is there.
pub fn generate_source_assets(
    layout: &SourceLayout,
    vars: &TemplateVars,
) -> anyhow::Result<AssetsReport> {
    let img = layout.img_dir();
    std::fs::create_dir_all(&img).with_context(|| format!("create dir {}", img.display()))?;
    let sources = [
        ("favicon.svg", SOURCE_FAVICON.to_string()),
        ("og-image.svg", render(PLACEHOLDER_OG_IMAGE, vars)),
        ("apple-touch-icon.svg", PLACEHOLDER_APPLE_TOUCH_ICON.to_string()),
        ("icon-512.svg", SOURCE_ICON_512.to_string()),
    ];
    let mut files = Vec::new();
    for (name, body) in sources {
        let dst = img.join(name);
        std::fs::write(&dst, body).with_context(|| format!("write {}", dst.display()))?;
        tracing::info!(asset = name, "created");
        files.push(name.to_string());
    }
    Ok(AssetsReport {
        img_dir: display_path(&img),
        files,
    })
}
