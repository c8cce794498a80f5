use crate::domain::constants::DEFAULT_VARS;
use crate::domain::models::TemplateVars;
use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern"));

/// Built-in variables, including the date-derived ones for `today`.
pub fn default_vars(today: NaiveDate) -> TemplateVars {
    let mut vars: TemplateVars = DEFAULT_VARS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    vars.insert(
        "CURRENT_DATE".to_string(),
        today.format("%Y-%m-%d").to_string(),
    );
    vars.insert(
        "FORMATTED_DATE".to_string(),
        today.format("%B %-d, %Y").to_string(),
    );
    vars.insert("CURRENT_YEAR".to_string(), today.year().to_string());
    vars
}

/// Layers `overrides` on top of `base`; later layers win.
pub fn merge_vars<I>(mut base: TemplateVars, overrides: I) -> TemplateVars
where
    I: IntoIterator<Item = (String, String)>,
{
    base.extend(overrides);
    base
}

/// Replaces every known `{{NAME}}` in one pass. Unknown names stay as they are.
pub fn render(content: &str, vars: &TemplateVars) -> String {
    PLACEHOLDER
        .replace_all(content, |caps: &Captures| match vars.get(&caps[1]) {
            Some(v) => v.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Replaces the first `{{name}}` only.
pub fn fill_slot(content: &str, name: &str, value: &str) -> String {
    content.replacen(&format!("{{{{{name}}}}}"), value, 1)
}

pub fn fill_slots<'a, I>(content: String, slots: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    slots
        .into_iter()
        .fold(content, |acc, (name, value)| fill_slot(&acc, name, value))
}

/// Placeholder names still present in `content`, in order of appearance.
pub fn unresolved(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(content) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Reads and renders a fragment. `None` when the file does not exist.
pub fn read_and_render(path: &Path, vars: &TemplateVars) -> anyhow::Result<Option<String>> {
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "template not found, skipping");
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    Ok(Some(render(&raw, vars)))
}
