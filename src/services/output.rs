use crate::domain::models::{BuildSummary, JsonOut};
use serde::Serialize;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", text(&data));
    }
    Ok(())
}

pub fn summary_text(s: &BuildSummary) -> String {
    let mut lines = vec![format!("releases: {}", s.releases_dir)];
    let last = s.profiles.len().saturating_sub(1);
    for (i, r) in s.profiles.iter().enumerate() {
        let branch = if i == last { "└──" } else { "├──" };
        let mut line = format!(
            "{} {:<11} {} files  {}",
            branch,
            r.profile.to_string(),
            r.files.len(),
            r.profile.summary()
        );
        if !r.skipped.is_empty() {
            line.push_str(&format!("  ({} inputs missing)", r.skipped.len()));
        }
        lines.push(line);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{BuildReport, Profile};

    #[test]
    fn summary_marks_missing_inputs() {
        let s = BuildSummary {
            releases_dir: "releases".to_string(),
            cleaned: true,
            profiles: vec![
                BuildReport {
                    profile: Profile::CssOnly,
                    output_dir: "releases/css-only".to_string(),
                    files: vec![],
                    skipped: vec!["styles".to_string()],
                },
                BuildReport {
                    profile: Profile::JsOnly,
                    output_dir: "releases/js-only".to_string(),
                    files: vec![],
                    skipped: vec![],
                },
            ],
        };
        let text = summary_text(&s);
        assert!(text.starts_with("releases: releases"));
        assert!(text.contains("├── css-only"));
        assert!(text.contains("(1 inputs missing)"));
        assert!(text.contains("└── js-only"));
    }
}
