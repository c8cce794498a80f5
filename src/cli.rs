use crate::domain::models::{BuildError, Profile};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "boilerkit.toml";
pub const DEFAULT_RELEASES_DIR: &str = "releases";

const PROFILE_ARGS: [&str; 6] = [
    "complete",
    "minimal",
    "html_only",
    "css_only",
    "js_only",
    "individual",
];

#[derive(Parser, Debug)]
#[command(
    name = "boilerkit",
    version,
    about = "Build release bundles of the modular HTML5 boilerplate",
    after_help = "Without a profile flag every profile is built into a freshly emptied releases directory."
)]
pub struct Cli {
    #[arg(long, help = "Build the complete version (HTML + CSS + JS + assets)")]
    pub complete: bool,
    #[arg(long, help = "Build the minimal self-contained version")]
    pub minimal: bool,
    #[arg(long = "html-only", help = "Build the HTML components only")]
    pub html_only: bool,
    #[arg(long = "css-only", help = "Build the stylesheets only")]
    pub css_only: bool,
    #[arg(long = "js-only", help = "Build the scripts only")]
    pub js_only: bool,
    #[arg(long, help = "Build prefixed individual files plus the installer script")]
    pub individual: bool,

    #[arg(long, default_value = ".", help = "Boilerplate source root")]
    pub root: PathBuf,
    #[arg(long, help = "Releases directory (default: <root>/releases)")]
    pub out: Option<PathBuf>,
    #[arg(long, help = "Config file (default: <root>/boilerkit.toml)")]
    pub config: Option<PathBuf>,
    #[arg(
        long = "var",
        value_name = "KEY=VALUE",
        value_parser = parse_var,
        help = "Override a template variable (repeatable)"
    )]
    pub vars: Vec<(String, String)>,

    #[arg(
        long,
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = ".",
        conflicts_with_all = PROFILE_ARGS,
        conflicts_with = "assets",
        help = "Analyze an existing project and recommend an install profile"
    )]
    pub analyze: Option<PathBuf>,
    #[arg(
        long,
        conflicts_with_all = PROFILE_ARGS,
        help = "Generate the source SVG assets into <root>/img"
    )]
    pub assets: bool,

    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Cli {
    /// Profiles requested by flag, in canonical build order.
    pub fn selected_profiles(&self) -> Vec<Profile> {
        Profile::ALL
            .into_iter()
            .filter(|p| match p {
                Profile::Complete => self.complete,
                Profile::Minimal => self.minimal,
                Profile::HtmlOnly => self.html_only,
                Profile::CssOnly => self.css_only,
                Profile::JsOnly => self.js_only,
                Profile::Individual => self.individual,
            })
            .collect()
    }

    pub fn releases_dir(&self, configured: Option<&str>) -> PathBuf {
        match (&self.out, configured) {
            (Some(out), _) => out.clone(),
            (None, Some(dir)) => self.root.join(dir),
            (None, None) => self.root.join(DEFAULT_RELEASES_DIR),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_CONFIG_FILE))
    }
}

fn parse_var(raw: &str) -> Result<(String, String), BuildError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| BuildError::InvalidVariable(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(BuildError::InvalidVariable(raw.to_string()));
    }
    Ok((key.to_string(), value.to_string()))
}
