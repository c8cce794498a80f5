use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// `{{NAME}}` substitution values, ordered so rendering and reports are stable.
pub type TemplateVars = BTreeMap<String, String>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    Complete,
    Minimal,
    HtmlOnly,
    CssOnly,
    JsOnly,
    Individual,
}

impl Profile {
    /// Canonical build order.
    pub const ALL: [Profile; 6] = [
        Profile::Complete,
        Profile::Minimal,
        Profile::HtmlOnly,
        Profile::CssOnly,
        Profile::JsOnly,
        Profile::Individual,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            Profile::Complete => "complete",
            Profile::Minimal => "minimal",
            Profile::HtmlOnly => "html-only",
            Profile::CssOnly => "css-only",
            Profile::JsOnly => "js-only",
            Profile::Individual => "individual",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Profile::Complete => "complete version",
            Profile::Minimal => "minimal version",
            Profile::HtmlOnly => "HTML components only",
            Profile::CssOnly => "stylesheets only",
            Profile::JsOnly => "scripts only",
            Profile::Individual => "individual files + installer",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Where the boilerplate sources live. Path arithmetic only.
#[derive(Debug, Clone)]
pub struct SourceLayout {
    pub root: PathBuf,
}

impl SourceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join("components")
    }

    pub fn styles_dir(&self) -> PathBuf {
        self.root.join("styles")
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root.join("scripts")
    }

    pub fn img_dir(&self) -> PathBuf {
        self.root.join("img")
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join("manifest.json")
    }

    pub fn component(&self, name: &str) -> PathBuf {
        self.components_dir().join(name)
    }
}

pub struct BuildContext {
    pub layout: SourceLayout,
    pub releases_dir: PathBuf,
    pub vars: TemplateVars,
}

impl BuildContext {
    pub fn output_dir(&self, profile: Profile) -> PathBuf {
        self.releases_dir.join(profile.dir_name())
    }
}

/// Optional `boilerkit.toml` at the source root.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Minimum boilerkit version able to build this project.
    #[serde(default)]
    pub requires: Option<String>,
    #[serde(default)]
    pub releases_dir: Option<String>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct EmittedFile {
    pub path: String,
    pub bytes: u64,
    pub sha256: String,
}

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub profile: Profile,
    pub output_dir: String,
    pub files: Vec<EmittedFile>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub releases_dir: String,
    pub cleaned: bool,
    pub profiles: Vec<BuildReport>,
}

#[derive(Debug, Serialize)]
pub struct AssetsReport {
    pub img_dir: String,
    pub files: Vec<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Svelte,
    None,
}

#[derive(Debug, Serialize)]
pub struct ProjectAnalysis {
    pub path: String,
    pub has_css: bool,
    pub has_js: bool,
    pub has_html: bool,
    pub has_package_json: bool,
    pub has_git: bool,
    pub framework: Framework,
    pub recommendation: String,
    pub suggested_profiles: Vec<Profile>,
}

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("boilerkit {required} or newer required, running {running}")]
    UnsupportedVersion { required: String, running: String },
    #[error("invalid variable override (expected KEY=VALUE): {0}")]
    InvalidVariable(String),
    #[error("invalid config {path}: {reason}")]
    InvalidConfig { path: String, reason: String },
    #[error("source root not found: {0}")]
    MissingRoot(String),
    #[error("refusing to use releases dir {releases}: {reason}")]
    UnsafeReleasesDir { releases: String, reason: String },
}

pub fn display_path(p: &Path) -> String {
    p.to_string_lossy().replace('\\', "/")
}
