use crate::domain::models::{BuildError, ProjectConfig};
use anyhow::Context;
use std::path::Path;

pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads `boilerkit.toml`. A missing file yields the default config.
pub fn load_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ProjectConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&raw).map_err(|e| BuildError::InvalidConfig {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    if config.releases_dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
        return Err(BuildError::InvalidConfig {
            path: path.display().to_string(),
            reason: "releases_dir must not be empty".to_string(),
        }
        .into());
    }
    tracing::debug!(
        path = %path.display(),
        variables = config.variables.len(),
        "loaded config"
    );
    Ok(config)
}

/// Fails when the project asks for a newer tool than the one running.
pub fn ensure_supported(config: &ProjectConfig, running: &str) -> Result<(), BuildError> {
    let Some(required) = config.requires.as_deref() else {
        return Ok(());
    };
    let unsupported = || BuildError::UnsupportedVersion {
        required: required.to_string(),
        running: running.to_string(),
    };
    let want = parse_version(required).ok_or_else(|| BuildError::InvalidConfig {
        path: "requires".to_string(),
        reason: format!("not a version: {}", required),
    })?;
    let have = parse_version(running).ok_or_else(|| unsupported())?;
    if have < want {
        return Err(unsupported());
    }
    Ok(())
}

/// `major[.minor[.patch]]`, missing parts read as zero. Pre-release suffixes are ignored.
fn parse_version(raw: &str) -> Option<(u64, u64, u64)> {
    let core = raw.trim().trim_start_matches('v');
    let core = core.split(['-', '+']).next()?;
    let mut parts = core.split('.').map(|p| p.parse::<u64>());
    let major = parts.next()?.ok()?;
    let minor = parts.next().transpose().ok()?.unwrap_or(0);
    let patch = parts.next().transpose().ok()?.unwrap_or(0);
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}
