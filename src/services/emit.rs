use crate::domain::models::{
    display_path, BuildError, BuildReport, EmittedFile, Profile, SourceLayout,
};
use anyhow::Context;
use sha2::{Digest, Sha256};
use std::path::{Component, Path, PathBuf};

/// Writes one release directory and records what went into it.
pub struct Emitter {
    root: PathBuf,
    files: Vec<EmittedFile>,
    skipped: Vec<String>,
}

impl Emitter {
    pub fn new(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("create output dir {}", root.display()))?;
        Ok(Self {
            root,
            files: Vec::new(),
            skipped: Vec::new(),
        })
    }

    pub fn ensure_dir(&self, rel: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
        let dir = self.root.join(rel);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create dir {}", dir.display()))?;
        Ok(dir)
    }

    pub fn exists(&self, rel: impl AsRef<Path>) -> bool {
        self.root.join(rel).exists()
    }

    pub fn write(&mut self, rel: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> anyhow::Result<()> {
        let rel = rel.as_ref();
        let dst = self.root.join(rel);
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let bytes = contents.as_ref();
        std::fs::write(&dst, bytes).with_context(|| format!("write {}", dst.display()))?;
        tracing::debug!(file = %dst.display(), bytes = bytes.len(), "wrote");
        self.files.push(EmittedFile {
            path: display_path(rel),
            bytes: bytes.len() as u64,
            sha256: hex::encode(Sha256::digest(bytes)),
        });
        Ok(())
    }

    /// Copies `src` to `rel`. A missing source is logged and recorded as skipped.
    pub fn copy_if_exists(&mut self, src: &Path, rel: impl AsRef<Path>) -> anyhow::Result<bool> {
        if !src.is_file() {
            tracing::warn!(path = %src.display(), "input file not found, skipping");
            self.skip(src);
            return Ok(false);
        }
        let bytes = std::fs::read(src).with_context(|| format!("read {}", src.display()))?;
        self.write(rel, bytes)?;
        Ok(true)
    }

    /// Copies every regular file directly inside `src` into `rel`, sorted by name.
    pub fn copy_files_in(&mut self, src: &Path, rel: impl AsRef<Path>) -> anyhow::Result<usize> {
        let rel = rel.as_ref();
        self.ensure_dir(rel)?;
        if !src.is_dir() {
            tracing::warn!(path = %src.display(), "input directory not found, skipping");
            self.skip(src);
            return Ok(0);
        }
        let mut copied = 0;
        for path in sorted_entries(src)? {
            if path.is_file() {
                if let Some(name) = path.file_name() {
                    self.copy_if_exists(&path, rel.join(name))?;
                    copied += 1;
                }
            }
        }
        Ok(copied)
    }

    /// Recursively copies the directory `src` into `rel`.
    pub fn copy_dir(&mut self, src: &Path, rel: impl AsRef<Path>) -> anyhow::Result<bool> {
        let rel = rel.as_ref();
        if !src.is_dir() {
            tracing::warn!(path = %src.display(), "input directory not found, skipping");
            self.skip(src);
            return Ok(false);
        }
        self.ensure_dir(rel)?;
        for path in sorted_entries(src)? {
            let Some(name) = path.file_name() else {
                continue;
            };
            if path.is_dir() {
                self.copy_dir(&path, rel.join(name))?;
            } else {
                self.copy_if_exists(&path, rel.join(name))?;
            }
        }
        Ok(true)
    }

    #[cfg(unix)]
    pub fn make_executable(&self, rel: impl AsRef<Path>) -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let path = self.root.join(rel);
        let mut perms = std::fs::metadata(&path)
            .with_context(|| format!("stat {}", path.display()))?
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("chmod {}", path.display()))?;
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn make_executable(&self, _rel: impl AsRef<Path>) -> anyhow::Result<()> {
        Ok(())
    }

    pub fn skip(&mut self, src: &Path) {
        let p = display_path(src);
        if !self.skipped.contains(&p) {
            self.skipped.push(p);
        }
    }

    pub fn finish(self, profile: Profile) -> BuildReport {
        BuildReport {
            profile,
            output_dir: display_path(&self.root),
            files: self.files,
            skipped: self.skipped,
        }
    }
}

/// Removes everything inside `dir` (creating it if needed), keeping the directory itself.
pub fn empty_dir(dir: &Path) -> anyhow::Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
        return Ok(());
    }
    for entry in std::fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("remove {}", path.display()))?;
        } else {
            std::fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        }
    }
    Ok(())
}

/// Rejects a releases dir that would overwrite or empty the boilerplate sources.
pub fn check_releases_dir(releases: &Path, layout: &SourceLayout) -> anyhow::Result<()> {
    let unsafe_dir = |reason: &str| BuildError::UnsafeReleasesDir {
        releases: releases.display().to_string(),
        reason: reason.to_string(),
    };
    let rel = resolve_path(releases)?;
    let root = resolve_path(&layout.root)?;
    if root.starts_with(&rel) {
        return Err(unsafe_dir("it contains the source root").into());
    }
    for src in [
        layout.components_dir(),
        layout.styles_dir(),
        layout.scripts_dir(),
        layout.img_dir(),
    ] {
        if rel.starts_with(resolve_path(&src)?) {
            return Err(unsafe_dir("it is inside a source directory").into());
        }
    }
    Ok(())
}

/// Absolute form of `path` with `.`/`..` folded; the deepest existing
/// ancestor is canonicalized so symlinked roots compare equal.
fn resolve_path(path: &Path) -> anyhow::Result<PathBuf> {
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .context("read current dir")?
            .join(path)
    };
    let mut normalized = PathBuf::new();
    for part in abs.components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    let mut existing = normalized.as_path();
    let mut tail = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }
    let mut out = existing
        .canonicalize()
        .with_context(|| format!("resolve {}", existing.display()))?;
    out.extend(tail.into_iter().rev());
    Ok(out)
}

fn sorted_entries(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        out.push(entry?.path());
    }
    out.sort();
    Ok(out)
}
