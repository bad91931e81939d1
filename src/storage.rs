//! Directory of rendered mockups.
//!
//! Existence checks and writes are not coordinated; two processes generating
//! into the same directory may both render a file, and the last write wins.

use std::path::{Path, PathBuf};

use crate::{
    catalog::Mockup,
    foundation::error::{DiagmockError, DiagmockResult},
    render::{bitmap::Bitmap, compositor::Compositor},
};

/// Directory used when nothing else is configured.
pub const DEFAULT_OUT_DIR: &str = "mockups";

#[derive(Clone, Debug)]
/// PNG files keyed by file name inside one directory.
pub struct MockupStore {
    dir: PathBuf,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Outcome of [`MockupStore::ensure_generated`].
pub struct GenerateReport {
    /// File names rendered and written, in input order.
    pub written: Vec<String>,
    /// File names left untouched because they already existed.
    pub skipped: Vec<String>,
}

impl GenerateReport {
    /// Whether every file already existed.
    pub fn is_noop(&self) -> bool {
        self.written.is_empty()
    }
}

impl MockupStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of `name`. Names must be a single path component.
    pub fn path_of(&self, name: &str) -> DiagmockResult<PathBuf> {
        Ok(self.dir.join(validate_file_name(name)?))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_ok_and(|p| p.is_file())
    }

    /// Names from `mockups` with no file on disk yet.
    pub fn missing<'a>(&self, mockups: &[Mockup<'a>]) -> Vec<&'a str> {
        mockups
            .iter()
            .filter(|m| !self.exists(m.file_name))
            .map(|m| m.file_name)
            .collect()
    }

    /// Write `bitmap` as PNG, creating the directory first.
    pub fn save(&self, bitmap: &Bitmap, name: &str) -> DiagmockResult<PathBuf> {
        let path = self.path_of(name)?;
        std::fs::create_dir_all(&self.dir)?;
        bitmap.save_png(&path)?;
        tracing::info!(path = %path.display(), "wrote mockup");
        Ok(path)
    }

    /// Render and write every mockup whose file is missing, or all of them
    /// when `force` is set.
    #[tracing::instrument(skip(self, mockups, compositor), fields(dir = %self.dir.display(), mockups = mockups.len()))]
    pub fn ensure_generated(
        &self,
        mockups: &[Mockup<'_>],
        compositor: &Compositor,
        force: bool,
    ) -> DiagmockResult<GenerateReport> {
        let mut report = GenerateReport::default();
        for m in mockups {
            if !force && self.exists(m.file_name) {
                tracing::debug!(file = m.file_name, "mockup exists; skipping");
                report.skipped.push(m.file_name.to_string());
                continue;
            }
            let bitmap = compositor.render_scene(m.scene)?;
            self.save(&bitmap, m.file_name)?;
            report.written.push(m.file_name.to_string());
        }
        Ok(report)
    }
}

fn validate_file_name(name: &str) -> DiagmockResult<&str> {
    let bad = |why: &str| {
        DiagmockError::Other(anyhow::anyhow!("invalid mockup file name '{name}': {why}"))
    };
    if name.is_empty() {
        return Err(bad("must be non-empty"));
    }
    if name.contains(['/', '\\']) {
        return Err(bad("must not contain path separators"));
    }
    if name == "." || name == ".." {
        return Err(bad("must name a file"));
    }
    Ok(name)
}

#[cfg(test)]
#[path = "../tests/unit/storage/storage.rs"]
mod tests;
