//! Path resolution for pack/return.
//! - `basename` flattens a possibly nested name into its tray key.
//! - `PathResolver` anchors names to the caller's working directory or to the tray.
//!
//! Nothing here touches the filesystem; existence is the mover's problem.

use anyhow::{Context, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

use crate::config::Config;

#[inline]
fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Everything after the last path separator; the whole input if there is none.
/// `"sub/dir/file.txt"` -> `"file.txt"`, `"file.txt"` -> `"file.txt"`, `"sub/"` -> `""`.
pub fn basename(name: &str) -> &str {
    match name.rfind(is_separator) {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}

/// Builds the absolute paths a move needs. The working directory is captured
/// once, so a globally installed binary always acts on the invoking shell's cwd.
#[derive(Debug, Clone)]
pub struct PathResolver {
    working_dir: PathBuf,
    tray_dir: PathBuf,
}

impl PathResolver {
    pub fn new(config: &Config, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            tray_dir: config.tray_dir.clone(),
        }
    }

    /// Resolver anchored at the process's current directory.
    pub fn from_current_dir(config: &Config) -> Result<Self> {
        let cwd = env::current_dir().context("determine current working directory")?;
        Ok(Self::new(config, cwd))
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn tray_dir(&self) -> &Path {
        &self.tray_dir
    }

    /// `name` resolved against the working directory. Absolute names pass
    /// through; `.` segments are dropped. `..` is kept as-is.
    pub fn resolve_in_working_dir(&self, name: &str) -> PathBuf {
        self.working_dir
            .join(name)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }

    /// Location of `basename` inside the tray.
    pub fn tray_path(&self, basename: &str) -> PathBuf {
        self.tray_dir.join(basename)
    }
}
