//! Verb dispatch.
//! Maps `pack` / `return` onto a (source, destination) pair and hands it to
//! the mover. This is the only place that knows which way each verb goes:
//!
//! - pack:   `<cwd>/<name>`            -> `<tray>/<basename(name)>`
//! - return: `<tray>/<basename(name)>` -> `<cwd>/<name>`
//!
//! Return restores relative to wherever it is invoked, not to where the file
//! was packed from. Nothing records which files are packed; the tray listing
//! is the only source of truth.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;
use crate::errors::TrayError;
use crate::fs_ops::{is_temp_name, Mover};
use crate::resolve::{basename, PathResolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Pack,
    Return,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verb::Pack => "pack",
            Verb::Return => "return",
        })
    }
}

/// Outcome of a completed (or dry-run) move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moved {
    pub verb: Verb,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub dry_run: bool,
}

pub struct Tray {
    resolver: PathResolver,
    mover: Mover,
}

impl Tray {
    pub fn new(config: &Config, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver: PathResolver::new(config, working_dir),
            mover: Mover::new(config),
        }
    }

    pub fn from_current_dir(config: &Config) -> Result<Self> {
        Ok(Self {
            resolver: PathResolver::from_current_dir(config)?,
            mover: Mover::new(config),
        })
    }

    pub fn tray_dir(&self) -> &Path {
        self.resolver.tray_dir()
    }

    /// Source and destination for `verb` applied to `name`, without moving anything.
    pub fn plan(&self, verb: Verb, name: &str) -> Result<(PathBuf, PathBuf)> {
        let flat = basename(name);
        if flat.is_empty() || flat == "." || flat == ".." {
            return Err(TrayError::InvalidName(name.to_string()).into());
        }
        let in_tray = self.resolver.tray_path(flat);
        let in_cwd = self.resolver.resolve_in_working_dir(name);
        Ok(match verb {
            Verb::Pack => (in_cwd, in_tray),
            Verb::Return => (in_tray, in_cwd),
        })
    }

    pub fn run(&self, verb: Verb, name: &str) -> Result<Moved> {
        let (source, destination) = self.plan(verb, name)?;
        self.ensure_tray_usable()?;
        debug!(%verb, src = %source.display(), dest = %destination.display(), "Planned move");
        self.mover.move_file(&source, &destination)?;
        Ok(Moved {
            verb,
            source,
            destination,
            dry_run: self.mover.is_dry_run(),
        })
    }

    /// Move `name` from the working directory into the tray.
    pub fn pack(&self, name: &str) -> Result<Moved> {
        self.run(Verb::Pack, name)
    }

    /// Move `name` out of the tray into the working directory.
    pub fn return_file(&self, name: &str) -> Result<Moved> {
        self.run(Verb::Return, name)
    }

    /// Names of the files currently in the tray, sorted. A tray that does not
    /// exist yet is empty.
    pub fn list(&self) -> Result<Vec<String>> {
        let tray = self.tray_dir();
        if !tray.exists() {
            return Ok(Vec::new());
        }
        self.ensure_tray_usable()?;

        let mut names = Vec::new();
        for entry in WalkDir::new(tray).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.with_context(|| format!("read tray directory '{}'", tray.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_temp_name(&name) {
                continue;
            }
            names.push(name);
        }
        Ok(names)
    }

    fn ensure_tray_usable(&self) -> Result<()> {
        let tray = self.tray_dir();
        match fs::metadata(tray) {
            Ok(meta) if !meta.is_dir() => Err(TrayError::TrayNotDirectory(tray.to_path_buf()).into()),
            _ => Ok(()),
        }
    }
}
