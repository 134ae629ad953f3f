//! Single-file move.
//! Tries an atomic rename first; if source and destination sit on different
//! volumes, falls back to a safe copy+rename and deletes the source only after
//! the destination is durable.
//!
//! An existing destination *file* is replaced (last write wins). An existing
//! destination *directory* is never touched.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::TrayError;
use crate::shutdown;

use super::atomic::try_atomic_move;
use super::copy::safe_copy_and_rename;
use super::helpers::io_error_with_help;
use super::util::is_cross_device;

/// Moves one file between two absolute paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mover {
    dry_run: bool,
}

impl Mover {
    pub fn new(config: &Config) -> Self {
        Self {
            dry_run: config.dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Move `src` to `dest`, creating any missing parents of `dest`.
    pub fn move_file(&self, src: &Path, dest: &Path) -> Result<()> {
        if shutdown::is_requested() {
            return Err(TrayError::Interrupted.into());
        }

        ensure_source_is_file(src)?;
        if check_destination(src, dest)? == DestState::SameFile {
            info!(path = %src.display(), "Source and destination are the same file; nothing to do");
            return Ok(());
        }

        if self.dry_run {
            info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
            return Ok(());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .map_err(io_error_with_help("create destination directory", parent))?;
        }

        match try_atomic_move(src, dest) {
            Ok(()) => {
                info!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
                Ok(())
            }
            Err(e) if is_cross_device(&e) => {
                warn!(error = %e, "Cross-device rename; using safe copy+rename");
                safe_copy_and_rename(src, dest)?;
                fs::remove_file(src).map_err(io_error_with_help(
                    "remove original after copy (file now exists at both paths)",
                    src,
                ))?;
                info!(src = %src.display(), dest = %dest.display(), "Copied file and removed source");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !src.exists() => {
                Err(TrayError::NotFound(src.to_path_buf()).into())
            }
            Err(e) => Err(io_error_with_help("move file", src)(e)),
        }
    }
}

fn ensure_source_is_file(src: &Path) -> Result<()> {
    match fs::symlink_metadata(src) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(TrayError::NotAFile(src.to_path_buf()).into()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(TrayError::NotFound(src.to_path_buf()).into())
        }
        Err(e) => Err(io_error_with_help("inspect source", src)(e)),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum DestState {
    Free,
    Replace,
    SameFile,
}

fn check_destination(src: &Path, dest: &Path) -> Result<DestState> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => Err(TrayError::DestinationIsDirectory(dest.to_path_buf()).into()),
        Ok(_) => {
            let same = match (fs::canonicalize(src), fs::canonicalize(dest)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            };
            if same {
                return Ok(DestState::SameFile);
            }
            warn!(dest = %dest.display(), "Destination exists; replacing it");
            Ok(DestState::Replace)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dest = %dest.display(), "Destination is free");
            Ok(DestState::Free)
        }
        Err(e) => Err(io_error_with_help("inspect destination", dest)(e)),
    }
}
