//! Safe copy-and-rename, the cross-volume path of a move:
//! - Copies to a hidden temp file in the destination directory (fsynced)
//! - Gives the temp file the source's permissions
//! - Atomically renames temp -> dest
//! - Removes the temp file on every failure, so dest is either the complete
//!   new file or untouched

use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::{io_copy, util};
use crate::errors::TrayError;
use crate::shutdown;

/// Copy `src` into place at `dest` without ever exposing a partial file at `dest`.
/// The source is left alone; deleting it is the caller's decision.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;
    fs::create_dir_all(dest_dir)
        .map_err(io_error_with_help("create destination directory", dest_dir))?;

    let tmp_path = util::unique_temp_path(dest_dir);

    let bytes = match io_copy::copy_streaming(src, &tmp_path) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_error_with_help("copy to temporary file", &tmp_path)(e));
        }
    };
    debug!(tmp = %tmp_path.display(), bytes, "Copied to temporary file");

    // umask may have stripped bits at create time
    let perms = fs::metadata(src)
        .map(|m| m.permissions())
        .and_then(|p| fs::set_permissions(&tmp_path, p));
    if let Err(e) = perms {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error_with_help("copy permissions to temporary file", &tmp_path)(e));
    }

    if shutdown::is_requested() {
        let _ = fs::remove_file(&tmp_path);
        return Err(TrayError::Interrupted.into());
    }

    if let Err(e) = try_atomic_move(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error_with_help("rename temporary file into place", dest)(e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn leftovers(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with(util::TEMP_PREFIX))
            .collect()
    }

    #[test]
    fn copies_into_missing_directory() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.txt");
        fs::write(&src, b"payload").unwrap();
        let dest = td.path().join("deep").join("tray").join("a.txt");

        safe_copy_and_rename(&src, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"payload");
        assert!(src.exists(), "source is the caller's to remove");
        assert!(leftovers(dest.parent().unwrap()).is_empty());
    }

    #[test]
    fn failed_copy_leaves_no_temp_and_no_dest() {
        let td = tempdir().unwrap();
        let dest_dir = td.path().join("tray");
        let dest = dest_dir.join("gone.txt");

        let err = safe_copy_and_rename(&td.path().join("gone.txt"), &dest).unwrap_err();
        assert!(err.to_string().contains("copy to temporary file"), "err: {err}");
        assert!(!dest.exists());
        assert!(leftovers(&dest_dir).is_empty());
    }
}
