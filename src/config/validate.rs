//! Config validation.
//! The tray itself is created lazily by the mover, so validation only checks
//! that the configured path is usable: absolute, and a directory if present.

use anyhow::Result;
use std::fs;
use tracing::{debug, error};

use super::types::Config;
use crate::errors::TrayError;

impl Config {
    pub fn validate(&self) -> Result<()> {
        let tray = &self.tray_dir;

        if tray.as_os_str().is_empty() {
            error!("No tray directory configured and no home directory found");
            return Err(TrayError::Config(
                "cannot determine a tray directory; set <tray_dir> or pass --tray-dir".into(),
            )
            .into());
        }
        if !tray.is_absolute() {
            error!(tray = %tray.display(), "Tray directory is not absolute");
            return Err(TrayError::Config(format!(
                "tray_dir must be an absolute path, got '{}'",
                tray.display()
            ))
            .into());
        }

        // Missing is fine; anything other than a directory is not.
        match fs::metadata(tray) {
            Ok(meta) if !meta.is_dir() => {
                error!(tray = %tray.display(), "Tray path is not a directory");
                return Err(TrayError::TrayNotDirectory(tray.clone()).into());
            }
            Ok(_) => debug!(tray = %tray.display(), "Tray directory present"),
            Err(_) => debug!(tray = %tray.display(), "Tray directory absent; created on first pack"),
        }
        Ok(())
    }
}
