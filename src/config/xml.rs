//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file is not an error: callers fall back to defaults.
//!
//! Notes:
//! - Unknown XML fields are rejected so typos surface instead of being ignored.
//! - Relative paths inside the file resolve against the file's own directory.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};
use crate::errors::TrayError;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "tray_dir")]
    tray_dir: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

/// Settings read from a config file. Unset fields leave the defaults alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub tray_dir: Option<PathBuf>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

impl FileSettings {
    /// Overlay the file's values onto `cfg`.
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(dir) = &self.tray_dir {
            cfg.tray_dir = dir.clone();
        }
        if let Some(level) = self.log_level {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
    }
}

/// Read the config file from its default location (see `default_config_path`).
/// Returns the path that was read along with its settings, or None if there is no file.
pub fn load_config_from_xml() -> Result<Option<(PathBuf, FileSettings)>> {
    let Some(cfg_path) = default_config_path() else {
        return Ok(None);
    };
    if !cfg_path.exists() {
        debug!(path = %cfg_path.display(), "No config file; using defaults");
        return Ok(None);
    }
    let settings = load_config_from_path(&cfg_path)?;
    Ok(Some((cfg_path, settings)))
}

/// Read and parse a specific config file.
pub fn load_config_from_path(path: &Path) -> Result<FileSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config file '{}'", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_config(&content, base_dir).map_err(|e| {
        anyhow::Error::new(TrayError::Config(format!("{}: {}", path.display(), e)))
    })
}

fn parse_config(content: &str, base_dir: &Path) -> std::result::Result<FileSettings, String> {
    let parsed: XmlConfig = from_xml_str(content).map_err(|e| e.to_string())?;

    let tray_dir = non_empty(parsed.tray_dir.as_deref()).map(|s| anchor(base_dir, s));
    let log_file = non_empty(parsed.log_file.as_deref()).map(|s| anchor(base_dir, s));
    let log_level = match non_empty(parsed.log_level.as_deref()) {
        Some(s) => Some(s.parse::<LogLevel>()?),
        None => None,
    };

    Ok(FileSettings {
        tray_dir,
        log_level,
        log_file,
    })
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn anchor(base_dir: &Path, s: &str) -> PathBuf {
    let p = PathBuf::from(s);
    if p.is_absolute() { p } else { base_dir.join(p) }
}
