//! Default path helpers.
//! Determines the OS-appropriate config file location and the default tray.

use dirs::{config_dir, home_dir};
use std::env;
use std::path::PathBuf;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TRAY_CONFIG";

/// Config file location.
///
/// Search order:
///  - `$TRAY_CONFIG` (relative values resolve against the current directory)
///  - `<config_dir>/tray/config.xml`
///  - `$HOME/.config/tray/config.xml`
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(raw) = env::var_os(CONFIG_ENV) {
        let p = PathBuf::from(raw);
        if p.is_absolute() {
            return Some(p);
        }
        return env::current_dir().ok().map(|cwd| cwd.join(p));
    }

    if let Some(mut base) = config_dir() {
        base.push("tray");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("tray")
                .join("config.xml")
        })
    }
}

/// `<home>/Documents/Programming/.tray`, or None when no home directory is known.
pub fn default_tray_dir() -> Option<PathBuf> {
    home_dir().map(|h| h.join("Documents").join("Programming").join(".tray"))
}
