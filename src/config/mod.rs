//! Config module.
//! Provides configuration types, default paths, XML loading, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_tray_dir, CONFIG_ENV};
pub use types::{Config, LogLevel};
pub use xml::{load_config_from_path, load_config_from_xml, FileSettings};
