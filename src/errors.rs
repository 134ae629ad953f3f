//! Typed error definitions for tray.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrayError {
    #[error("Source path not found: {0}")]
    NotFound(PathBuf),

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },

    #[error("Source is not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Destination is an existing directory: {0}")]
    DestinationIsDirectory(PathBuf),

    #[error("Tray path exists but is not a directory: {0}")]
    TrayNotDirectory(PathBuf),

    #[error("Invalid file name '{0}': nothing left after stripping directories")]
    InvalidName(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl TrayError {
    /// Stable short code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            TrayError::NotFound(_) => "not_found",
            TrayError::PermissionDenied { .. } => "permission_denied",
            TrayError::NotAFile(_) => "not_a_file",
            TrayError::DestinationIsDirectory(_) => "destination_is_directory",
            TrayError::TrayNotDirectory(_) => "tray_not_directory",
            TrayError::InvalidName(_) => "invalid_name",
            TrayError::Config(_) => "config",
            TrayError::Interrupted => "interrupted",
        }
    }
}
