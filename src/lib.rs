//! Core library for `tray`.
//!
//! Parks a single file in a fixed holding directory (the tray) and brings it
//! back later. The pieces are small and injected explicitly: a [`Config`]
//! resolved once at startup, a [`PathResolver`] that anchors names to the
//! caller's working directory or the tray, a [`Mover`] that moves one file,
//! and [`Tray`], which maps the `pack` / `return` verbs onto them.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod resolve;
pub mod shutdown;
pub mod tray;

pub use config::{default_config_path, default_tray_dir, Config, LogLevel};
pub use errors::TrayError;
pub use fs_ops::Mover;
pub use resolve::{basename, PathResolver};
pub use tray::{Moved, Tray, Verb};
