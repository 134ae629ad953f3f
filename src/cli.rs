//! CLI definition and parsing.
//!
//! Notes:
//! - `-v` / `--version` prints the version (clap's default is `-V`).
//! - Global flags may appear before or after the subcommand.
//! - --debug is a shorthand for --log-level debug.

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::tray::Verb;

/// Park a file in the tray and bring it back later.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tray",
    author,
    version,
    about = "Move a file into a holding tray and return it later",
    disable_version_flag = true
)]
pub struct Args {
    #[arg(short = 'v', long = "version", action = ArgAction::Version, help = "Print version")]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the tray directory (normally configured via XML).
    #[arg(long, global = true, value_hint = ValueHint::DirPath, help = "Override the tray directory")]
    pub tray_dir: Option<PathBuf>,

    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Print the config file location used by tray and exit"
    )]
    pub print_config: bool,

    #[arg(
        long,
        global = true,
        help = "Show what would be moved, but do not modify files"
    )]
    pub dry_run: bool,

    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move FILE from the current directory into the tray.
    Pack {
        #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
        file: String,
    },
    /// Move FILE from the tray into the current directory.
    Return {
        #[arg(value_name = "FILE")]
        file: String,
    },
    /// List the files currently in the tray.
    List,
}

impl Command {
    /// The move this command asks for, if it is a move at all.
    pub fn as_move(&self) -> Option<(Verb, &str)> {
        match self {
            Command::Pack { file } => Some((Verb::Pack, file.as_str())),
            Command::Return { file } => Some((Verb::Return, file.as_str())),
            Command::List => None,
        }
    }
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.tray_dir {
            cfg.tray_dir = dir.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
