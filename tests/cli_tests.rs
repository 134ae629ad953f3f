use clap::Parser;
use std::path::PathBuf;
use tray::cli::{Args, Command};
use tray::config::types::{Config, LogLevel};
use tray::Verb;

#[test]
fn pack_subcommand_parses_file() {
    let args = Args::parse_from(["tray", "pack", "./sub/file.js"]);
    assert_eq!(
        args.command,
        Some(Command::Pack {
            file: "./sub/file.js".into()
        })
    );
    let cmd = args.command.as_ref().unwrap();
    assert_eq!(cmd.as_move(), Some((Verb::Pack, "./sub/file.js")));
}

#[test]
fn return_subcommand_parses_file() {
    let args = Args::parse_from(["tray", "return", "notes.txt"]);
    let cmd = args.command.unwrap();
    assert_eq!(cmd.as_move(), Some((Verb::Return, "notes.txt")));
}

#[test]
fn list_is_not_a_move() {
    let args = Args::parse_from(["tray", "list"]);
    assert_eq!(args.command, Some(Command::List));
    assert_eq!(args.command.unwrap().as_move(), None);
}

#[test]
fn pack_requires_a_file() {
    assert!(Args::try_parse_from(["tray", "pack"]).is_err());
    assert!(Args::try_parse_from(["tray", "pack", "a", "b"]).is_err());
}

#[test]
fn short_v_is_version() {
    let err = Args::try_parse_from(["tray", "-v"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}

#[test]
fn global_flags_work_after_subcommand() {
    let args = Args::parse_from(["tray", "pack", "x", "--dry-run", "--tray-dir", "/t"]);
    assert!(args.dry_run);
    assert_eq!(args.tray_dir, Some(PathBuf::from("/t")));
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["tray", "--debug", "--log-level", "quiet", "list"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["tray", "--log-level", "info", "list"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["tray", "list"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "tray",
        "--tray-dir",
        "/cli/tray",
        "--log-level",
        "info",
        "--dry-run",
        "list",
    ]);
    let mut cfg = Config::new("/from/config");
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.tray_dir, PathBuf::from("/cli/tray"));
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert!(cfg.dry_run);
}

#[test]
fn apply_overrides_leaves_unset_fields() {
    let args = Args::parse_from(["tray", "list"]);
    let mut cfg = Config::new("/from/config");
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.tray_dir, PathBuf::from("/from/config"));
    assert_eq!(cfg.log_level, LogLevel::Normal);
    assert!(!cfg.dry_run);
}
