//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the signal handler,
//! validates the tray path, and dispatches the requested verb.

use anyhow::{bail, Result};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use tray::cli::Args;
use tray::config::{load_config_from_xml, CONFIG_ENV};
use tray::output as out;
use tray::{default_config_path, shutdown, Config, Moved, Tray, TrayError, Verb};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    // Defaults < config file < CLI flags.
    let mut cfg = Config::default();
    let loaded = load_config_from_xml()?;
    if let Some((_, settings)) = &loaded {
        settings.apply_to(&mut cfg);
    }
    args.apply_overrides(&mut cfg);
    if cfg.tray_dir.is_relative() && !cfg.tray_dir.as_os_str().is_empty() {
        cfg.tray_dir = std::env::current_dir()?.join(&cfg.tray_dir);
    }

    let guard_opt = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json)?;

    // Guard is dropped on SIGINT to flush file logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        if let Err(e) = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; abandoning move...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        }) {
            warn!(error = %e, "Could not install interrupt handler");
        }
    }

    if let Some((path, _)) = &loaded {
        debug!(config = %path.display(), "Loaded config file");
    }
    debug!("Starting tray: {:?}", args);

    let result = dispatch(&args, &cfg);

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn dispatch(args: &Args, cfg: &Config) -> Result<()> {
    let Some(command) = &args.command else {
        bail!("no command given; use `tray pack <FILE>`, `tray return <FILE>` or `tray list`");
    };

    if let Err(e) = cfg.validate() {
        log_failure("validate", &e);
        return Err(e);
    }
    let tray = Tray::from_current_dir(cfg)?;

    match command.as_move() {
        Some((verb, name)) => match tray.run(verb, name) {
            Ok(moved) => {
                report(&moved);
                Ok(())
            }
            Err(e) => {
                log_failure(&verb.to_string(), &e);
                Err(e)
            }
        },
        None => {
            let names = tray.list()?;
            if names.is_empty() {
                info!(tray = %tray.tray_dir().display(), "Tray is empty");
            }
            for name in names {
                out::print_user(&name);
            }
            Ok(())
        }
    }
}

fn report(moved: &Moved) {
    if moved.dry_run {
        out::print_info(&format!(
            "Dry-run: would {} '{}' -> '{}'",
            moved.verb,
            moved.source.display(),
            moved.destination.display()
        ));
        return;
    }
    let done = match moved.verb {
        Verb::Pack => "Packed",
        Verb::Return => "Returned",
    };
    info!(verb = %moved.verb, source = %moved.source.display(), dest = %moved.destination.display(), "Move completed");
    out::print_success(&format!(
        "{} '{}' -> '{}'",
        done,
        moved.source.display(),
        moved.destination.display()
    ));
}

/// Structured record of a failure. The user-facing message is printed once by
/// `main`, so this stays at debug level.
fn log_failure(step: &str, e: &anyhow::Error) {
    let Some(te) = e.downcast_ref::<TrayError>() else {
        debug!(step, error = %e, "Failed");
        return;
    };
    let code = te.code();
    match te {
        TrayError::NotFound(path) => {
            debug!(step, code, path = %path.display(), "Nothing to move at source")
        }
        TrayError::PermissionDenied { path, context } => {
            debug!(step, code, path = %path.display(), %context, "Permission denied")
        }
        TrayError::DestinationIsDirectory(path) | TrayError::NotAFile(path) => {
            debug!(step, code, path = %path.display(), "Refusing to move")
        }
        TrayError::TrayNotDirectory(path) => {
            debug!(step, code, tray = %path.display(), "Tray path unusable")
        }
        _ => debug!(step, code, error = %te, "Failed"),
    }
}

fn print_config_location() {
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}"));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default tray config path:\n  {}", p.display()));
            if !p.exists() {
                out::print_info(
                    "No config file exists there; defaults apply. Example:\n\n<config>\n  <tray_dir>/path/to/.tray</tray_dir>\n  <log_level>normal</log_level>\n</config>",
                );
            }
        }
        None => out::print_error("Could not determine a default config path"),
    }
}
