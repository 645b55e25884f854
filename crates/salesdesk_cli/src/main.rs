//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `salesdesk_core` linkage and
//!   database bootstrap without any GUI runtime.
//! - With no arguments, run a deterministic in-memory check; with a config
//!   file argument, exercise the full config -> logging -> open path.

use salesdesk_core::db::migrations::latest_version;
use salesdesk_core::db::{open_db, open_db_in_memory};
use salesdesk_core::{default_log_level, init_logging, AppConfig};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("salesdesk_core version={}", salesdesk_core::core_version());

    let result = match std::env::args().nth(1) {
        Some(config_path) => open_from_config(Path::new(&config_path)),
        None => open_db_in_memory()
            .map(|_| ())
            .map_err(|err| err.to_string()),
    };

    match result {
        Ok(()) => {
            println!(
                "salesdesk_core bootstrap=ok schema_version={}",
                latest_version()
            );
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("salesdesk_core bootstrap=error error={message}");
            ExitCode::FAILURE
        }
    }
}

fn open_from_config(path: &Path) -> Result<(), String> {
    let config = AppConfig::from_file(path).map_err(|err| err.to_string())?;

    if let Some(dir) = &config.logging.dir {
        let level = match config.logging.level.as_deref() {
            Some(level) => level,
            None => default_log_level(),
        };
        init_logging(level, &dir.to_string_lossy())?;
    }

    open_db(&config.database.path)
        .map(|_| ())
        .map_err(|err| err.to_string())
}
