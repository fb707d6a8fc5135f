//! Logging setup
//!
//! Installs a `tracing-subscriber` registry. The filter comes from the
//! `POCKET_LOG` environment variable when set, otherwise from
//! [`Settings::log_filter`]. Command-line runs log to stderr; the TUI logs to
//! `pocket.log` because it owns the terminal.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerError;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "POCKET_LOG";

/// Where log output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

/// Build the filter from the environment, falling back to the settings value
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
pub fn init_logging(
    paths: &LedgerPaths,
    settings: &Settings,
    target: LogTarget,
) -> Result<(), LedgerError> {
    let filter = build_filter(settings);

    match target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter);
            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .map_err(|e| LedgerError::Config(format!("Failed to install logger: {}", e)))?;
        }
        LogTarget::File => {
            paths.ensure_directories()?;
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .map_err(|e| LedgerError::Io(format!("Failed to open log file: {}", e)))?;

            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file))
                .with_filter(filter);
            tracing_subscriber::registry()
                .with(layer)
                .try_init()
                .map_err(|e| LedgerError::Config(format!("Failed to install logger: {}", e)))?;
        }
    }

    Ok(())
}
