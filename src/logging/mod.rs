//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to `crabquiz.log` in the
//! configured log directory (default: `~/.local/share/crabquiz/logs/`).
//! The filter comes from `RUST_LOG` when set, otherwise from the configured
//! level. Nothing is installed when logging is disabled, so events are
//! dropped.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "crabquiz.log";

pub fn log_path(config: &LoggingConfig) -> PathBuf {
    expand_home(&config.log_dir).join(LOG_FILE)
}

/// Installs the global subscriber. Returns the log file path when logging
/// is enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = log_path(config);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(Some(path))
}
