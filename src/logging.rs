//! Tracing subscriber setup.
//!
//! The TUI owns stdout, so interactive sessions log to a file next to the
//! config. Headless subcommands log to stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::LOG_ENV_VAR;

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file (used while the terminal UI is active)
    File(PathBuf),
    /// Write to stderr (used by headless subcommands)
    Stderr,
}

impl LogTarget {
    /// Default log file: `<config dir>/folio.log`.
    pub fn default_file() -> Result<Self> {
        Ok(Self::File(Config::config_dir()?.join("folio.log")))
    }
}

/// Builds the filter from `FOLIO_LOG`, falling back to `default_level`.
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global tracing subscriber.
pub fn init(target: &LogTarget, default_level: &str) -> Result<()> {
    let filter = build_filter(default_level);

    match target {
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }

    Ok(())
}
