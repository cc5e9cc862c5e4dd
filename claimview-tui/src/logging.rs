//! Tracing setup. The TUI owns the terminal, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const VERBOSE_LOG_FILTER: &str = "claimview=debug,claimview_core=debug,claimview_tui=debug";

/// `<data_local_dir>/claimview/claimview.log`, falling back to the working directory.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("claimview")
        .join("claimview.log")
}

/// Filter precedence: `RUST_LOG`, then `--verbose`, then the configured filter.
pub fn resolve_filter(verbose: bool, configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(VERBOSE_LOG_FILTER)
        } else {
            EnvFilter::new(configured)
        }
    })
}

/// Install a file-backed fmt subscriber.
pub fn init(path: &Path, filter: EnvFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
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
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
