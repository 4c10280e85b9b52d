//! Tracing setup. Output goes to a file so it never draws over the board.

use crate::config::Settings;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to the configured log file.
///
/// `RUST_LOG` wins over the configured filter when set.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.log_filter()))
        .with_context(|| format!("Invalid log filter {:?}", settings.log_filter()))?;

    // Don't fail if a subscriber is already installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
