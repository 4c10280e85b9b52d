//! Command-line interface for the tic-tac-toe terminal game.

use crate::config::{ConfigError, Settings};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// TicTacToe - two players, one grid, click to play
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture (keyboard only)
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Loads settings and applies command-line overrides on top.
    #[instrument(skip(self))]
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if let Some(log_file) = &self.log_file {
            settings = settings.with_log_file(log_file.clone());
        }
        if self.no_mouse {
            settings = settings.with_mouse(false);
        }
        Ok(settings)
    }
}
