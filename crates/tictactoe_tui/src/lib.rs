//! Terminal grid interface for two-player tic-tac-toe.
//!
//! The game logic lives in [`tictactoe_rules`]; this crate draws the board,
//! turns clicks and key presses into cell selections, and reports the status.
//!
//! # Architecture
//!
//! - **App**: owns the [`GameState`](tictactoe_rules::GameState) and cursor
//! - **UI**: stateless drawing, returning the [`BoardLayout`] used for clicks
//! - **Terminal**: raw-mode setup, the event loop and guaranteed restore
//! - **Config**: TOML settings plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, Settings, DEFAULT_CONFIG_FILE};
pub use input::{action_for_key, move_cursor, Action};
pub use logging::init_tracing;
pub use terminal::run;
pub use ui::BoardLayout;
