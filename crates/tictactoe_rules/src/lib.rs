//! Tic-tac-toe game logic, independent of any user interface.
//!
//! # Architecture
//!
//! - **Board**: a `Copy` 3x3 grid of [`Square`]s addressed by [`Position`]
//! - **Rules**: pure functions deciding wins, full boards and game over
//! - **GameState**: the turn controller, threaded through [`GameState::play`]
//! - **Invariants**: properties re-checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{GameState, GameStatus, Player, Position};
//!
//! let game = GameState::replay(&[
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomRight,
//!     Position::TopRight,
//! ]);
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.status().to_string(), "X has won!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use position::Position;
pub use rules::{has_won, is_full, is_game_over, winner, winning_line};
pub use status::GameStatus;
pub use types::{Board, BoardParseError, Player, Square};
