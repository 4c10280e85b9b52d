//! Derived game status and its status-bar wording.

use super::Player;
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// Never stored; [`GameState::status`](crate::GameState::status) recomputes
/// it from the board on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing and the player is to move.
    #[display("{}'s turn to play", _0)]
    InProgress(Player),
    /// Game ended in a win.
    #[display("{} has won!", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw! The game is over.")]
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wording() {
        assert_eq!(GameStatus::InProgress(Player::X).to_string(), "X's turn to play");
        assert_eq!(GameStatus::InProgress(Player::O).to_string(), "O's turn to play");
        assert_eq!(GameStatus::Won(Player::X).to_string(), "X has won!");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "O has won!");
        assert_eq!(GameStatus::Draw.to_string(), "Draw! The game is over.");
    }

    #[test]
    fn test_terminal() {
        assert!(!GameStatus::InProgress(Player::X).is_terminal());
        assert!(GameStatus::Won(Player::O).is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
