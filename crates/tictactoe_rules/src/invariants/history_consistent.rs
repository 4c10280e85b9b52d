//! History consistency invariant: mark counts agree with the move list.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: each player's marks on the board equal their moves in history,
/// and X is never behind O nor more than one ahead.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let x_marks = board.count(Player::X);
        let o_marks = board.count(Player::O);

        let x_moves = game.history().iter().filter(|m| m.player == Player::X).count();
        let o_moves = game.history().len() - x_moves;

        x_marks == x_moves && o_marks == o_moves && (x_marks == o_marks || x_marks == o_marks + 1)
    }

    fn description() -> &'static str {
        "Board marks match move history"
    }
}
