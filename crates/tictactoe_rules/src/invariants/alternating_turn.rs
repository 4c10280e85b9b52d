//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{rules, GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... starting with X. While the game is
/// live the player to move is the one after the last mover; once it is over,
/// the last mover stays recorded as `to_move`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.player == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        match history.last() {
            None => game.to_move() == Player::X,
            Some(last) if rules::is_game_over(game.board()) => game.to_move() == last.player,
            Some(last) => game.to_move() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
