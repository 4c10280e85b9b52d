//! Turn controller: the explicit game state and its transition function.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
///
/// Transitions never mutate in place: [`GameState::try_play`] and
/// [`GameState::play`] return the successor, so every state a caller has
/// seen stays valid as a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player whose mark goes down next while the game is live.
    to_move: Player,
    /// Moves in the order they were played.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Derives the status from the board.
    pub fn status(&self) -> GameStatus {
        if let Some(player) = rules::winner(&self.board) {
            GameStatus::Won(player)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move)
        }
    }

    /// Returns true once the game reached `Won` or `Draw`.
    pub fn is_over(&self) -> bool {
        rules::is_game_over(&self.board)
    }

    /// Returns the positions a move may still be played on.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Plays the current player's mark at `pos` and returns the next state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already reached a terminal state
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark
    /// - [`MoveError::InvariantViolation`] if a postcondition fails (debug builds)
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn try_play(&self, pos: Position) -> Result<GameState, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        let mut next = self.clone();
        next.board.place(pos, player)?;
        next.history.push(Move::new(player, pos));

        if rules::has_won(&next.board, player) {
            info!(%player, "Game won");
        } else if rules::is_full(&next.board) {
            info!("Game drawn");
        } else {
            next.to_move = player.opponent();
        }

        #[cfg(debug_assertions)]
        next.check_invariants()?;

        debug!(status = %next.status(), "Move applied");
        Ok(next)
    }

    /// Input-gating transition: refused moves leave the state unchanged.
    #[instrument(skip(self))]
    pub fn play(&self, pos: Position) -> GameState {
        match self.try_play(pos) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.clone()
            }
        }
    }

    /// Replays a sequence of selections from a new game.
    ///
    /// Selections the game refuses are skipped, just as clicks would be.
    #[instrument]
    pub fn replay(positions: &[Position]) -> GameState {
        positions
            .iter()
            .fold(GameState::new(), |game, pos| game.play(*pos))
    }

    /// Verifies every game invariant against this state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvariantViolation`] naming each failed invariant.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }

    #[cfg(test)]
    pub(crate) fn corrupt_board(&mut self, board: Board) {
        self.board = board;
    }
}
