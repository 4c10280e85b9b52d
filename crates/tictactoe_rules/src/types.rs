//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, strum::EnumIter)]
pub enum Player {
    /// Player X (goes first).
    #[default]
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A plain value: copying a board is a snapshot, and nothing in here knows
/// how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Square> {
        Position::new(row, col).map(|pos| self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places a player's mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a mark.
    /// The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns the empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, square) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells (`X`, `O` or `.`), ignoring whitespace, `|` and `/`.
    ///
    /// Only the cell characters are checked; the mark counts need not come
    /// from a legal game.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut filled = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|' && *c != '/') {
            if filled == 9 {
                return Err(BoardParseError::new(format!(
                    "too many cells in {:?}",
                    s
                )));
            }
            board.squares[filled] = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected cell {:?}",
                        other
                    )));
                }
            };
            filled += 1;
        }
        if filled != 9 {
            return Err(BoardParseError::new(format!(
                "expected 9 cells, found {}",
                filled
            )));
        }
        Ok(board)
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
