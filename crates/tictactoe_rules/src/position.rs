//! The nine cells of the board.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Row-major: `TopLeft` is `(0, 0)` and index 0, `BottomRight` is `(2, 2)`
/// and index 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from `(row, col)`, or `None` off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parse from label or number (1-9, as printed on a keypad-style grid).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        if let Ok(num) = s.trim().parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let s_lower = s.trim().to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Filters positions by board state - returns only empty squares.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        board.empty_positions()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip_every_cell() {
        for pos in Position::ALL {
            assert_eq!(Position::new(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_new_off_board() {
        assert_eq!(Position::new(3, 0), None);
        assert_eq!(Position::new(0, 3), None);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_corners() {
        assert_eq!(Position::new(0, 2), Some(Position::TopRight));
        assert_eq!(Position::new(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::BottomRight.to_index(), 8);
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("9"), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(Position::from_label_or_number("10"), None);
        assert_eq!(Position::from_label_or_number(" center "), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("middle"), None);
    }
}
