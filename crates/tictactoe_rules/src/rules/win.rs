//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` holds all three cells of any line.
#[instrument(level = "trace")]
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the first completed line, if any.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|[a, b, c]| {
        let sq = board.get(*a);
        sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c)
    })
}

/// Returns `Some(player)` if the player has three in a row, `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}
