//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here knows whose turn it
//! is; the turn controller in [`GameState`](crate::GameState) combines them.

pub mod draw;
pub mod win;

use super::{Board, Player};
use tracing::instrument;

pub use draw::is_full;
pub use win::{has_won, winner, winning_line, LINES};

/// True iff either player has a line or the board is full.
#[instrument(level = "trace")]
pub fn is_game_over(board: &Board) -> bool {
    has_won(board, Player::X) || has_won(board, Player::O) || is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    /// Every assignment of {Empty, X, O} to the nine cells.
    fn all_boards() -> impl Iterator<Item = Board> {
        (0..3usize.pow(9)).map(|mut code| {
            let mut board = Board::new();
            for pos in Position::ALL {
                let square = match code % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Player::X),
                    _ => Square::Occupied(Player::O),
                };
                code /= 3;
                if let Square::Occupied(player) = square {
                    board.place(pos, player).unwrap();
                }
            }
            board
        })
    }

    #[test]
    fn test_game_over_matches_definition_for_every_board() {
        let mut count = 0;
        for board in all_boards() {
            let expected =
                has_won(&board, Player::X) || has_won(&board, Player::O) || is_full(&board);
            assert_eq!(is_game_over(&board), expected, "board:\n{}", board);
            count += 1;
        }
        assert_eq!(count, 19683);
    }

    #[test]
    fn test_empty_board_not_over() {
        assert!(!is_game_over(&Board::new()));
    }

    #[test]
    fn test_full_board_is_over() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_game_over(&board));
    }
}
