//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_rules::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the game.
    Quit,
    /// Start a new game.
    Restart,
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Select a cell directly (digits 1-9).
    Select(Position),
}

/// Maps a key event to an action, ignoring releases and unbound keys.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(key.code))
        }
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_label_or_number(&c.to_string()).map(Action::Select)
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::new(row, col).unwrap_or(cursor)
}
