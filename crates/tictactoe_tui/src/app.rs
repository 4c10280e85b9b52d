//! Application state and logic.

use crate::input::{self, Action};
use crate::ui::BoardLayout;
use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_rules::{GameState, GameStatus, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the game state and the keyboard cursor. Drawing reads from here and
/// never writes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    game: GameState,
    cursor: Position,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status, recomputed from the board.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Status bar text.
    pub fn status_message(&self) -> String {
        self.status().to_string()
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Forwards a cell selection to the turn controller.
    ///
    /// Returns true if the move was played.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> bool {
        let next = self.game.play(pos);
        let played = next != self.game;
        self.game = next;
        if played {
            self.cursor = pos;
            debug!(status = %self.game.status(), "Cell selected");
        }
        played
    }

    /// Discards the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.game.history().len(), "Starting new game");
        self.game = GameState::new();
        self.cursor = Position::Center;
    }

    /// Applies a keyboard action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Restart => self.restart(),
            Action::Cursor(code) => self.cursor = input::move_cursor(self.cursor, code),
            Action::SelectCursor => {
                self.select(self.cursor);
            }
            Action::Select(pos) => {
                self.select(pos);
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::action_for_key(key) {
            self.apply(action);
        }
    }

    /// Handles a mouse event against the layout of the last drawn frame.
    ///
    /// Only a left-button press inside a cell selects it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &BoardLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(pos) = layout.hit(mouse.column, mouse.row) {
            self.select(pos);
        }
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: Event, layout: &BoardLayout) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, layout),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::layout::Rect;
    use tictactoe_rules::Player;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_new_app_status() {
        let app = App::new();
        assert_eq!(app.status_message(), "X's turn to play");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_select_occupied_is_ignored() {
        let mut app = App::new();
        assert!(app.select(Position::Center));
        let before = app.clone();
        assert!(!app.select(Position::Center));
        assert_eq!(app, before);
    }

    #[test]
    fn test_keyboard_cursor_and_select() {
        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(app.cursor(), Position::TopLeft);

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            app.game().board().get(Position::TopLeft),
            tictactoe_rules::Square::Occupied(Player::X)
        );
        assert_eq!(app.status_message(), "O's turn to play");
    }

    #[test]
    fn test_mouse_click_selects_cell() {
        let layout = BoardLayout::new(Rect::new(0, 0, 80, 24));
        let target = layout.cell(Position::BottomRight);
        let mut app = App::new();

        app.handle_mouse(click(target.x + 2, target.y + 1), &layout);
        assert!(!app.game().board().is_empty(Position::BottomRight));
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_mouse_outside_grid_and_other_buttons_ignored() {
        let layout = BoardLayout::new(Rect::new(0, 0, 80, 24));
        let center = layout.cell(Position::Center);
        let mut app = App::new();

        app.handle_mouse(click(0, 0), &layout);
        let mut right = click(center.x + 1, center.y + 1);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(right, &layout);
        let mut up = click(center.x + 1, center.y + 1);
        up.kind = MouseEventKind::Up(MouseButton::Left);
        app.handle_mouse(up, &layout);

        assert!(app.game().history().is_empty());
    }

    #[test]
    fn test_restart_after_win() {
        let mut app = App::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ] {
            app.select(pos);
        }
        assert_eq!(app.status_message(), "X has won!");
        assert!(!app.select(Position::BottomLeft));

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.status_message(), "X's turn to play");
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit());
    }
}
