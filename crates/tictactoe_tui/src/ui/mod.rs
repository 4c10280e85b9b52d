//! UI rendering using ratatui.

mod board;
mod layout;

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe_rules::GameStatus;

pub use board::render_board;
pub use layout::BoardLayout;

/// Window title.
pub const TITLE: &str = "TicTacToe";

const HELP: &str = "Click a cell | Arrows + Enter | 1-9 | R: New game | Q: Quit";

/// Draws the main UI and returns where the cells ended up.
pub fn draw(f: &mut Frame, app: &App) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let layout = BoardLayout::new(chunks[1]);
    render_board(f, &layout, app);

    let status_style = match app.status() {
        GameStatus::InProgress(_) => Style::default().fg(Color::Yellow),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);

    layout
}
