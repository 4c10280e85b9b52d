//! Tic-tac-toe board rendering.

use super::layout::BoardLayout;
use crate::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe_rules::{winning_line, Player, Position, Square};

const X_MARK: [&str; 3] = ["\\ /", " X ", "/ \\"];
const O_MARK: [&str; 3] = ["╭─╮", "│ │", "╰─╯"];

/// Renders the nine cells, the marks in them, the cursor and any winning line.
pub fn render_board(f: &mut Frame, layout: &BoardLayout, app: &App) {
    let board = app.game().board();
    let line = winning_line(board);
    let live = !app.game().is_over();

    for pos in Position::ALL {
        let area = layout.cell(pos);
        if area.is_empty() {
            continue;
        }

        let in_line = line.is_some_and(|l| l.contains(&pos));
        let border_style = if in_line {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if live && pos == app.cursor() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let (mark, mark_style) = match board.get(pos) {
            Square::Empty => (None, Style::default()),
            Square::Occupied(Player::X) => (
                Some(X_MARK),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                Some(O_MARK),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
        };
        let mark_style = if in_line {
            mark_style.bg(Color::Green).fg(Color::Black)
        } else {
            mark_style
        };

        let lines: Vec<Line> = mark
            .map(|rows| rows.iter().map(|row| Line::from(*row)).collect())
            .unwrap_or_default();
        let cell = Paragraph::new(lines)
            .style(mark_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        f.render_widget(cell, area);
    }
}
