//! Terminal session: raw mode, the event loop, and restore on exit.

use crate::app::App;
use crate::config::Settings;
use crate::ui::{self, BoardLayout};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Puts the terminal back the way it was when dropped.
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, SetTitle(ui::TITLE))
            .context("Failed to enter alternate screen")?;
        if mouse {
            execute!(stdout, EnableMouseCapture).context("Failed to capture mouse")?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen, crossterm::cursor::Show);
        let _ = disable_raw_mode();
    }
}

/// Runs the game until the player quits.
#[instrument(skip_all, fields(mouse = *settings.mouse()))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting TicTacToe");

    let _guard = TerminalGuard::enter(*settings.mouse())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_app(
        &mut terminal,
        App::new(),
        Duration::from_millis(*settings.poll_interval_ms()),
    );
    if let Err(e) = &result {
        warn!(error = ?e, "Game loop error");
    }

    info!("Exiting TicTacToe");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    poll_interval: Duration,
) -> Result<()> {
    let mut layout = BoardLayout::default();

    while !app.should_quit() {
        terminal.draw(|f| layout = ui::draw(f, &app))?;

        if event::poll(poll_interval)? {
            app.handle_event(event::read()?, &layout);
        }
    }

    Ok(())
}
