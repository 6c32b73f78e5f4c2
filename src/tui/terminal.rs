//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;
use tracing::info;

use crate::config::settings::Settings;
use crate::error::PocketbookError;
use crate::models::{Category, Transaction};

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui, PocketbookError> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(tui_error("Failed to enable raw mode"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(tui_error("Failed to enter alternate screen"))?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(tui_error("Failed to create terminal"))
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<(), PocketbookError> {
    disable_raw_mode().map_err(tui_error("Failed to disable raw mode"))?;
    execute!(io::stdout(), LeaveAlternateScreen)
        .map_err(tui_error("Failed to leave alternate screen"))?;
    Ok(())
}

fn tui_error(context: &'static str) -> impl Fn(io::Error) -> PocketbookError {
    move |e| PocketbookError::Tui(format!("{}: {}", context, e))
}

/// Run the TUI and return the transactions submitted during the session
pub fn run_tui(settings: &Settings, categories: Vec<Category>) -> Result<Vec<Transaction>> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(settings, categories);
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));
    info!(categories = app.categories.len(), "TUI started");

    let outcome = run_loop(&mut terminal, &mut app, &events);

    // Restore even when the loop failed
    restore_terminal()?;
    outcome?;

    info!(transactions = app.transactions.len(), "TUI closed");
    Ok(app.into_transactions())
}

fn run_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        let event = events.next()?;
        handle_event(app, event)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_failures_map_to_tui_error() {
        let err = tui_error("Failed to enable raw mode")(io::Error::new(
            io::ErrorKind::Unsupported,
            "not a tty",
        ));
        assert!(matches!(err, PocketbookError::Tui(_)));
        assert_eq!(err.to_string(), "TUI error: Failed to enable raw mode: not a tty");
    }
}
