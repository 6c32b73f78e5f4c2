//! TUI Views module
//!
//! Header with the trigger button, the transaction list and the status bar,
//! with the dialog drawn on top when it is open.

pub mod header;
pub mod status_bar;
pub mod transactions;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    transactions::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        dialogs::add_transaction::render(frame, app);
    }
}
