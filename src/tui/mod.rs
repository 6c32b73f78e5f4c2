//! Terminal User Interface module
//!
//! A ratatui front end hosting the add-transaction dialog: a header with the
//! trigger button, the transactions submitted this session, and a status bar.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
