//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the main view

pub mod add_transaction;
