//! Pocketbook - record income and expense transactions from the terminal
//!
//! The heart of the crate is the add-transaction dialog in [`dialog`]: a
//! single form-state record, a reducer over user actions, a category filter
//! and a submit step that hands a [`models::TransactionDraft`] to a
//! caller-supplied callback. It does not know about terminals; [`tui`]
//! renders it with ratatui and [`cli`] drives it from arguments.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-based tracing setup
//! - `models`: Categories, drafts and recorded transactions
//! - `storage`: JSON file access for categories
//! - `dialog`: The add-transaction dialog (state, reducer, filter, validation)
//! - `display`: Table and JSON output
//! - `cli`: Command handlers
//! - `tui`: Terminal front end
//!
//! # Example
//!
//! ```rust
//! use pocketbook::dialog::{AddTransactionDialog, FormAction};
//! use pocketbook::models::{Category, TransactionType};
//!
//! let categories = vec![Category::new("Food", "🍔", TransactionType::Expense)];
//! let mut dialog = AddTransactionDialog::new();
//! let mut added = Vec::new();
//!
//! for action in [
//!     FormAction::Open,
//!     FormAction::SetValue("42.50".into()),
//!     FormAction::SetDescription("Lunch".into()),
//!     FormAction::SetCategory("Food 🍔".into()),
//!     FormAction::Submit,
//! ] {
//!     dialog.dispatch(action, &categories, |draft| added.push(draft));
//! }
//!
//! assert_eq!(added.len(), 1);
//! assert_eq!(added[0].value, 42.5);
//! assert!(!dialog.is_open());
//! ```

pub mod cli;
pub mod config;
pub mod dialog;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod tui;

pub use error::PocketbookError;
