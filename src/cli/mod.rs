//! CLI command handlers
//!
//! Bridges clap argument parsing with the dialog and display layers.

pub mod add;
pub mod category;

pub use add::{handle_add_command, AddArgs};
pub use category::{handle_category_command, CategoryArgs};
