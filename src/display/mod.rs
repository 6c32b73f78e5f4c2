//! Display formatting for terminal output
//!
//! Tables and JSON lines printed by the CLI commands.

pub mod category;
pub mod transaction;

pub use category::format_category_table;
pub use transaction::{format_transaction_json_lines, format_transaction_table, format_value};
