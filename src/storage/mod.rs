//! Storage layer for Pocketbook
//!
//! JSON files with atomic writes. Only the caller's inputs live on disk;
//! submitted transactions are never persisted.

pub mod categories;
pub mod file_io;

pub use categories::{load_categories, seed_default_categories};
pub use file_io::{read_json_optional, write_json_atomic};
