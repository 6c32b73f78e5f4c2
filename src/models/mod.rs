//! Core data models for Pocketbook
//!
//! Categories supplied by the caller, the draft produced by the dialog, and
//! the recorded transaction.

pub mod category;
pub mod ids;
pub mod transaction;

pub use category::{default_categories, Category};
pub use ids::{CategoryId, TransactionId};
pub use transaction::{Transaction, TransactionDraft, TransactionType};
