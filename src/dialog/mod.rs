//! The add-transaction dialog, independent of any UI toolkit
//!
//! - `form`: state record, actions and the reducer
//! - `filter`: category options for the selected type
//! - `validate`: required-field checks and draft construction
//! - `controller`: the dialog object callers hold, wiring in `on_add`

pub mod controller;
pub mod filter;
pub mod form;
pub mod validate;

pub use controller::{local_today, AddTransactionDialog, Clock};
pub use filter::{filter_categories, resolve_label, Selection};
pub use form::{reduce, FormAction, FormState, Transition};
pub use validate::{build_draft, parse_value, validate, FormErrors, InvalidField};
