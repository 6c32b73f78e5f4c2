//! Form state and its transitions
//!
//! The whole dialog is one [`FormState`] record. Every user interaction is a
//! [`FormAction`] applied by [`reduce`], which reports what happened as a
//! [`Transition`]. Nothing here knows about terminals or key events.

use chrono::NaiveDate;

use super::validate::{build_draft, FormErrors, InvalidField};
use crate::models::{TransactionDraft, TransactionType};

/// ISO calendar date, as stored in the date field
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Everything the dialog remembers between interactions
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Selected transaction type
    pub kind: TransactionType,

    /// Date string, `YYYY-MM-DD` unless edited otherwise
    pub date: String,

    /// Raw value as typed; parsed only on submit
    pub value: String,

    /// Free-text description
    pub description: String,

    /// Selected category label (`"<name> <emoji>"`), empty when unset
    pub category: String,

    /// Whether the dialog is visible
    pub open: bool,

    /// Fields that blocked the last submission
    pub errors: Option<FormErrors>,
}

impl FormState {
    /// Defaults: expense, today's date, empty fields, closed
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: TransactionType::Expense,
            date: iso_date(today),
            value: String::new(),
            description: String::new(),
            category: String::new(),
            open: false,
            errors: None,
        }
    }

    /// Return every field to its default; visibility is left alone
    pub fn reset(&mut self, today: NaiveDate) {
        let open = self.open;
        *self = Self::new(today);
        self.open = open;
    }

    /// Whether the last submission flagged this field
    pub fn is_invalid(&self, field: InvalidField) -> bool {
        self.errors.as_ref().is_some_and(|e| e.contains(field))
    }

    fn clear_error(&mut self, field: InvalidField) {
        if let Some(errors) = self.errors.as_mut() {
            errors.clear(field);
            if errors.is_empty() {
                self.errors = None;
            }
        }
    }
}

/// A user interaction with the dialog
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Trigger pressed
    Open,
    /// Esc or other native dismissal; fields are kept
    Dismiss,
    SetType(TransactionType),
    ToggleType,
    SetDate(String),
    SetValue(String),
    SetDescription(String),
    SetCategory(String),
    Submit,
}

/// Outcome of applying an action
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The action had no effect
    Unchanged,
    /// State changed; nothing to report to the caller
    Updated,
    /// Submission accepted: the draft goes to the caller, the form is reset
    /// and closed
    Submitted(TransactionDraft),
    /// Submission refused; the dialog stays open with these errors recorded
    Rejected(FormErrors),
}

/// Apply one action to the form
///
/// Field edits and submissions only apply while the dialog is open.
/// Reset happens in exactly one place: an accepted submission.
pub fn reduce(state: &mut FormState, action: FormAction, today: NaiveDate) -> Transition {
    if !state.open && action != FormAction::Open {
        return Transition::Unchanged;
    }

    match action {
        FormAction::Open => {
            if state.open {
                return Transition::Unchanged;
            }
            state.open = true;
        }
        FormAction::Dismiss => {
            state.open = false;
            state.errors = None;
        }
        FormAction::SetType(kind) => {
            if state.kind == kind {
                return Transition::Unchanged;
            }
            state.kind = kind;
        }
        FormAction::ToggleType => {
            state.kind = state.kind.toggled();
        }
        FormAction::SetDate(date) => {
            state.date = date;
        }
        FormAction::SetValue(value) => {
            state.value = value;
            state.clear_error(InvalidField::Value);
        }
        FormAction::SetDescription(description) => {
            state.description = description;
            state.clear_error(InvalidField::Description);
        }
        FormAction::SetCategory(category) => {
            state.category = category;
            state.clear_error(InvalidField::Category);
        }
        FormAction::Submit => {
            return match build_draft(state) {
                Ok(draft) => {
                    state.reset(today);
                    state.open = false;
                    Transition::Submitted(draft)
                }
                Err(errors) => {
                    state.errors = Some(errors.clone());
                    Transition::Rejected(errors)
                }
            };
        }
    }

    Transition::Updated
}
