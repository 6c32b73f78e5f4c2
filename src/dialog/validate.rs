//! Submit-time validation and draft construction
//!
//! Only emptiness is checked. An unparseable value is not an error: it
//! becomes NaN in the draft and the caller decides what to do with it.

use std::fmt;

use super::form::FormState;
use crate::models::TransactionDraft;

/// A required field that was left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InvalidField {
    Value,
    Description,
    Category,
}

impl InvalidField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Description => "description",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of fields that blocked a submission, in form order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    fields: Vec<InvalidField>,
}

impl FormErrors {
    pub fn fields(&self) -> &[InvalidField] {
        &self.fields
    }

    pub fn contains(&self, field: InvalidField) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Forget a field once the user has edited it
    pub fn clear(&mut self, field: InvalidField) {
        self.fields.retain(|f| *f != field);
    }

    fn push(&mut self, field: InvalidField) {
        if !self.fields.contains(&field) {
            self.fields.push(field);
            self.fields.sort();
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(InvalidField::name).collect();
        write!(f, "Required: {}", names.join(", "))
    }
}

impl std::error::Error for FormErrors {}

/// Check that value, description and category are non-empty
///
/// Date and type always hold a value and are never checked.
pub fn validate(form: &FormState) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    if form.value.is_empty() {
        errors.push(InvalidField::Value);
    }
    if form.description.is_empty() {
        errors.push(InvalidField::Description);
    }
    if form.category.is_empty() {
        errors.push(InvalidField::Category);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse the raw value string, yielding NaN when it is not a number
///
/// Plain decimal notation only: no currency symbols, no thousands separators,
/// and no spelled-out `inf`/`infinity`/`nan`.
pub fn parse_value(raw: &str) -> f64 {
    let raw = raw.trim();
    if !raw.bytes().any(|b| b.is_ascii_digit()) {
        return f64::NAN;
    }
    raw.parse::<f64>().unwrap_or(f64::NAN)
}

/// Validate the form and build the draft handed to the caller
pub fn build_draft(form: &FormState) -> Result<TransactionDraft, FormErrors> {
    validate(form)?;

    Ok(TransactionDraft {
        date: form.date.clone(),
        value: parse_value(&form.value),
        description: form.description.clone(),
        category: form.category.clone(),
        kind: form.kind,
    })
}
