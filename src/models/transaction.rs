//! Transaction models
//!
//! [`TransactionDraft`] is what the add-transaction dialog hands to its
//! caller. The caller turns it into a [`Transaction`] by assigning an id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;

/// Whether money comes in or goes out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// The other type
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Lowercase tag as used in files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "unknown transaction type '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// A transaction as submitted by the dialog, without an identifier
///
/// `category` is the selector label (`"<name> <emoji>"`), not a category id.
/// `value` is NaN when the typed amount was not a number; JSON output
/// renders that as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// Calendar date as typed, normally `YYYY-MM-DD`
    pub date: String,

    /// Parsed amount
    pub value: f64,

    /// Free-text description
    pub description: String,

    /// Category label
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// A transaction recorded by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by the caller
    pub id: TransactionId,

    #[serde(flatten)]
    pub draft: TransactionDraft,

    /// When the caller recorded the transaction
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Record a draft under a fresh identifier
    pub fn from_draft(draft: TransactionDraft) -> Self {
        Self {
            id: TransactionId::new(),
            draft,
            created_at: Utc::now(),
        }
    }

    /// Signed amount: negative for expenses
    pub fn signed_value(&self) -> f64 {
        match self.draft.kind {
            TransactionType::Income => self.draft.value,
            TransactionType::Expense => -self.draft.value,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} ({})",
            self.draft.date, self.draft.description, self.draft.value, self.draft.category
        )
    }
}
