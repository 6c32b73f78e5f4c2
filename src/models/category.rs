//! Category model
//!
//! Categories are supplied by the caller and are read-only for the dialog.
//! Each one belongs to exactly one [`TransactionType`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// A transaction category (e.g. "Food 🍔" for expenses, "Salary 💰" for income)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier; hand-written files may omit it
    #[serde(default)]
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Emoji or icon glyph
    #[serde(default)]
    pub emoji: String,

    /// Whether this category applies to income or expenses
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Category {
    /// Create a new category with a fresh identifier
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, kind: TransactionType) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            emoji: emoji.into(),
            kind,
        }
    }

    /// The value stored by the category selector: `"<name> <emoji>"`
    ///
    /// Two categories sharing name and emoji produce the same label, so a
    /// label does not identify a category on its own.
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.emoji)
    }

    /// Text shown in the selector list: `"<emoji> <name>"`
    pub fn option_text(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The category set used when no categories file exists
pub fn default_categories() -> Vec<Category> {
    use TransactionType::{Expense, Income};

    [
        ("Salary", "💰", Income),
        ("Freelance", "💻", Income),
        ("Investments", "📈", Income),
        ("Food", "🍔", Expense),
        ("Transport", "🚗", Expense),
        ("Housing", "🏠", Expense),
        ("Health", "💊", Expense),
        ("Leisure", "🎮", Expense),
        ("Education", "📚", Expense),
    ]
    .into_iter()
    .map(|(name, emoji, kind)| Category::new(name, emoji, kind))
    .collect()
}
