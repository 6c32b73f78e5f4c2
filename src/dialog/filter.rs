//! Category filtering for the selector
//!
//! The selector only offers categories of the current transaction type.
//! The stored selection is a label, so it may point at nothing in the
//! current option list (for instance after switching type).

use crate::models::{Category, TransactionType};

/// Categories whose type equals `kind`, in the caller's order
pub fn filter_categories(categories: &[Category], kind: TransactionType) -> Vec<&Category> {
    categories.iter().filter(|c| c.kind == kind).collect()
}

/// Every category (of either type) whose label equals `label`
pub fn resolve_label<'c>(categories: &'c [Category], label: &str) -> Vec<&'c Category> {
    categories.iter().filter(|c| c.label() == label).collect()
}

/// How the stored category label relates to the current options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing chosen yet
    Empty,
    /// The label matches the option at this index
    Matched(usize),
    /// A label is stored but no current option carries it
    Unmatched,
}

/// Locate the stored label among the options
pub fn selection(options: &[&Category], label: &str) -> Selection {
    if label.is_empty() {
        return Selection::Empty;
    }

    options
        .iter()
        .position(|c| c.label() == label)
        .map(Selection::Matched)
        .unwrap_or(Selection::Unmatched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("Food", "🍔", TransactionType::Expense),
            Category::new("Salary", "💰", TransactionType::Income),
            Category::new("Transport", "🚗", TransactionType::Expense),
            Category::new("Freelance", "💻", TransactionType::Income),
            Category::new("Health", "💊", TransactionType::Expense),
        ]
    }

    fn names(options: &[&Category]) -> Vec<String> {
        options.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_filter_keeps_caller_order() {
        let categories = categories();

        let expense = filter_categories(&categories, TransactionType::Expense);
        assert_eq!(names(&expense), vec!["Food", "Transport", "Health"]);

        let income = filter_categories(&categories, TransactionType::Income);
        assert_eq!(names(&income), vec!["Salary", "Freelance"]);
    }

    #[test]
    fn test_filter_partitions_the_list() {
        let categories = categories();
        let expense = filter_categories(&categories, TransactionType::Expense);
        let income = filter_categories(&categories, TransactionType::Income);

        assert_eq!(expense.len() + income.len(), categories.len());
        assert!(expense.iter().all(|c| c.kind == TransactionType::Expense));
        assert!(income.iter().all(|c| c.kind == TransactionType::Income));
    }

    #[test]
    fn test_filter_empty_list() {
        assert!(filter_categories(&[], TransactionType::Income).is_empty());
    }

    #[test]
    fn test_selection_states() {
        let categories = categories();
        let expense = filter_categories(&categories, TransactionType::Expense);

        assert_eq!(selection(&expense, ""), Selection::Empty);
        assert_eq!(selection(&expense, "Transport 🚗"), Selection::Matched(1));
        assert_eq!(selection(&expense, "Salary 💰"), Selection::Unmatched);
    }

    #[test]
    fn test_resolve_label_finds_duplicates() {
        let mut categories = categories();
        categories.push(Category::new("Food", "🍔", TransactionType::Income));

        assert_eq!(resolve_label(&categories, "Food 🍔").len(), 2);
        assert_eq!(resolve_label(&categories, "Salary 💰").len(), 1);
        assert!(resolve_label(&categories, "Rent 🏠").is_empty());
    }
}
