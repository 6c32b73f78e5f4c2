//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format categories as a table, in the order given
pub fn format_category_table(categories: &[&Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        label: c.label(),
        kind: c.kind.to_string(),
        id: c.id.to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    #[test]
    fn test_table_lists_labels() {
        let food = Category::new("Food", "🍔", TransactionType::Expense);
        let salary = Category::new("Salary", "💰", TransactionType::Income);

        let table = format_category_table(&[&food, &salary]);
        assert!(table.contains("Food 🍔"));
        assert!(table.contains("Income"));
        assert!(table.find("Food").unwrap() < table.find("Salary").unwrap());
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_category_table(&[]), "No categories found.");
    }
}
