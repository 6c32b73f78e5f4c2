//! Transaction display formatting
//!
//! Renders the transactions recorded during a session for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Transaction, TransactionType};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Format a value with its currency symbol; expenses get a minus sign
pub fn format_value(value: f64, kind: TransactionType, currency_symbol: &str) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = match kind {
        TransactionType::Expense => "-",
        TransactionType::Income => "+",
    };
    format!("{}{}{:.2}", sign, currency_symbol, value)
}

/// Format transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.draft.date.clone(),
        kind: txn.draft.kind.to_string(),
        description: txn.draft.description.clone(),
        category: txn.draft.category.clone(),
        value: format_value(txn.draft.value, txn.draft.kind, currency_symbol),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format transactions as JSON lines
pub fn format_transaction_json_lines(
    transactions: &[Transaction],
) -> Result<String, serde_json::Error> {
    let lines = transactions
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}
