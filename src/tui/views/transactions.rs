//! Transaction list view
//!
//! Shows the transactions submitted during this session, newest last

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_value;
use crate::models::TransactionType;
use crate::tui::app::App;

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Transactions ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.transactions.is_empty() {
        let text = Paragraph::new("No transactions. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(9),  // Type
        Constraint::Min(16),    // Description
        Constraint::Length(18), // Category
        Constraint::Length(14), // Value
    ];

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Type"),
        Cell::from("Description"),
        Cell::from("Category"),
        Cell::from("Value"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = app
        .transactions
        .iter()
        .map(|txn| {
            let draft = &txn.draft;
            let value_style = match draft.kind {
                TransactionType::Expense => Style::default().fg(Color::Red),
                TransactionType::Income => Style::default().fg(Color::Green),
            };

            Row::new(vec![
                Cell::from(draft.date.clone()),
                Cell::from(draft.kind.to_string()),
                Cell::from(truncate_string(&draft.description, 30)),
                Cell::from(truncate_string(&draft.category, 18)),
                Cell::from(format_value(draft.value, draft.kind, &app.settings.currency_symbol))
                    .style(value_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Lunch", 10), "Lunch");
        assert_eq!(truncate_string("Groceries for the week", 10), "Groceries…");
        assert_eq!(truncate_string("Almoço de domingo", 6), "Almoç…");
    }
}
