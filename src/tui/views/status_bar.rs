//! Status bar view
//!
//! Shows the session balance, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Sum of signed values, skipping amounts that are not numbers
pub fn session_balance(app: &App) -> f64 {
    app.transactions
        .iter()
        .map(|t| t.signed_value())
        .filter(|v| !v.is_nan())
        .sum()
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let balance = session_balance(app);
    let balance_color = if balance < 0.0 { Color::Red } else { Color::Green };

    let mut spans = vec![
        Span::styled(
            format!(" {} txn ", app.transactions.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("│ "),
        Span::styled("Bal: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{}{:.2}", app.settings.currency_symbol, balance),
            Style::default().fg(balance_color).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = if app.has_dialog() {
        " Esc:Close "
    } else {
        " a:Add  j/k:Move  q:Quit "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
