//! Add-transaction dialog
//!
//! Modal dialog with a type toggle, date/value/description inputs and a
//! category selector. Keys are translated into [`FormAction`]s for the
//! dialog; this module only keeps terminal concerns (focus, cursors, the
//! highlighted option).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::dialog::{FormAction, FormState, InvalidField, Selection};
use crate::models::TransactionType;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Visible rows in the category list
const CATEGORY_LIST_HEIGHT: u16 = 6;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogField {
    #[default]
    Type,
    Date,
    Value,
    Description,
    Category,
}

impl DialogField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Type => Self::Date,
            Self::Date => Self::Value,
            Self::Value => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Type,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Type => Self::Category,
            Self::Date => Self::Type,
            Self::Value => Self::Date,
            Self::Description => Self::Value,
            Self::Category => Self::Description,
        }
    }
}

/// Terminal-side state of the dialog
#[derive(Debug, Clone)]
pub struct AddTransactionView {
    /// Currently focused field
    pub focused: DialogField,

    pub date_input: TextInput,
    pub value_input: TextInput,
    pub description_input: TextInput,

    /// Highlighted row in the category list
    pub category_index: usize,
}

impl AddTransactionView {
    /// Build the view from the form, focusing the type toggle
    pub fn from_state(state: &FormState) -> Self {
        Self {
            focused: DialogField::Type,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(state.date.as_str()),
            value_input: TextInput::new()
                .label("Value")
                .placeholder("0.00")
                .content(state.value.as_str()),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("e.g. Lunch, Fuel...")
                .content(state.description.as_str()),
            category_index: 0,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.set_focus(self.focused.next());
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.set_focus(self.focused.prev());
    }

    /// Set focus to a specific field
    pub fn set_focus(&mut self, field: DialogField) {
        self.focused = field;
        self.date_input.focused = field == DialogField::Date;
        self.value_input.focused = field == DialogField::Value;
        self.description_input.focused = field == DialogField::Description;
    }

    /// The text input behind a field, if it has one
    pub fn input_mut(&mut self, field: DialogField) -> Option<&mut TextInput> {
        match field {
            DialogField::Date => Some(&mut self.date_input),
            DialogField::Value => Some(&mut self.value_input),
            DialogField::Description => Some(&mut self.description_input),
            DialogField::Type | DialogField::Category => None,
        }
    }
}

/// Render the dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 20, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                    // Type toggle
            Constraint::Length(1),                    // Spacer
            Constraint::Length(1),                    // Date
            Constraint::Length(1),                    // Value
            Constraint::Length(1),                    // Description
            Constraint::Length(1),                    // Category
            Constraint::Length(CATEGORY_LIST_HEIGHT), // Category options
            Constraint::Length(1),                    // Spacer
            Constraint::Length(1),                    // Error
            Constraint::Length(1),                    // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let state = app.dialog.state();
    let view = &app.dialog_view;

    render_type_toggle(frame, chunks[0], state.kind, view.focused == DialogField::Type);

    frame.render_widget(view.date_input.clone(), chunks[2]);
    frame.render_widget(
        view.value_input
            .clone()
            .label(format!("Value ({})", app.settings.currency_symbol))
            .invalid(state.is_invalid(InvalidField::Value)),
        chunks[3],
    );
    frame.render_widget(
        view.description_input
            .clone()
            .invalid(state.is_invalid(InvalidField::Description)),
        chunks[4],
    );

    render_category_field(frame, app, chunks[5], chunks[6]);

    if let Some(errors) = &state.errors {
        let error_line = Line::from(Span::styled(
            errors.to_string(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[8]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[9]);
}

/// Render the expense/income toggle; the active choice is filled
fn render_type_toggle(frame: &mut Frame, area: Rect, kind: TransactionType, focused: bool) {
    let button = |choice: TransactionType, color: Color| {
        let text = format!(" {} ", choice);
        if choice == kind {
            Span::styled(
                text,
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(text, Style::default().fg(Color::Gray))
        }
    };

    let marker = if focused { "▶ " } else { "  " };
    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        button(TransactionType::Expense, Color::Red),
        Span::raw("  "),
        button(TransactionType::Income, Color::Green),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the category line and the option list
fn render_category_field(frame: &mut Frame, app: &App, input_area: Rect, list_area: Rect) {
    let state = app.dialog.state();
    let focused = app.dialog_view.focused == DialogField::Category;

    let label_color = if state.is_invalid(InvalidField::Category) {
        Color::Red
    } else {
        Color::Cyan
    };
    let mut label_style = Style::default().fg(label_color);
    if focused {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![Span::styled("Category: ", label_style)];
    match app.dialog.selection(&app.categories) {
        Selection::Empty => spans.push(Span::styled(
            "Select a category",
            Style::default().fg(Color::DarkGray),
        )),
        Selection::Matched(_) => spans.push(Span::styled(
            state.category.as_str(),
            Style::default().fg(Color::Yellow),
        )),
        Selection::Unmatched => {
            spans.push(Span::styled(
                state.category.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::styled(
                format!(" (not a {} category)", state.kind.as_str()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), input_area);

    let options = app.dialog.options(&app.categories);
    if options.is_empty() {
        let hint = Paragraph::new(format!("  No {} categories", state.kind.as_str()))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(hint, list_area);
        return;
    }

    let items: Vec<ListItem> = options
        .iter()
        .map(|c| {
            let style = if c.label() == state.category {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(format!("  {}", c.option_text()), style)))
        })
        .collect();

    let mut list = List::new(items);
    let mut list_state = ListState::default();
    if focused {
        list = list
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        list_state.select(Some(app.dialog_view.category_index.min(options.len() - 1)));
    }

    frame.render_stateful_widget(list, list_area, &mut list_state);
}

/// Handle key input for the dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let focused = app.dialog_view.focused;

    match key.code {
        KeyCode::Esc => {
            app.dispatch(FormAction::Dismiss);
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.dialog_view.prev_field();
            } else {
                app.dialog_view.next_field();
            }
        }

        KeyCode::BackTab => app.dialog_view.prev_field(),

        KeyCode::Enter => {
            // On the selector, Enter first picks the highlighted option
            if focused == DialogField::Category {
                if let Some(label) = highlighted_label(app) {
                    if label != app.dialog.state().category {
                        app.dispatch(FormAction::SetCategory(label));
                        return true;
                    }
                }
            }
            app.dispatch(FormAction::Submit);
        }

        KeyCode::Up if focused == DialogField::Category => {
            app.dialog_view.category_index = app.dialog_view.category_index.saturating_sub(1);
        }

        KeyCode::Down if focused == DialogField::Category => {
            let count = app.dialog.options(&app.categories).len();
            if app.dialog_view.category_index + 1 < count {
                app.dialog_view.category_index += 1;
            }
        }

        KeyCode::Left if focused == DialogField::Type => set_type(app, TransactionType::Expense),
        KeyCode::Right if focused == DialogField::Type => set_type(app, TransactionType::Income),
        KeyCode::Char(' ') if focused == DialogField::Type => {
            app.dispatch(FormAction::ToggleType);
            app.dialog_view.category_index = 0;
        }
        KeyCode::Char('e') | KeyCode::Char('E') if focused == DialogField::Type => {
            set_type(app, TransactionType::Expense)
        }
        KeyCode::Char('i') | KeyCode::Char('I') if focused == DialogField::Type => {
            set_type(app, TransactionType::Income)
        }

        KeyCode::Char(' ') if focused == DialogField::Category => {
            if let Some(label) = highlighted_label(app) {
                app.dispatch(FormAction::SetCategory(label));
            }
        }
        KeyCode::Backspace | KeyCode::Delete if focused == DialogField::Category => {
            app.dispatch(FormAction::SetCategory(String::new()));
        }

        KeyCode::Char(c) => edit_text(app, |input| input.insert(c)),
        KeyCode::Backspace => edit_text(app, TextInput::backspace),
        KeyCode::Delete => edit_text(app, TextInput::delete),
        KeyCode::Left => edit_text(app, TextInput::move_left),
        KeyCode::Right => edit_text(app, TextInput::move_right),
        KeyCode::Home => edit_text(app, TextInput::move_start),
        KeyCode::End => edit_text(app, TextInput::move_end),

        _ => return false,
    }

    true
}

fn set_type(app: &mut App, kind: TransactionType) {
    if app.dialog.state().kind != kind {
        app.dispatch(FormAction::SetType(kind));
        app.dialog_view.category_index = 0;
    }
}

/// Label of the highlighted option, if the list is not empty
fn highlighted_label(app: &App) -> Option<String> {
    let options = app.dialog.options(&app.categories);
    let idx = app.dialog_view.category_index.min(options.len().saturating_sub(1));
    options.get(idx).map(|c| c.label())
}

/// Apply an edit to the focused text input and push its content to the form
fn edit_text(app: &mut App, edit: impl FnOnce(&mut TextInput)) {
    let field = app.dialog_view.focused;
    let Some(input) = app.dialog_view.input_mut(field) else {
        return;
    };

    let before = input.value().to_string();
    edit(input);
    if input.value() == before {
        return;
    }

    let value = input.value().to_string();
    let action = match field {
        DialogField::Date => FormAction::SetDate(value),
        DialogField::Value => FormAction::SetValue(value),
        DialogField::Description => FormAction::SetDescription(value),
        DialogField::Type | DialogField::Category => return,
    };
    app.dispatch(action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::dialog::AddTransactionDialog;
    use crate::models::Category;
    use chrono::NaiveDate;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new("Food", "🍔", TransactionType::Expense),
            Category::new("Salary", "💰", TransactionType::Income),
            Category::new("Transport", "🚗", TransactionType::Expense),
        ]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn open_app(settings: &Settings) -> App<'_> {
        let mut app =
            App::with_dialog(settings, categories(), AddTransactionDialog::with_clock(fixed_day));
        app.open_dialog();
        app
    }

    #[test]
    fn test_field_cycle() {
        let mut field = DialogField::Type;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, DialogField::Type);
        assert_eq!(DialogField::Type.prev(), DialogField::Category);
    }

    #[test]
    fn test_full_entry_by_keyboard() {
        let settings = Settings::default();
        let mut app = open_app(&settings);

        handle_key(&mut app, key(KeyCode::Tab)); // Date
        handle_key(&mut app, key(KeyCode::Tab)); // Value
        type_text(&mut app, "42.50");
        handle_key(&mut app, key(KeyCode::Tab)); // Description
        type_text(&mut app, "Lunch");
        handle_key(&mut app, key(KeyCode::Tab)); // Category
        handle_key(&mut app, key(KeyCode::Enter)); // pick "Food 🍔"
        assert_eq!(app.dialog.state().category, "Food 🍔");
        assert!(app.has_dialog());

        handle_key(&mut app, key(KeyCode::Enter)); // submit

        assert!(!app.has_dialog());
        assert_eq!(app.transactions.len(), 1);
        let draft = &app.transactions[0].draft;
        assert_eq!(draft.date, "2024-03-01");
        assert_eq!(draft.value, 42.5);
        assert_eq!(draft.description, "Lunch");
        assert_eq!(draft.category, "Food 🍔");
        assert_eq!(draft.kind, TransactionType::Expense);
    }

    #[test]
    fn test_category_navigation_follows_type() {
        let settings = Settings::default();
        let mut app = open_app(&settings);

        handle_key(&mut app, key(KeyCode::BackTab)); // Category
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Down)); // clamped at last expense option
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.dialog.state().category, "Transport 🚗");

        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.dialog.state().category, "");
    }

    #[test]
    fn test_type_toggle_keeps_typed_fields() {
        let settings = Settings::default();
        let mut app = open_app(&settings);

        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Tab));
        type_text(&mut app, "10");
        handle_key(&mut app, key(KeyCode::BackTab));
        handle_key(&mut app, key(KeyCode::BackTab)); // Type
        handle_key(&mut app, key(KeyCode::Right));

        assert_eq!(app.dialog.state().kind, TransactionType::Income);
        assert_eq!(app.dialog.state().value, "10");
        assert_eq!(app.dialog_view.value_input.value(), "10");
    }

    #[test]
    fn test_enter_after_reopen_keeps_chosen_category() {
        let settings = Settings::default();
        let mut app = open_app(&settings);

        handle_key(&mut app, key(KeyCode::BackTab)); // Category
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Tab)); // Type
        handle_key(&mut app, key(KeyCode::Tab)); // Date
        handle_key(&mut app, key(KeyCode::Tab)); // Value
        type_text(&mut app, "7");
        handle_key(&mut app, key(KeyCode::Tab)); // Description
        type_text(&mut app, "Bus");
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.has_dialog());

        app.open_dialog();
        handle_key(&mut app, key(KeyCode::BackTab)); // Category
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.has_dialog());
        assert_eq!(app.transactions.len(), 1);
        assert_eq!(app.transactions[0].draft.category, "Transport 🚗");
        assert_eq!(app.transactions[0].draft.description, "Bus");
    }

    #[test]
    fn test_enter_on_empty_form_shows_errors() {
        let settings = Settings::default();
        let mut app = open_app(&settings);

        handle_key(&mut app, key(KeyCode::Enter));

        assert!(app.has_dialog());
        assert!(app.transactions.is_empty());
        let errors = app.dialog.state().errors.clone().unwrap();
        assert_eq!(errors.fields().len(), 3);
    }

    #[test]
    fn test_escape_closes_without_submitting() {
        let settings = Settings::default();
        let mut app = open_app(&settings);

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.has_dialog());
        assert!(app.transactions.is_empty());
    }

    #[test]
    fn test_date_edit_reaches_form() {
        let settings = Settings::default();
        let mut app = open_app(&settings);

        handle_key(&mut app, key(KeyCode::Tab)); // Date, cursor at end
        handle_key(&mut app, key(KeyCode::Backspace));
        type_text(&mut app, "5");
        assert_eq!(app.dialog.state().date, "2024-03-05");
    }
}
