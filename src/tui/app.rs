//! Application state for the TUI
//!
//! The App is the dialog's caller: it supplies the categories, receives
//! submitted drafts, assigns identifiers and keeps the session's
//! transactions in memory.

use crate::config::settings::Settings;
use crate::dialog::{AddTransactionDialog, FormAction, Selection, Transition};
use crate::models::{Category, Transaction};

use super::dialogs::add_transaction::AddTransactionView;

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Categories offered by the dialog
    pub categories: Vec<Category>,

    /// Transactions submitted during this session
    pub transactions: Vec<Transaction>,

    /// Selected row in the transaction list
    pub selected_index: usize,

    /// The add-transaction dialog
    pub dialog: AddTransactionDialog,

    /// Terminal-side editing state of the dialog
    pub dialog_view: AddTransactionView,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, categories: Vec<Category>) -> Self {
        Self::with_dialog(settings, categories, AddTransactionDialog::new())
    }

    /// Create an App around an existing dialog (e.g. one with a fixed clock)
    pub fn with_dialog(
        settings: &'a Settings,
        categories: Vec<Category>,
        dialog: AddTransactionDialog,
    ) -> Self {
        let dialog_view = AddTransactionView::from_state(dialog.state());
        let mut app = Self {
            settings,
            categories,
            transactions: Vec::new(),
            selected_index: 0,
            dialog,
            dialog_view,
            status_message: None,
            should_quit: false,
        };
        app.sync_dialog_view();
        app
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Check if the dialog is showing
    pub fn has_dialog(&self) -> bool {
        self.dialog.is_open()
    }

    /// Open the add-transaction dialog
    pub fn open_dialog(&mut self) {
        self.dispatch(FormAction::Open);
        self.sync_dialog_view();
    }

    /// Rebuild the dialog view from the form, highlighting the stored category
    fn sync_dialog_view(&mut self) {
        let mut view = AddTransactionView::from_state(self.dialog.state());
        if let Selection::Matched(index) = self.dialog.selection(&self.categories) {
            view.category_index = index;
        }
        self.dialog_view = view;
    }

    /// Forward an action to the dialog, recording any submitted transaction
    pub fn dispatch(&mut self, action: FormAction) -> Transition {
        let transactions = &mut self.transactions;
        let transition = self.dialog.dispatch(action, &self.categories, |draft| {
            transactions.push(Transaction::from_draft(draft));
        });

        if let Transition::Submitted(draft) = &transition {
            self.set_status(format!("Added {} '{}'", draft.kind, draft.description));
            self.selected_index = self.transactions.len().saturating_sub(1);
            self.sync_dialog_view();
        }

        transition
    }

    /// Move selection up in the transaction list
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down in the transaction list
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.transactions.len() {
            self.selected_index += 1;
        }
    }

    /// Consume the app, yielding the session's transactions
    pub fn into_transactions(self) -> Vec<Transaction> {
        self.transactions
    }
}
