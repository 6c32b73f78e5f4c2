//! Dialog controller
//!
//! Owns the form state and a clock, applies actions, and hands accepted
//! drafts to the caller's `on_add` callback.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::filter::{filter_categories, resolve_label, selection, Selection};
use super::form::{reduce, FormAction, FormState, Transition};
use crate::models::{Category, TransactionDraft};

/// Source of "today" for the default date
pub type Clock = fn() -> NaiveDate;

/// Today's date in the local timezone
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// The add-transaction dialog
#[derive(Debug, Clone)]
pub struct AddTransactionDialog {
    state: FormState,
    clock: Clock,
}

impl Default for AddTransactionDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddTransactionDialog {
    /// Create a closed dialog dated today (local time)
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    /// Create a closed dialog using a custom clock
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            state: FormState::new(clock()),
            clock,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Selector options for the current type
    pub fn options<'c>(&self, categories: &'c [Category]) -> Vec<&'c Category> {
        filter_categories(categories, self.state.kind)
    }

    /// Where the stored category sits among the current options
    pub fn selection(&self, categories: &[Category]) -> Selection {
        selection(&self.options(categories), &self.state.category)
    }

    /// Apply an action; on an accepted submission, call `on_add` once with the draft
    pub fn dispatch<F>(
        &mut self,
        action: FormAction,
        categories: &[Category],
        on_add: F,
    ) -> Transition
    where
        F: FnOnce(TransactionDraft),
    {
        debug!(?action, "add-transaction dialog action");

        let transition = reduce(&mut self.state, action, (self.clock)());

        match &transition {
            Transition::Submitted(draft) => {
                check_category_label(categories, draft);
                info!(
                    kind = draft.kind.as_str(),
                    date = %draft.date,
                    value = draft.value,
                    "transaction submitted"
                );
                on_add(draft.clone());
            }
            Transition::Rejected(errors) => {
                debug!(%errors, "submission rejected");
            }
            Transition::Updated | Transition::Unchanged => {}
        }

        transition
    }
}

/// The draft carries a label, not an id; warn when the label does not map
/// back to exactly one category of the submitted type.
fn check_category_label(categories: &[Category], draft: &TransactionDraft) {
    let matches = resolve_label(categories, &draft.category);

    match matches.as_slice() {
        [] => warn!(category = %draft.category, "submitted category is not in the category list"),
        [only] if only.kind != draft.kind => warn!(
            category = %draft.category,
            category_type = only.kind.as_str(),
            transaction_type = draft.kind.as_str(),
            "submitted category belongs to the other transaction type"
        ),
        [_] => {}
        many => warn!(
            category = %draft.category,
            count = many.len(),
            "submitted category label matches several categories"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

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

    fn dialog() -> AddTransactionDialog {
        AddTransactionDialog::with_clock(fixed_day)
    }

    fn apply(dialog: &mut AddTransactionDialog, categories: &[Category], actions: Vec<FormAction>) {
        for action in actions {
            dialog.dispatch(action, categories, |_| panic!("unexpected submission"));
        }
    }

    #[test]
    fn test_starts_closed_with_clock_date() {
        let dialog = dialog();
        assert!(!dialog.is_open());
        assert_eq!(dialog.state().date, "2024-03-01");
    }

    #[test]
    fn test_submit_invokes_callback_once() {
        let categories = categories();
        let mut dialog = dialog();
        apply(
            &mut dialog,
            &categories,
            vec![
                FormAction::Open,
                FormAction::SetValue("42.50".into()),
                FormAction::SetDescription("Lunch".into()),
                FormAction::SetCategory("Food 🍔".into()),
            ],
        );

        let mut received = Vec::new();
        let transition = dialog.dispatch(FormAction::Submit, &categories, |d| received.push(d));

        assert!(matches!(transition, Transition::Submitted(_)));
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            TransactionDraft {
                date: "2024-03-01".into(),
                value: 42.5,
                description: "Lunch".into(),
                category: "Food 🍔".into(),
                kind: TransactionType::Expense,
            }
        );
        assert!(!dialog.is_open());
        assert!(dialog.state().value.is_empty());
    }

    #[test]
    fn test_incomplete_form_never_invokes_callback() {
        let categories = categories();
        let cases = [
            ("", "Lunch", "Food 🍔"),
            ("10", "", "Food 🍔"),
            ("10", "Lunch", ""),
        ];

        for (value, description, category) in cases {
            let mut dialog = dialog();
            apply(
                &mut dialog,
                &categories,
                vec![
                    FormAction::Open,
                    FormAction::SetValue(value.into()),
                    FormAction::SetDescription(description.into()),
                    FormAction::SetCategory(category.into()),
                ],
            );

            let mut called = false;
            let transition = dialog.dispatch(FormAction::Submit, &categories, |_| called = true);

            assert!(!called);
            assert!(matches!(transition, Transition::Rejected(_)));
            assert!(dialog.is_open());
        }
    }

    #[test]
    fn test_options_follow_type() {
        let categories = categories();
        let mut dialog = dialog();
        apply(&mut dialog, &categories, vec![FormAction::Open]);

        let names: Vec<_> = dialog.options(&categories).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport"]);

        apply(
            &mut dialog,
            &categories,
            vec![
                FormAction::SetCategory("Transport 🚗".into()),
                FormAction::SetType(TransactionType::Income),
            ],
        );
        let names: Vec<_> = dialog.options(&categories).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Salary"]);
        assert_eq!(dialog.state().category, "Transport 🚗");
        assert_eq!(dialog.selection(&categories), Selection::Unmatched);
    }

    #[test]
    fn test_mismatched_category_is_still_forwarded() {
        let categories = categories();
        let mut dialog = dialog();
        apply(
            &mut dialog,
            &categories,
            vec![
                FormAction::Open,
                FormAction::SetCategory("Food 🍔".into()),
                FormAction::SetType(TransactionType::Income),
                FormAction::SetValue("5".into()),
                FormAction::SetDescription("Refund".into()),
            ],
        );

        let mut received = None;
        dialog.dispatch(FormAction::Submit, &categories, |d| received = Some(d));

        let draft = received.unwrap();
        assert_eq!(draft.kind, TransactionType::Income);
        assert_eq!(draft.category, "Food 🍔");
    }
}
