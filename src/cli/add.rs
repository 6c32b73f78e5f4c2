//! Non-interactive add command
//!
//! Drives the same dialog as the TUI from command-line arguments, so a
//! scripted entry is validated and shaped exactly like an interactive one.

use clap::Args;

use crate::dialog::{AddTransactionDialog, Clock, FormAction, Transition};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Category, TransactionDraft, TransactionType};

/// Arguments for `pocketbook add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Transaction type (income or expense)
    #[arg(short = 't', long = "type", default_value = "expense")]
    pub kind: TransactionType,

    /// Date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Value, e.g. 42.50
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub value: String,

    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Category label ("Food 🍔") or name ("Food")
    #[arg(short, long, default_value = "")]
    pub category: String,
}

/// Turn a category argument into the label the selector would store
///
/// An exact label is kept; otherwise a unique case-insensitive name match
/// among the options of `kind` is expanded to its label. Anything else is
/// passed through unchanged.
pub fn resolve_category_arg(categories: &[Category], kind: TransactionType, arg: &str) -> String {
    let options: Vec<&Category> = categories.iter().filter(|c| c.kind == kind).collect();

    if options.iter().any(|c| c.label() == arg) {
        return arg.to_string();
    }

    let by_name: Vec<&&Category> = options
        .iter()
        .filter(|c| c.name.eq_ignore_ascii_case(arg.trim()))
        .collect();

    match by_name.as_slice() {
        [only] => only.label(),
        _ => arg.to_string(),
    }
}

/// Run the add command, returning the submitted draft
pub fn handle_add_command(
    args: AddArgs,
    categories: &[Category],
    clock: Clock,
) -> PocketbookResult<TransactionDraft> {
    let mut dialog = AddTransactionDialog::with_clock(clock);
    let category = resolve_category_arg(categories, args.kind, &args.category);

    let mut actions = vec![FormAction::Open, FormAction::SetType(args.kind)];
    if let Some(date) = args.date {
        actions.push(FormAction::SetDate(date));
    }
    actions.extend([
        FormAction::SetValue(args.value),
        FormAction::SetDescription(args.description),
        FormAction::SetCategory(category),
    ]);

    for action in actions {
        dialog.dispatch(action, categories, |_| {});
    }

    let mut submitted = None;
    match dialog.dispatch(FormAction::Submit, categories, |draft| submitted = Some(draft)) {
        Transition::Rejected(errors) => Err(PocketbookError::Validation(errors.to_string())),
        _ => submitted.ok_or_else(|| PocketbookError::Validation("Nothing was submitted".into())),
    }
}
