//! Category CLI commands

use clap::Args;

use crate::dialog::filter_categories;
use crate::display::format_category_table;
use crate::models::{Category, TransactionType};

/// Arguments for `pocketbook categories`
#[derive(Args, Debug)]
pub struct CategoryArgs {
    /// Only list categories of this type
    #[arg(short = 't', long = "type")]
    pub kind: Option<TransactionType>,
}

/// Render the category listing
pub fn handle_category_command(args: &CategoryArgs, categories: &[Category]) -> String {
    let selected: Vec<&Category> = match args.kind {
        Some(kind) => filter_categories(categories, kind),
        None => categories.iter().collect(),
    };
    format_category_table(&selected)
}
