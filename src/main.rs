use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketbook::cli::{handle_add_command, handle_category_command, AddArgs, CategoryArgs};
use pocketbook::config::{paths::PocketbookPaths, settings::Settings};
use pocketbook::dialog::local_today;
use pocketbook::display::{format_transaction_json_lines, format_transaction_table};
use pocketbook::logging::init_logging;
use pocketbook::storage::{load_categories, seed_default_categories};

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Record income and expense transactions from the terminal",
    long_about = "Pocketbook opens an add-transaction dialog in the terminal. \
                  Each submitted transaction is kept for the session and printed \
                  when you quit; nothing is saved."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui {
        /// Print the session's transactions as JSON lines instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Record one transaction without the TUI and print it as JSON
    Add(AddArgs),

    /// List the categories offered by the dialog
    Categories(CategoryArgs),

    /// Write default settings and categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let _log_guard = init_logging(&paths, &settings)?;

    match cli.command.unwrap_or(Commands::Tui { json: false }) {
        Commands::Tui { json } => {
            let categories = load_categories(&paths)?;
            let transactions = pocketbook::tui::run_tui(&settings, categories)?;

            if json {
                if !transactions.is_empty() {
                    println!("{}", format_transaction_json_lines(&transactions)?);
                }
            } else {
                println!(
                    "{}",
                    format_transaction_table(&transactions, &settings.currency_symbol)
                );
            }
        }
        Commands::Add(args) => {
            let categories = load_categories(&paths)?;
            let draft = handle_add_command(args, &categories, local_today)?;
            println!("{}", serde_json::to_string(&draft)?);
        }
        Commands::Categories(args) => {
            let categories = load_categories(&paths)?;
            println!("{}", handle_category_command(&args, &categories));
        }
        Commands::Init => {
            println!("Initializing Pocketbook at: {}", paths.base_dir().display());
            if paths.is_initialized() {
                println!("Keeping existing {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
            }
            if seed_default_categories(&paths)? {
                println!("Default categories written to {}", paths.categories_file().display());
            } else {
                println!("Keeping existing {}", paths.categories_file().display());
            }
            println!("Initialization complete!");
        }
        Commands::Config => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Categories file:  {}", paths.categories_file().display());
            println!("Log directory:    {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Tick rate:       {} ms", settings.tick_rate_ms);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}
