use anyhow::Result;
use clap::{Parser, Subcommand};

use pocket_ledger::cli::{
    handle_budget_command, handle_category_command, handle_currency_command,
    handle_dashboard_command, handle_transaction_command, DashboardArgs, FilterArgs,
};
use pocket_ledger::config::{paths::LedgerPaths, settings::Settings};
use pocket_ledger::logging::{init_logging, LogTarget};
use pocket_ledger::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Personal income and expense tracker",
    long_about = "Pocket Ledger records income and expense transactions, sorts them \
                  into categories, and compares monthly spending against per-category \
                  budgets, from the command line or an interactive dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show totals, budget status and spending by category
    Dashboard(DashboardArgs),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(pocket_ledger::cli::TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(pocket_ledger::cli::CategoryCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(pocket_ledger::cli::BudgetCommands),

    /// Display currency commands
    #[command(subcommand)]
    Currency(pocket_ledger::cli::CurrencyCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let log_target = match cli.command {
        Some(Commands::Tui { .. }) => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    init_logging(&paths, &settings, log_target)?;

    let storage = Storage::open(&paths)?;

    match cli.command {
        Some(Commands::Tui { filters }) => {
            let filters = filters.to_filters(&storage)?;
            pocket_ledger::tui::run_tui(&storage, &settings, filters)?;
        }
        Some(Commands::Dashboard(args)) => {
            handle_dashboard_command(&storage, args)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Currency(cmd)) => {
            handle_currency_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Pocket Ledger at: {}", paths.base_dir().display());
            let seeded = initialize_storage(&storage)?;
            settings.save(&paths)?;
            if seeded.is_empty() {
                println!("Already initialized; existing data left untouched.");
            } else {
                println!("Created: {}", seeded.join(", "));
            }
            println!();
            println!("Run 'pocket category list' to see the default categories.");
        }
        Some(Commands::Config) => {
            println!("Pocket Ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Date format: {}", settings.date_format);
            println!("  Log filter:  {}", settings.log_filter);
            println!("  List limit:  {}", settings.list_limit);
            println!("  Currency:    {}", storage.currency());
        }
        None => {
            println!("Pocket Ledger - personal income and expense tracking");
            println!();
            println!("Run 'pocket --help' for usage information.");
            println!("Run 'pocket tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
