//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::{parse_money, FilterArgs};
use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, NewTransaction, TransactionType};
use crate::services::{CategoryService, TransactionService};
use crate::state::AppState;
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// income or expense
        kind: TransactionType,
        /// Amount (e.g., "120" or "45.50")
        #[arg(value_parser = parse_money)]
        amount: Money,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List transactions, most recent first
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Maximum number of rows (defaults to the configured list limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID or unambiguous prefix
        id: String,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID or unambiguous prefix
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let category = CategoryService::new(storage).resolve(&category)?;
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

            let mut state = AppState::load(storage, Default::default());
            let txn = state.add_transaction(NewTransaction {
                kind,
                amount,
                date,
                description,
                category_id: category.id,
            })?;

            let symbol = state.currency().symbol();
            println!("Added {} of {}", txn.kind, txn.amount.format_with_symbol(symbol));
            println!("  Category: {}", category.name);
            println!("  Date:     {}", txn.date.format(&settings.date_format));
            println!("  ID:       {}", txn.id);
        }

        TransactionCommands::List { filters, limit } => {
            let filters = filters.to_filters(storage)?;
            let state = AppState::load(storage, filters);
            let limit = limit.unwrap_or(settings.list_limit);

            let shown = &state.filtered()[..state.filtered().len().min(limit)];
            println!(
                "{}",
                format_transaction_table(
                    shown,
                    state.categories(),
                    state.currency(),
                    &settings.date_format
                )
            );
            if shown.len() < state.filtered().len() {
                println!(
                    "Showing {} of {} transactions. Use --limit to see more.",
                    shown.len(),
                    state.filtered().len()
                );
            }
        }

        TransactionCommands::Show { id } => {
            let txn = TransactionService::new(storage)
                .find(&id)?
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;
            print!(
                "{}",
                format_transaction_details(&txn, &storage.categories(), storage.currency())
            );
        }

        TransactionCommands::Delete { id } => {
            let txn = TransactionService::new(storage)
                .find(&id)?
                .ok_or_else(|| LedgerError::transaction_not_found(&id))?;

            let mut state = AppState::load(storage, Default::default());
            state.delete_transaction(&txn.id)?;
            println!("Deleted transaction {}", txn.id.short());
        }
    }

    Ok(())
}
