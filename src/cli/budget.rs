//! Budget CLI commands
//!
//! Budgets are set a whole month at a time: `budget set` replaces every
//! budget of the month with the given `category=amount` pairs.

use clap::Subcommand;

use crate::display::format_budget_table;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetEntry, Filters, Money, Month};
use crate::services::CategoryService;
use crate::state::AppState;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budget vs. actual for a month
    Show {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Replace a month's budgets
    Set {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<Month>,
        /// Budgets as category=amount (e.g., Groceries=300); none clears the month
        entries: Vec<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Show { month } => {
            let month = month.unwrap_or_else(Month::current);
            let state = AppState::load(storage, Filters::for_month(month));
            let dashboard = state.dashboard_for(month);
            println!("{}", format_budget_table(month, &dashboard.budgets, state.currency()));
        }

        BudgetCommands::Set { month, entries } => {
            let month = month.unwrap_or_else(Month::current);
            let entries = entries
                .iter()
                .map(|raw| parse_entry(storage, raw))
                .collect::<LedgerResult<Vec<_>>>()?;

            let mut state = AppState::load(storage, Filters::for_month(month));
            let saved = state.set_budgets_for_month(&entries, month)?;

            if saved.is_empty() {
                println!("Cleared budgets for {}", month);
            } else {
                println!("Saved {} budget(s) for {}", saved.len(), month);
                let dashboard = state.dashboard_for(month);
                println!("{}", format_budget_table(month, &dashboard.budgets, state.currency()));
            }
        }
    }

    Ok(())
}

/// Parse one `category=amount` argument
fn parse_entry(storage: &Storage, raw: &str) -> LedgerResult<BudgetEntry> {
    let (category, amount) = raw.split_once('=').ok_or_else(|| {
        LedgerError::Validation(format!(
            "Invalid budget '{}': expected category=amount",
            raw
        ))
    })?;

    let category = CategoryService::new(storage).resolve(category)?;
    let amount = Money::parse(amount)
        .map_err(|e| LedgerError::Validation(format!("Invalid budget amount: {}", e)))?;

    Ok(BudgetEntry::new(category.id, amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    #[test]
    fn test_parse_entry() {
        let storage = Storage::in_memory();

        let entry = parse_entry(&storage, "Groceries=300.50").unwrap();
        assert_eq!(entry.category_id, CategoryId::from("2"));
        assert_eq!(entry.amount, Money::from_cents(30050));

        assert!(parse_entry(&storage, "Groceries").unwrap_err().is_validation());
        assert!(parse_entry(&storage, "Groceries=abc").unwrap_err().is_validation());
        assert!(parse_entry(&storage, "Boats=10").unwrap_err().is_not_found());
    }
}
