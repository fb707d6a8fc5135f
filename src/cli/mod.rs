//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod currency;
pub mod dashboard;
pub mod filters;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use filters::FilterArgs;
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::models::Money;

/// clap value parser for amounts like `120`, `45.50` or `₹1,200`
pub(crate) fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}
