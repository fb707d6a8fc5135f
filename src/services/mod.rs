//! Business logic layer for Pocket Ledger
//!
//! Services wrap the storage layer and perform the mutation operations. Each
//! operation reads the affected collection, changes it, and writes it back
//! whole.

pub mod budget;
pub mod category;
pub mod currency;
pub mod transaction;

pub use budget::{replace_month_budgets, BudgetService};
pub use category::CategoryService;
pub use currency::CurrencyService;
pub use transaction::TransactionService;
