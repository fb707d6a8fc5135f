//! Reports module for Pocket Ledger
//!
//! The derived views: the filtered transaction list and the dashboard
//! aggregation built on top of it.

pub mod dashboard;
pub mod view;

pub use dashboard::{BudgetStatus, CategorySpending, Dashboard};
pub use view::filter_transactions;
