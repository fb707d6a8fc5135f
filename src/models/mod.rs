//! Core data models for Pocket Ledger
//!
//! This module contains the data structures of the tracking domain:
//! transactions, categories, monthly budgets, the display currency and the
//! transient view filters.

pub mod budget;
pub mod category;
pub mod currency;
pub mod filters;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetEntry};
pub use category::{category_name, default_categories, Category};
pub use currency::CurrencyCode;
pub use filters::{CategorySelector, Filters, TypeSelector};
pub use ids::{BudgetId, CategoryId, TransactionId};
pub use money::Money;
pub use month::Month;
pub use transaction::{NewTransaction, Transaction, TransactionType};
