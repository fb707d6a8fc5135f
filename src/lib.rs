//! Pocket Ledger - personal income and expense tracking
//!
//! This library provides the core functionality for the `pocket` command-line
//! and terminal UI application: recording income and expense transactions,
//! organizing them into categories, setting monthly budgets per category and
//! comparing actual spending against those budgets.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Core data models (transactions, categories, budgets, filters)
//! - `storage`: JSON key-value persistence
//! - `services`: Mutation operations over the stored collections
//! - `reports`: Derived views (filtered register, dashboard aggregates)
//! - `state`: Application state with derived-view recomputation
//! - `cli`, `display`, `tui`: Presentation
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::config::LedgerPaths;
//! use pocket_ledger::models::Filters;
//! use pocket_ledger::state::AppState;
//! use pocket_ledger::storage::Storage;
//!
//! let storage = Storage::open(&LedgerPaths::new()?)?;
//! let state = AppState::load(&storage, Filters::default());
//! println!("net: {}", state.dashboard().net());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod state;
pub mod storage;
pub mod tui;

pub use error::{LedgerError, LedgerResult};
