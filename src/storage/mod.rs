//! Storage layer for Pocket Ledger
//!
//! A thin typed adapter over a [`KeyValueStore`]. Each collection lives under
//! its own key and is read and written as a whole. Reads never fail: a missing
//! or malformed document yields the caller's default.

pub mod file_io;
pub mod init;
pub mod kv;

pub use file_io::{read_json_value, write_json_atomic};
pub use init::initialize_storage;
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};

use serde::{de::DeserializeOwned, Serialize};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{default_categories, Budget, Category, CurrencyCode, Transaction};

/// Storage keys
pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const CATEGORIES: &str = "categories";
    pub const BUDGETS: &str = "budgets";
    pub const CURRENCY: &str = "currency";
}

/// Main storage coordinator
pub struct Storage {
    store: Box<dyn KeyValueStore>,
}

impl Storage {
    /// Wrap an arbitrary backend
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Open the file-backed store under the given paths
    pub fn open(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;
        Ok(Self::new(JsonFileStore::new(paths.clone())))
    }

    /// Create an ephemeral in-memory store
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Read the value under `key`, falling back to `default` when it is
    /// absent or cannot be decoded
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.store.load(key) {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(
                        key,
                        error = %e,
                        "stored value has unexpected shape, using default"
                    );
                    default
                }
            },
            Ok(None) => {
                tracing::debug!(key, "no stored value, using default");
                default
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value unreadable, using default");
                default
            }
        }
    }

    /// Replace the value under `key`
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> LedgerResult<()> {
        let json = serde_json::to_value(value)?;
        self.store.store(key, &json)?;
        tracing::debug!(key, "stored value written");
        Ok(())
    }

    /// Check whether a readable value exists under `key`
    pub fn contains(&self, key: &str) -> bool {
        self.store.contains(key)
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.read(keys::TRANSACTIONS, Vec::new())
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> LedgerResult<()> {
        self.write(keys::TRANSACTIONS, transactions)
    }

    /// Categories, seeded with the default list when nothing is stored
    pub fn categories(&self) -> Vec<Category> {
        self.read(keys::CATEGORIES, default_categories())
    }

    pub fn save_categories(&self, categories: &[Category]) -> LedgerResult<()> {
        self.write(keys::CATEGORIES, categories)
    }

    pub fn budgets(&self) -> Vec<Budget> {
        self.read(keys::BUDGETS, Vec::new())
    }

    pub fn save_budgets(&self, budgets: &[Budget]) -> LedgerResult<()> {
        self.write(keys::BUDGETS, budgets)
    }

    pub fn currency(&self) -> CurrencyCode {
        self.read(keys::CURRENCY, CurrencyCode::default())
    }

    pub fn save_currency(&self, currency: CurrencyCode) -> LedgerResult<()> {
        self.write(keys::CURRENCY, &currency)
    }
}
