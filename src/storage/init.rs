//! Storage initialization
//!
//! Handles first-run setup: writes the seed categories and the default
//! currency so the data directory is self-describing.

use crate::error::LedgerError;
use crate::models::{default_categories, CurrencyCode};

use super::{keys, Storage};

/// Seed storage for a fresh installation
///
/// Existing documents are never overwritten. Returns the keys that were seeded.
pub fn initialize_storage(storage: &Storage) -> Result<Vec<&'static str>, LedgerError> {
    let mut seeded = Vec::new();

    if !storage.contains(keys::CATEGORIES) {
        storage.save_categories(&default_categories())?;
        seeded.push(keys::CATEGORIES);
    }

    if !storage.contains(keys::CURRENCY) {
        storage.save_currency(CurrencyCode::default())?;
        seeded.push(keys::CURRENCY);
    }

    for key in [keys::TRANSACTIONS, keys::BUDGETS] {
        if !storage.contains(key) {
            storage.write(key, &Vec::<serde_json::Value>::new())?;
            seeded.push(key);
        }
    }

    if !seeded.is_empty() {
        tracing::info!(?seeded, "initialized storage");
    }

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();

        let seeded = initialize_storage(&storage).unwrap();

        assert_eq!(seeded.len(), 4);
        for key in [keys::TRANSACTIONS, keys::CATEGORIES, keys::BUDGETS, keys::CURRENCY] {
            assert!(storage.contains(key), "{} not seeded", key);
        }
        assert!(paths.key_file(keys::CATEGORIES).exists());
        assert_eq!(storage.categories().len(), 10);
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let storage = Storage::in_memory();
        storage
            .save_categories(&[Category::with_id("a", "Custom")])
            .unwrap();
        storage.save_currency(CurrencyCode::Usd).unwrap();

        let seeded = initialize_storage(&storage).unwrap();

        assert_eq!(seeded, vec![keys::TRANSACTIONS, keys::BUDGETS]);
        assert_eq!(storage.categories(), vec![Category::with_id("a", "Custom")]);
        assert_eq!(storage.currency(), CurrencyCode::Usd);
    }

    #[test]
    fn test_second_run_is_noop() {
        let storage = Storage::in_memory();
        initialize_storage(&storage).unwrap();
        assert!(initialize_storage(&storage).unwrap().is_empty());
    }
}
