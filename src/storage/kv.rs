//! Key-value store backends
//!
//! A store holds one JSON document per string key. Writes always replace the
//! whole document.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_json_value, write_json_atomic};

/// A persistent map from string keys to JSON documents
pub trait KeyValueStore {
    /// Load the document stored under `key`, or `None` if nothing is stored
    fn load(&self, key: &str) -> LedgerResult<Option<Value>>;

    /// Replace the document stored under `key`
    fn store(&self, key: &str, value: &Value) -> LedgerResult<()>;

    /// Check whether a readable document exists under `key`
    fn contains(&self, key: &str) -> bool {
        matches!(self.load(key), Ok(Some(_)))
    }
}

/// Stores each key as `<data_dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    paths: LedgerPaths,
}

impl JsonFileStore {
    pub fn new(paths: LedgerPaths) -> Self {
        Self { paths }
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, key: &str) -> LedgerResult<Option<Value>> {
        read_json_value(self.paths.key_file(key))
    }

    fn store(&self, key: &str, value: &Value) -> LedgerResult<()> {
        write_json_atomic(self.paths.key_file(key), value)
    }
}

/// In-process store; contents are lost when it is dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> LedgerResult<Option<Value>> {
        let values = self
            .values
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(values.get(key).cloned())
    }

    fn store(&self, key: &str, value: &Value) -> LedgerResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        values.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load("currency").unwrap(), None);
        assert!(!store.contains("currency"));

        store.store("currency", &json!("USD")).unwrap();
        assert_eq!(store.load("currency").unwrap(), Some(json!("USD")));
        assert!(store.contains("currency"));
    }

    #[test]
    fn test_file_store_writes_one_file_per_key() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonFileStore::new(paths.clone());

        store.store("budgets", &json!([])).unwrap();
        store.store("currency", &json!("EUR")).unwrap();

        assert!(paths.key_file("budgets").exists());
        assert!(paths.key_file("currency").exists());
        assert_eq!(store.load("currency").unwrap(), Some(json!("EUR")));
    }

    #[test]
    fn test_file_store_replaces_whole_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(LedgerPaths::with_base_dir(temp_dir.path().to_path_buf()));

        store.store("transactions", &json!([{"a": 1}, {"b": 2}])).unwrap();
        store.store("transactions", &json!([{"c": 3}])).unwrap();

        assert_eq!(store.load("transactions").unwrap(), Some(json!([{"c": 3}])));
    }
}
