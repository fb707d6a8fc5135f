//! Category service
//!
//! Categories can only be created; they are never renamed or deleted, and
//! nothing checks that transactions or budgets point at an existing one.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Category;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a category with a fresh identifier and append it
    pub fn create(&self, name: &str) -> LedgerResult<Category> {
        let category = Category::new(name);
        category
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let mut categories = self.storage.categories();
        categories.push(category.clone());
        self.storage.save_categories(&categories)?;

        tracing::info!(id = %category.id, name = %category.name, "added category");
        Ok(category)
    }

    /// All categories in stored order
    pub fn list(&self) -> Vec<Category> {
        self.storage.categories()
    }

    /// Find a category by id, case-insensitive name, or unambiguous id prefix
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Category>> {
        let identifier = identifier.trim();
        let categories = self.storage.categories();

        if let Some(category) = categories.iter().find(|c| c.id.as_str() == identifier) {
            return Ok(Some(category.clone()));
        }

        if let Some(category) = categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(identifier))
        {
            return Ok(Some(category.clone()));
        }

        let mut matches: Vec<_> = categories
            .into_iter()
            .filter(|c| c.id.matches_prefix(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(LedgerError::Ambiguous {
                entity_type: "Category",
                identifier: identifier.to_string(),
                matches: n,
            }),
        }
    }

    /// Like [`find`](Self::find) but treats no match as an error
    pub fn resolve(&self, identifier: &str) -> LedgerResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| LedgerError::category_not_found(identifier))
    }
}
