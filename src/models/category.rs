//! Category model and the seed category list

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Maximum category name length accepted by the category manager
pub const MAX_NAME_LEN: usize = 50;

/// A user-defined label used to classify transactions and budgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,
}

impl Category {
    /// Create a new category with a fresh identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into().trim().to_string(),
        }
    }

    /// Create a category with a fixed identifier
    pub fn with_id(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The categories a fresh installation starts with
pub fn default_categories() -> Vec<Category> {
    [
        ("1", "Salary"),
        ("2", "Groceries"),
        ("3", "Rent"),
        ("4", "Utilities"),
        ("5", "Transport"),
        ("6", "Dining Out"),
        ("7", "Entertainment"),
        ("8", "Shopping"),
        ("9", "Health"),
        ("10", "Freelance"),
    ]
    .into_iter()
    .map(|(id, name)| Category::with_id(id, name))
    .collect()
}

/// Look up a category name, tolerating dangling references
pub fn category_name<'a>(categories: &'a [Category], id: &CategoryId) -> &'a str {
    categories
        .iter()
        .find(|c| &c.id == id)
        .map(|c| c.name.as_str())
        .unwrap_or("Unknown")
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Category name too long ({} characters, max {})",
                len, MAX_NAME_LEN
            ),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
