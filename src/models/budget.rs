//! Budget model
//!
//! A planned spending cap for one category in one calendar month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};
use super::money::Money;
use super::month::Month;

/// A budget for a specific category in a specific month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Unique identifier, kept stable across re-saves of the same month
    pub id: BudgetId,

    /// The category this budget caps
    pub category_id: CategoryId,

    /// Budgeted amount
    pub amount: Money,

    /// The month this budget applies to
    pub month: Month,
}

impl Budget {
    /// Create a budget with a fresh identifier
    pub fn new(category_id: CategoryId, amount: Money, month: Month) -> Self {
        Self {
            id: BudgetId::new(),
            category_id,
            amount,
            month,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category_id, self.amount)
    }
}

/// One `(category, amount)` pair submitted by the budget manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetEntry {
    pub category_id: CategoryId,
    pub amount: Money,
}

impl BudgetEntry {
    pub fn new(category_id: impl Into<CategoryId>, amount: Money) -> Self {
        Self {
            category_id: category_id.into(),
            amount,
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget(self.amount));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(BudgetValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeBudget(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBudget(amount) => {
                write!(f, "Budget amount cannot be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Budget amount {} exceeds the limit of {}", amount, Money::MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_validation() {
        assert!(BudgetEntry::new("2", Money::zero()).validate().is_ok());
        assert!(BudgetEntry::new("2", Money::from_cents(-1)).validate().is_err());
        assert!(BudgetEntry::new("2", Money::MAX_AMOUNT).validate().is_ok());

        let over = Money::parse("50000000000000000").unwrap();
        assert_eq!(
            BudgetEntry::new("2", over).validate(),
            Err(BudgetValidationError::AmountTooLarge(over))
        );
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{"id":"b1","categoryId":"2","amount":250,"month":"2024-01"}"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.month, Month::new(2024, 1).unwrap());
        assert_eq!(budget.amount, Money::from_units(250));

        let value = serde_json::to_value(&budget).unwrap();
        assert_eq!(value["categoryId"], "2");
        assert_eq!(value["month"], "2024-01");
    }
}
