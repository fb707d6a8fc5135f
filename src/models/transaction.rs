//! Transaction model
//!
//! A single recorded income or expense event. Amounts are always positive; the
//! direction lives in [`TransactionType`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction type '{}': expected income or expense",
                other
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Positive amount
    pub amount: Money,

    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category this transaction is filed under (not checked against the category list)
    pub category_id: CategoryId,
}

/// Everything needed to record a transaction except its identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category_id: CategoryId,
}

impl NewTransaction {
    /// Validate the input the way the entry form does
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl Transaction {
    /// Create a transaction with a freshly generated identifier
    pub fn new(input: NewTransaction) -> Self {
        Self {
            id: TransactionId::new(),
            kind: input.kind,
            amount: input.amount,
            date: input.date,
            description: input.description.trim().to_string(),
            category_id: input.category_id,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with sign applied (negative for expenses)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the limit of {}", amount, Money::MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(kind: TransactionType, cents: i64) -> NewTransaction {
        NewTransaction {
            kind,
            amount: Money::from_cents(cents),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            description: "  Weekly shop ".to_string(),
            category_id: CategoryId::from("2"),
        }
    }

    #[test]
    fn test_new_assigns_id_and_trims() {
        let a = Transaction::new(input(TransactionType::Expense, 10000));
        let b = Transaction::new(input(TransactionType::Expense, 10000));
        assert_ne!(a.id, b.id);
        assert_eq!(a.description, "Weekly shop");
        assert!(a.is_expense());
        assert_eq!(a.signed_amount(), Money::from_cents(-10000));
    }

    #[test]
    fn test_validation() {
        assert!(input(TransactionType::Income, 1).validate().is_ok());
        assert_eq!(
            input(TransactionType::Income, 0).validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );
        assert!(input(TransactionType::Expense, -5).validate().is_err());
    }

    #[test]
    fn test_validation_caps_amount() {
        let limit = Money::MAX_AMOUNT.cents();
        assert!(input(TransactionType::Expense, limit).validate().is_ok());
        assert_eq!(
            input(TransactionType::Expense, limit + 1).validate(),
            Err(TransactionValidationError::AmountTooLarge(Money::from_cents(limit + 1)))
        );
    }

    #[test]
    fn test_type_parse() {
        assert_eq!("Income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("expense".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "id": "t1",
            "type": "expense",
            "amount": 100,
            "date": "2024-01-05",
            "description": "Groceries",
            "categoryId": "2"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.amount, Money::from_units(100));
        assert_eq!(txn.category_id, CategoryId::from("2"));

        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["categoryId"], "2");
        assert_eq!(value["date"], "2024-01-05");
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(input(TransactionType::Expense, 5000));
        assert_eq!(txn.to_string(), "2024-01-05 Weekly shop -50.00");
    }
}
