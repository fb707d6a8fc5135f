//! Transaction service
//!
//! Add, delete and find transactions. Every mutation reads the whole
//! transaction list, changes it, and writes it back.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewTransaction, Transaction, TransactionId};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction under a fresh identifier
    pub fn create(&self, input: NewTransaction) -> LedgerResult<Transaction> {
        input
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let txn = Transaction::new(input);

        let mut transactions = self.storage.transactions();
        transactions.push(txn.clone());
        self.storage.save_transactions(&transactions)?;

        tracing::info!(
            id = %txn.id,
            kind = txn.kind.as_str(),
            amount = %txn.amount,
            "added transaction"
        );
        Ok(txn)
    }

    /// Delete a transaction by id
    ///
    /// Returns `false` and leaves storage untouched when no transaction has
    /// that id.
    pub fn delete(&self, id: &TransactionId) -> LedgerResult<bool> {
        let mut transactions = self.storage.transactions();
        let before = transactions.len();
        transactions.retain(|t| &t.id != id);

        if transactions.len() == before {
            tracing::debug!(%id, "delete requested for unknown transaction");
            return Ok(false);
        }

        self.storage.save_transactions(&transactions)?;
        tracing::info!(%id, "deleted transaction");
        Ok(true)
    }

    /// Find a transaction by full id or an unambiguous id prefix
    pub fn find(&self, identifier: &str) -> LedgerResult<Option<Transaction>> {
        let identifier = identifier.trim();
        let transactions = self.storage.transactions();

        if let Some(txn) = transactions.iter().find(|t| t.id.as_str() == identifier) {
            return Ok(Some(txn.clone()));
        }

        let mut matches: Vec<_> = transactions
            .into_iter()
            .filter(|t| t.id.matches_prefix(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(LedgerError::Ambiguous {
                entity_type: "Transaction",
                identifier: identifier.to_string(),
                matches: n,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, TransactionType};
    use chrono::NaiveDate;

    fn input(day: u32, kind: TransactionType, units: i64) -> NewTransaction {
        NewTransaction {
            kind,
            amount: Money::from_units(units),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description: format!("txn on day {}", day),
            category_id: CategoryId::from("2"),
        }
    }

    #[test]
    fn test_create_appends_and_persists() {
        let storage = Storage::in_memory();
        let service = TransactionService::new(&storage);

        let first = service.create(input(5, TransactionType::Expense, 100)).unwrap();
        let second = service.create(input(10, TransactionType::Income, 500)).unwrap();

        let stored = storage.transactions();
        assert_eq!(stored, vec![first, second]);
    }

    #[test]
    fn test_create_rejects_zero_amount() {
        let storage = Storage::in_memory();
        let service = TransactionService::new(&storage);

        let err = service.create(input(5, TransactionType::Expense, 0)).unwrap_err();
        assert!(err.is_validation());
        assert!(storage.transactions().is_empty());
    }

    #[test]
    fn test_delete_removes_matching_entry() {
        let storage = Storage::in_memory();
        let service = TransactionService::new(&storage);

        let a = service.create(input(1, TransactionType::Expense, 1)).unwrap();
        let b = service.create(input(2, TransactionType::Expense, 2)).unwrap();
        let c = service.create(input(3, TransactionType::Expense, 3)).unwrap();

        assert!(service.delete(&b.id).unwrap());
        assert_eq!(storage.transactions(), vec![a, c]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let storage = Storage::in_memory();
        let service = TransactionService::new(&storage);

        service.create(input(3, TransactionType::Expense, 3)).unwrap();
        service.create(input(1, TransactionType::Income, 1)).unwrap();
        let before = storage.transactions();

        assert!(!service.delete(&TransactionId::from("missing")).unwrap());
        assert_eq!(storage.transactions(), before);
    }

    #[test]
    fn test_find_by_prefix() {
        let storage = Storage::in_memory();
        storage
            .save_transactions(&[
                Transaction {
                    id: TransactionId::from("abc123"),
                    ..Transaction::new(input(1, TransactionType::Expense, 1))
                },
                Transaction {
                    id: TransactionId::from("abd456"),
                    ..Transaction::new(input(2, TransactionType::Expense, 2))
                },
            ])
            .unwrap();
        let service = TransactionService::new(&storage);

        assert_eq!(
            service.find("abc").unwrap().unwrap().id,
            TransactionId::from("abc123")
        );
        assert_eq!(
            service.find("abd456").unwrap().unwrap().id,
            TransactionId::from("abd456")
        );
        assert!(service.find("zzz").unwrap().is_none());
        assert!(matches!(
            service.find("ab"),
            Err(LedgerError::Ambiguous { matches: 2, .. })
        ));
    }
}
