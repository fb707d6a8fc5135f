//! Budget service
//!
//! Budgets are saved a whole month at a time. Saving a month replaces every
//! budget of that month; identifiers of categories that stay budgeted are kept
//! so list keys in the UI don't churn.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, BudgetEntry, BudgetId, CategoryId, Month};
use crate::storage::Storage;

/// Replace all budgets of `month` with `entries`
///
/// Budgets of other months keep their relative order and come first, followed
/// by the new month's budgets in entry order. If `entries` names a category
/// more than once the last amount wins and the first position is kept, so each
/// `(month, category)` pair appears at most once in the result.
pub fn replace_month_budgets(
    previous: Vec<Budget>,
    entries: &[BudgetEntry],
    month: Month,
) -> Vec<Budget> {
    let mut deduped: Vec<BudgetEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match deduped
            .iter_mut()
            .find(|e| e.category_id == entry.category_id)
        {
            Some(existing) => existing.amount = entry.amount,
            None => deduped.push(entry.clone()),
        }
    }

    let existing_id = |category_id: &CategoryId| -> Option<BudgetId> {
        previous
            .iter()
            .find(|b| b.month == month && &b.category_id == category_id)
            .map(|b| b.id.clone())
    };

    let updated: Vec<Budget> = deduped
        .into_iter()
        .map(|entry| Budget {
            id: existing_id(&entry.category_id).unwrap_or_default(),
            category_id: entry.category_id,
            amount: entry.amount,
            month,
        })
        .collect();

    previous
        .into_iter()
        .filter(|b| b.month != month)
        .chain(updated)
        .collect()
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Replace the budgets of `month`; returns that month's new budgets
    pub fn set_for_month(
        &self,
        entries: &[BudgetEntry],
        month: Month,
    ) -> LedgerResult<Vec<Budget>> {
        for entry in entries {
            entry
                .validate()
                .map_err(|e| LedgerError::Validation(e.to_string()))?;
        }

        let budgets = replace_month_budgets(self.storage.budgets(), entries, month);
        self.storage.save_budgets(&budgets)?;

        let for_month: Vec<Budget> = budgets.into_iter().filter(|b| b.month == month).collect();
        tracing::info!(%month, count = for_month.len(), "saved monthly budgets");
        Ok(for_month)
    }
}
