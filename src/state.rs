//! Application state
//!
//! Holds the persisted collections, the active filters and the filtered view
//! derived from them. Every setter commits through a service, then re-reads
//! storage and recomputes the view, so readers always see committed state.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Budget, BudgetEntry, Category, CurrencyCode, Filters, Month, NewTransaction, Transaction,
    TransactionId,
};
use crate::reports::{filter_transactions, Dashboard};
use crate::services::{BudgetService, CategoryService, CurrencyService, TransactionService};
use crate::storage::Storage;

pub struct AppState<'a> {
    storage: &'a Storage,
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    budgets: Vec<Budget>,
    currency: CurrencyCode,
    filters: Filters,
    filtered: Vec<Transaction>,
}

impl<'a> AppState<'a> {
    /// Load every collection from storage and derive the initial view
    pub fn load(storage: &'a Storage, filters: Filters) -> Self {
        let mut state = Self {
            storage,
            transactions: Vec::new(),
            categories: Vec::new(),
            budgets: Vec::new(),
            currency: CurrencyCode::default(),
            filters,
            filtered: Vec::new(),
        };
        state.reload();
        state
    }

    /// Re-read storage and recompute the filtered view
    pub fn reload(&mut self) {
        self.transactions = self.storage.transactions();
        self.categories = self.storage.categories();
        self.budgets = self.storage.budgets();
        self.currency = self.storage.currency();
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.filtered = filter_transactions(&self.transactions, &self.filters);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Transactions passing the active filters, most recent first
    pub fn filtered(&self) -> &[Transaction] {
        &self.filtered
    }

    pub fn add_transaction(&mut self, input: NewTransaction) -> LedgerResult<Transaction> {
        let txn = TransactionService::new(self.storage).create(input)?;
        self.reload();
        Ok(txn)
    }

    /// Delete by id; `false` when nothing matched
    pub fn delete_transaction(&mut self, id: &TransactionId) -> LedgerResult<bool> {
        let removed = TransactionService::new(self.storage).delete(id)?;
        if removed {
            self.reload();
        }
        Ok(removed)
    }

    pub fn add_category(&mut self, name: &str) -> LedgerResult<Category> {
        let category = CategoryService::new(self.storage).create(name)?;
        self.reload();
        Ok(category)
    }

    pub fn set_budgets_for_month(
        &mut self,
        entries: &[BudgetEntry],
        month: Month,
    ) -> LedgerResult<Vec<Budget>> {
        let saved = BudgetService::new(self.storage).set_for_month(entries, month)?;
        self.reload();
        Ok(saved)
    }

    pub fn set_currency(&mut self, currency: CurrencyCode) -> LedgerResult<()> {
        CurrencyService::new(self.storage).set(currency)?;
        self.reload();
        Ok(())
    }

    /// Replace the active filters
    ///
    /// Fails without changing anything when the date window is inverted.
    pub fn set_filters(&mut self, filters: Filters) -> LedgerResult<()> {
        if filters.date_from > filters.date_to {
            return Err(LedgerError::Validation(format!(
                "Start date {} is after end date {}",
                filters.date_from, filters.date_to
            )));
        }
        self.filters = filters;
        self.refresh_view();
        Ok(())
    }

    /// Dashboard for the active filters' month
    pub fn dashboard(&self) -> Dashboard {
        self.dashboard_for(self.filters.active_month())
    }

    /// Dashboard comparing the filtered view against `month`'s budgets
    pub fn dashboard_for(&self, month: Month) -> Dashboard {
        Dashboard::compute(&self.filtered, &self.categories, &self.budgets, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, TransactionType};
    use chrono::NaiveDate;

    fn january() -> Filters {
        Filters::for_month(Month::new(2024, 1).unwrap())
    }

    fn input(day: u32, kind: TransactionType, units: i64, category: &str) -> NewTransaction {
        NewTransaction {
            kind,
            amount: Money::from_units(units),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description: String::new(),
            category_id: CategoryId::from(category),
        }
    }

    #[test]
    fn test_fresh_state_reads_defaults() {
        let storage = Storage::in_memory();
        let state = AppState::load(&storage, january());

        assert_eq!(state.categories().len(), 10);
        assert_eq!(state.currency(), CurrencyCode::Inr);
        assert!(state.transactions().is_empty());
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_mutations_refresh_view_and_dashboard() {
        let storage = Storage::in_memory();
        let mut state = AppState::load(&storage, january());

        state
            .add_transaction(input(5, TransactionType::Expense, 100, "2"))
            .unwrap();
        let income = state
            .add_transaction(input(10, TransactionType::Income, 500, "1"))
            .unwrap();

        assert_eq!(state.filtered().len(), 2);
        assert_eq!(state.filtered()[0].id, income.id);
        assert_eq!(state.dashboard().net(), Money::from_units(400));

        assert!(state.delete_transaction(&income.id).unwrap());
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(storage.transactions().len(), 1);
    }

    #[test]
    fn test_filters_change_view_only() {
        let storage = Storage::in_memory();
        let mut state = AppState::load(&storage, january());
        state
            .add_transaction(input(5, TransactionType::Expense, 100, "2"))
            .unwrap();
        state
            .add_transaction(input(10, TransactionType::Income, 500, "1"))
            .unwrap();

        state
            .set_filters(january().kind(TransactionType::Expense))
            .unwrap();
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.transactions().len(), 2);

        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let inverted = january().date_range(day, day.pred_opt().unwrap());
        assert!(state.set_filters(inverted).unwrap_err().is_validation());
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn test_budgets_category_and_currency() {
        let storage = Storage::in_memory();
        let mut state = AppState::load(&storage, january());

        let travel = state.add_category("Travel").unwrap();
        state
            .set_budgets_for_month(
                &[BudgetEntry::new(travel.id.clone(), Money::from_units(200))],
                Month::new(2024, 1).unwrap(),
            )
            .unwrap();
        state.set_currency(CurrencyCode::Gbp).unwrap();

        assert_eq!(state.categories().len(), 11);
        assert_eq!(state.budgets().len(), 1);
        assert_eq!(state.currency(), CurrencyCode::Gbp);

        let dashboard = state.dashboard();
        assert_eq!(dashboard.budgets[0].category_name, "Travel");
        assert!(state.dashboard_for(Month::new(2024, 2).unwrap()).budgets.is_empty());
    }
}
