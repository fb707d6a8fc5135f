//! Shared filter arguments
//!
//! `transaction list` and `dashboard` accept the same date/category/type
//! restrictions as the interactive view.

use chrono::NaiveDate;
use clap::Args;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategorySelector, Filters, Month, TypeSelector};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Filter arguments
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Whole calendar month (YYYY-MM); defaults to month-to-date
    #[arg(short, long)]
    pub month: Option<Month>,

    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Category name or ID, or "all"
    #[arg(short, long)]
    pub category: Option<String>,

    /// income, expense or all
    #[arg(short = 't', long = "type")]
    pub kind: Option<TypeSelector>,
}

impl FilterArgs {
    /// Resolve into view filters
    ///
    /// `--from`/`--to` override either end of the month window.
    pub fn to_filters(&self, storage: &Storage) -> LedgerResult<Filters> {
        let mut filters = match self.month {
            Some(month) => Filters::for_month(month),
            None => Filters::default(),
        };

        if let Some(from) = self.from {
            filters.date_from = from;
        }
        if let Some(to) = self.to {
            filters.date_to = to;
        }
        if filters.date_from > filters.date_to {
            return Err(LedgerError::Validation(format!(
                "Start date {} is after end date {}",
                filters.date_from, filters.date_to
            )));
        }

        filters.category = match self.category.as_deref() {
            None => CategorySelector::All,
            Some(c) if c.trim().eq_ignore_ascii_case("all") => CategorySelector::All,
            Some(c) => CategorySelector::Only(CategoryService::new(storage).resolve(c)?.id),
        };
        filters.kind = self.kind.unwrap_or_default();

        Ok(filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, TransactionType};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_month_with_overrides() {
        let storage = Storage::in_memory();
        let args = FilterArgs {
            month: Some(Month::new(2024, 2).unwrap()),
            to: Some(date(2, 10)),
            category: Some("groceries".into()),
            kind: Some(TypeSelector::Only(TransactionType::Expense)),
            ..Default::default()
        };

        let filters = args.to_filters(&storage).unwrap();

        assert_eq!(filters.date_from, date(2, 1));
        assert_eq!(filters.date_to, date(2, 10));
        assert_eq!(filters.category, CategorySelector::Only(CategoryId::from("2")));
        assert_eq!(filters.kind, TypeSelector::Only(TransactionType::Expense));
    }

    #[test]
    fn test_all_category_and_inverted_range() {
        let storage = Storage::in_memory();
        let args = FilterArgs {
            from: Some(date(1, 1)),
            to: Some(date(1, 31)),
            category: Some("ALL".into()),
            ..Default::default()
        };
        assert_eq!(args.to_filters(&storage).unwrap().category, CategorySelector::All);

        let inverted = FilterArgs {
            from: Some(date(3, 1)),
            to: Some(date(1, 31)),
            ..Default::default()
        };
        assert!(inverted.to_filters(&storage).unwrap_err().is_validation());
    }

    #[test]
    fn test_unknown_category() {
        let storage = Storage::in_memory();
        let args = FilterArgs {
            category: Some("Yachts".into()),
            ..Default::default()
        };
        assert!(args.to_filters(&storage).unwrap_err().is_not_found());
    }
}
