//! Filtered transaction view
//!
//! The list every screen shows: transactions that pass the active filters,
//! most recent first.

use crate::models::{Filters, Transaction};

/// Keep transactions passing `filters`, sorted by date descending
///
/// Same-date transactions keep their stored order.
pub fn filter_transactions(transactions: &[Transaction], filters: &Filters) -> Vec<Transaction> {
    let mut view: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filters.matches(t))
        .cloned()
        .collect();

    // sort_by is stable
    view.sort_by(|a, b| b.date.cmp(&a.date));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money, Month, NewTransaction, TransactionType};
    use chrono::NaiveDate;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn txn(m: u32, d: u32, kind: TransactionType, units: i64, category: &str) -> Transaction {
        Transaction::new(NewTransaction {
            kind,
            amount: Money::from_units(units),
            date: date(m, d),
            description: format!("{}-{}", m, d),
            category_id: CategoryId::from(category),
        })
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(1, 5, TransactionType::Expense, 100, "2"),
            txn(1, 10, TransactionType::Income, 500, "1"),
            txn(1, 10, TransactionType::Expense, 40, "6"),
            txn(2, 1, TransactionType::Expense, 1200, "3"),
            txn(1, 20, TransactionType::Expense, 25, "2"),
        ]
    }

    #[test]
    fn test_january_example_ordering() {
        let transactions = vec![
            txn(1, 5, TransactionType::Expense, 100, "2"),
            txn(1, 10, TransactionType::Income, 500, "1"),
        ];
        let filters = Filters::for_month(Month::new(2024, 1).unwrap());

        let view = filter_transactions(&transactions, &filters);

        let dates: Vec<_> = view.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![date(1, 10), date(1, 5)]);
    }

    #[test]
    fn test_single_day_window() {
        let transactions = sample();
        let filters = Filters::for_month(Month::new(2024, 1).unwrap())
            .date_range(date(1, 10), date(1, 10));

        let view = filter_transactions(&transactions, &filters);

        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|t| t.date == date(1, 10)));
        // stored order kept for ties
        assert_eq!(view[0].id, transactions[1].id);
        assert_eq!(view[1].id, transactions[2].id);
    }

    #[test]
    fn test_unrestricted_returns_everything_sorted() {
        let transactions = sample();
        let filters = Filters::for_month(Month::new(2024, 1).unwrap())
            .date_range(date(1, 1), date(12, 31));

        let view = filter_transactions(&transactions, &filters);

        assert_eq!(view.len(), transactions.len());
        assert!(view.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(view[0].date, date(2, 1));
    }

    #[test]
    fn test_category_and_type_restrictions() {
        let transactions = sample();
        let month = Filters::for_month(Month::new(2024, 1).unwrap());

        let groceries =
            filter_transactions(&transactions, &month.clone().category(CategoryId::from("2")));
        assert_eq!(groceries.len(), 2);
        assert_eq!(groceries[0].date, date(1, 20));

        let income = filter_transactions(&transactions, &month.kind(TransactionType::Income));
        assert_eq!(income.len(), 1);
        assert!(income[0].is_income());
    }

    #[test]
    fn test_input_is_not_reordered() {
        let transactions = sample();
        let snapshot = transactions.clone();
        let january = Filters::for_month(Month::new(2024, 1).unwrap());
        let _ = filter_transactions(&transactions, &january);
        assert_eq!(transactions, snapshot);
    }
}
