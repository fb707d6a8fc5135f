//! Dashboard aggregation
//!
//! Totals, budget-vs-actual and the spending breakdown for one filtered view.
//! Everything here is derived from the filtered transaction list; budgets are
//! taken from the active month only.

use crate::display::truncate;
use crate::models::{
    category_name, Budget, Category, CategoryId, CurrencyCode, Money, Month, Transaction,
};

/// Budgeted vs. spent for one category in the active month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category_id: CategoryId,
    pub category_name: String,
    /// Budgeted amount for the month
    pub budgeted: Money,
    /// Expense total for the category within the filtered view
    pub spent: Money,
}

impl BudgetStatus {
    /// Budgeted minus spent; negative when over budget
    pub fn remaining(&self) -> Money {
        self.budgeted - self.spent
    }

    pub fn is_over(&self) -> bool {
        self.spent > self.budgeted
    }

    /// Spent as a percentage of budgeted
    ///
    /// A zero budget counts as fully used once anything is spent.
    pub fn percent_used(&self) -> f64 {
        if self.budgeted.is_zero() {
            if self.spent.is_positive() {
                100.0
            } else {
                0.0
            }
        } else {
            self.spent.cents() as f64 / self.budgeted.cents() as f64 * 100.0
        }
    }
}

/// Expense total of one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category_id: CategoryId,
    pub category_name: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Percentage of all expense in the view
    pub share: f64,
}

/// Dashboard summary for a filtered view
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// The month budgets are compared against
    pub month: Month,
    /// Sum of income amounts
    pub income: Money,
    /// Sum of expense amounts
    pub expense: Money,
    /// Number of transactions in the view
    pub transaction_count: usize,
    /// One entry per budget of the active month, in stored order
    pub budgets: Vec<BudgetStatus>,
    /// Expense per category, largest first
    pub spending_by_category: Vec<CategorySpending>,
}

impl Dashboard {
    /// Aggregate an already-filtered transaction list
    pub fn compute(
        filtered: &[Transaction],
        categories: &[Category],
        budgets: &[Budget],
        month: Month,
    ) -> Self {
        let income: Money = filtered
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();
        let expense: Money = filtered
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        let spent_in = |category_id: &CategoryId| -> Money {
            filtered
                .iter()
                .filter(|t| t.is_expense() && &t.category_id == category_id)
                .map(|t| t.amount)
                .sum()
        };

        let budget_rows = budgets
            .iter()
            .filter(|b| b.month == month)
            .map(|b| BudgetStatus {
                category_id: b.category_id.clone(),
                category_name: category_name(categories, &b.category_id).to_string(),
                budgeted: b.amount,
                spent: spent_in(&b.category_id),
            })
            .collect();

        Self {
            month,
            income,
            expense,
            transaction_count: filtered.len(),
            budgets: budget_rows,
            spending_by_category: spending_breakdown(filtered, categories, expense),
        }
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }

    pub fn over_budget_count(&self) -> usize {
        self.budgets.iter().filter(|b| b.is_over()).count()
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, currency: CurrencyCode) -> String {
        let symbol = currency.symbol();
        let mut output = String::new();

        output.push_str(&format!("Dashboard - {} ({})\n", self.month.label(), currency));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>16}\n{:<12} {:>16}\n{:<12} {:>16}\n",
            "Income",
            self.income.format_with_symbol(symbol),
            "Expense",
            self.expense.format_with_symbol(symbol),
            "Net",
            self.net().format_with_symbol(symbol),
        ));
        output.push_str(&format!("{} transaction(s)\n", self.transaction_count));

        output.push_str(&format!("\nBudgets for {}\n", self.month));
        output.push_str(&"-".repeat(64));
        output.push('\n');
        if self.budgets.is_empty() {
            output.push_str("No budgets set for this month.\n");
        } else {
            output.push_str(&format!(
                "{:<20} {:>12} {:>12} {:>12} {:>5}\n",
                "Category", "Budgeted", "Spent", "Remaining", "Used"
            ));
            for status in &self.budgets {
                let marker = if status.is_over() { " *" } else { "" };
                output.push_str(&format!(
                    "{:<20} {:>12} {:>12} {:>12} {:>4.0}%{}\n",
                    truncate(&status.category_name, 20),
                    status.budgeted.format_with_symbol(symbol),
                    status.spent.format_with_symbol(symbol),
                    status.remaining().format_with_symbol(symbol),
                    status.percent_used(),
                    marker,
                ));
            }
            if self.over_budget_count() > 0 {
                output.push_str("\n* = Over budget\n");
            }
        }

        if !self.spending_by_category.is_empty() {
            output.push_str("\nSpending by category\n");
            output.push_str(&"-".repeat(64));
            output.push('\n');
            for row in &self.spending_by_category {
                output.push_str(&format!(
                    "{:<20} {:>12} {:>5.1}%\n",
                    truncate(&row.category_name, 20),
                    row.total.format_with_symbol(symbol),
                    row.share,
                ));
            }
        }

        output
    }
}

fn spending_breakdown(
    filtered: &[Transaction],
    categories: &[Category],
    expense: Money,
) -> Vec<CategorySpending> {
    let mut rows: Vec<CategorySpending> = Vec::new();

    for txn in filtered.iter().filter(|t| t.is_expense()) {
        match rows.iter_mut().find(|r| r.category_id == txn.category_id) {
            Some(row) => {
                row.total += txn.amount;
                row.transaction_count += 1;
            }
            None => rows.push(CategorySpending {
                category_id: txn.category_id.clone(),
                category_name: category_name(categories, &txn.category_id).to_string(),
                total: txn.amount,
                transaction_count: 1,
                share: 0.0,
            }),
        }
    }

    for row in &mut rows {
        row.share = if expense.is_zero() {
            0.0
        } else {
            row.total.cents() as f64 / expense.cents() as f64 * 100.0
        };
    }

    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, NewTransaction, TransactionType};
    use chrono::NaiveDate;

    fn txn(day: u32, kind: TransactionType, units: i64, category: &str) -> Transaction {
        Transaction::new(NewTransaction {
            kind,
            amount: Money::from_units(units),
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            description: String::new(),
            category_id: CategoryId::from(category),
        })
    }

    fn january() -> Month {
        Month::new(2024, 1).unwrap()
    }

    #[test]
    fn test_net_for_simple_month() {
        let filtered = vec![
            txn(10, TransactionType::Income, 500, "1"),
            txn(5, TransactionType::Expense, 100, "2"),
        ];

        let dashboard = Dashboard::compute(&filtered, &default_categories(), &[], january());

        assert_eq!(dashboard.income, Money::from_units(500));
        assert_eq!(dashboard.expense, Money::from_units(100));
        assert_eq!(dashboard.net(), Money::from_units(400));
        assert_eq!(dashboard.transaction_count, 2);
    }

    #[test]
    fn test_budget_status_uses_active_month_only() {
        let filtered = vec![
            txn(5, TransactionType::Expense, 100, "2"),
            txn(8, TransactionType::Expense, 250, "2"),
            txn(9, TransactionType::Income, 250, "2"),
        ];
        let budgets = vec![
            Budget::new(CategoryId::from("2"), Money::from_units(300), january()),
            Budget::new(CategoryId::from("3"), Money::from_units(1000), january()),
            Budget::new(CategoryId::from("2"), Money::from_units(999), january().next()),
        ];

        let dashboard = Dashboard::compute(&filtered, &default_categories(), &budgets, january());

        assert_eq!(dashboard.budgets.len(), 2);
        let groceries = &dashboard.budgets[0];
        assert_eq!(groceries.category_name, "Groceries");
        assert_eq!(groceries.spent, Money::from_units(350));
        assert_eq!(groceries.remaining(), Money::from_units(-50));
        assert!(groceries.is_over());

        let rent = &dashboard.budgets[1];
        assert_eq!(rent.spent, Money::zero());
        assert!(!rent.is_over());
        assert_eq!(rent.percent_used(), 0.0);

        assert_eq!(dashboard.over_budget_count(), 1);
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_wrapping() {
        let huge = Money::parse("50000000000000000").unwrap();
        let big_expense = |day| Transaction {
            amount: huge,
            ..txn(day, TransactionType::Expense, 1, "2")
        };
        let filtered = vec![big_expense(5), big_expense(6)];

        let dashboard = Dashboard::compute(&filtered, &default_categories(), &[], january());

        assert_eq!(dashboard.expense, Money::from_cents(i64::MAX));
        assert!(dashboard.expense.is_positive());
        assert!(dashboard.net().is_negative());
        assert_eq!(dashboard.spending_by_category[0].total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_percent_used() {
        let status = BudgetStatus {
            category_id: CategoryId::from("2"),
            category_name: "Groceries".into(),
            budgeted: Money::from_units(200),
            spent: Money::from_units(50),
        };
        assert_eq!(status.percent_used(), 25.0);

        let unbudgeted = BudgetStatus {
            budgeted: Money::zero(),
            ..status
        };
        assert_eq!(unbudgeted.percent_used(), 100.0);
        assert!(unbudgeted.is_over());
    }

    #[test]
    fn test_spending_breakdown_sorted_with_shares() {
        let filtered = vec![
            txn(1, TransactionType::Expense, 25, "6"),
            txn(2, TransactionType::Expense, 50, "2"),
            txn(3, TransactionType::Expense, 25, "2"),
            txn(4, TransactionType::Income, 1000, "1"),
            txn(5, TransactionType::Expense, 100, "42"),
        ];

        let dashboard = Dashboard::compute(&filtered, &default_categories(), &[], january());
        let rows = &dashboard.spending_by_category;

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category_name, "Unknown");
        assert_eq!(rows[0].share, 50.0);
        assert_eq!(rows[1].category_name, "Groceries");
        assert_eq!(rows[1].total, Money::from_units(75));
        assert_eq!(rows[1].transaction_count, 2);
        assert_eq!(rows[2].share, 12.5);
    }

    #[test]
    fn test_empty_view() {
        let dashboard = Dashboard::compute(&[], &default_categories(), &[], january());
        assert_eq!(dashboard.net(), Money::zero());
        assert!(dashboard.spending_by_category.is_empty());

        let text = dashboard.format_terminal(CurrencyCode::Usd);
        assert!(text.contains("January 2024"));
        assert!(text.contains("No budgets set"));
    }

    #[test]
    fn test_format_marks_over_budget() {
        let filtered = vec![txn(5, TransactionType::Expense, 400, "2")];
        let budgets = vec![Budget::new(CategoryId::from("2"), Money::from_units(300), january())];

        let text = Dashboard::compute(&filtered, &default_categories(), &budgets, january())
            .format_terminal(CurrencyCode::Inr);

        assert!(text.contains("₹300.00"));
        assert!(text.contains("* = Over budget"));
    }
}
