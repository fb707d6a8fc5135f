//! Budget display formatting
//!
//! Budget-vs-actual table for one month.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CurrencyCode, Month};
use crate::reports::BudgetStatus;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budgeted")]
    budgeted: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
}

/// Format budget statuses for `month` as a table
pub fn format_budget_table(
    month: Month,
    statuses: &[BudgetStatus],
    currency: CurrencyCode,
) -> String {
    if statuses.is_empty() {
        return format!("No budgets set for {}.", month);
    }

    let symbol = currency.symbol();
    let rows = statuses.iter().map(|s| BudgetRow {
        category: s.category_name.clone(),
        budgeted: s.budgeted.format_with_symbol(symbol),
        spent: s.spent.format_with_symbol(symbol),
        remaining: s.remaining().format_with_symbol(symbol),
        used: if s.is_over() {
            format!("{:.0}% over", s.percent_used())
        } else {
            format!("{:.0}%", s.percent_used())
        },
    });

    let mut output = format!("Budgets for {}\n", month.label());
    output.push_str(&Table::new(rows).with(Style::modern()).to_string());
    output
}
