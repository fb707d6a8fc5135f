//! Transaction display formatting
//!
//! Register table and detail view for transactions.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{category_name, Category, CurrencyCode, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Format transactions as a register table
pub fn format_transaction_table(
    transactions: &[Transaction],
    categories: &[Category],
    currency: CurrencyCode,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.short().to_string(),
        date: txn.date.format(date_format).to_string(),
        kind: txn.kind.as_str(),
        category: category_name(categories, &txn.category_id).to_string(),
        amount: txn.signed_amount().format_with_symbol(currency.symbol()),
        description: txn.description.clone(),
    });

    Table::new(rows).with(Style::modern()).to_string()
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    categories: &[Category],
    currency: CurrencyCode,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(currency.symbol())
    ));
    output.push_str(&format!(
        "Category:    {}\n",
        category_name(categories, &txn.category_id)
    ));
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output
}
