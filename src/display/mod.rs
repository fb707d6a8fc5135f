//! Display formatting for terminal output
//!
//! Tables for list commands and plain-text detail views. Amounts are always
//! rendered with the active currency's symbol.

pub mod budget;
pub mod category;
pub mod currency;
pub mod transaction;

pub use budget::format_budget_table;
pub use category::format_category_list;
pub use currency::{format_currency_list, format_currency_status};
pub use transaction::{format_transaction_details, format_transaction_table};

/// Truncate to at most `max_len` characters, marking the cut with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_len.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
