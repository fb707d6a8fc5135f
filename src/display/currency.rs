//! Currency display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CurrencyCode;

#[derive(Tabled)]
struct CurrencyRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Active")]
    active: &'static str,
}

/// Format the supported currencies, marking the active one
pub fn format_currency_list(active: CurrencyCode) -> String {
    let rows = CurrencyCode::all().iter().map(|c| CurrencyRow {
        code: c.code(),
        symbol: c.symbol(),
        name: c.name(),
        active: if *c == active { "*" } else { "" },
    });

    Table::new(rows).with(Style::modern()).to_string()
}

pub fn format_currency_status(currency: CurrencyCode) -> String {
    format!("{} ({} {})", currency.code(), currency.symbol(), currency.name())
}
