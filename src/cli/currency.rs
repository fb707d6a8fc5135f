//! Currency CLI commands

use clap::Subcommand;

use crate::display::{format_currency_list, format_currency_status};
use crate::error::LedgerResult;
use crate::models::CurrencyCode;
use crate::services::CurrencyService;
use crate::state::AppState;
use crate::storage::Storage;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the display currency
    Show,

    /// Change the display currency
    Set {
        /// Currency code (INR, USD, EUR, GBP)
        code: CurrencyCode,
    },

    /// List supported currencies
    List,
}

/// Handle a currency command
pub fn handle_currency_command(storage: &Storage, cmd: CurrencyCommands) -> LedgerResult<()> {
    match cmd {
        CurrencyCommands::Show => {
            println!("{}", format_currency_status(CurrencyService::new(storage).get()));
        }

        CurrencyCommands::Set { code } => {
            let mut state = AppState::load(storage, Default::default());
            state.set_currency(code)?;
            println!("Currency set to {}", format_currency_status(state.currency()));
        }

        CurrencyCommands::List => {
            println!("{}", format_currency_list(CurrencyService::new(storage).get()));
        }
    }

    Ok(())
}
