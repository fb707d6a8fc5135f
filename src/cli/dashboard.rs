//! Dashboard CLI command

use clap::Args;

use super::FilterArgs;
use crate::error::LedgerResult;
use crate::state::AppState;
use crate::storage::Storage;

/// Dashboard arguments
#[derive(Args, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Print totals, budget status and spending for the filtered view
///
/// Budgets are taken from `--month` when given, otherwise from the month
/// containing the end of the date window.
pub fn handle_dashboard_command(storage: &Storage, args: DashboardArgs) -> LedgerResult<()> {
    let filters = args.filters.to_filters(storage)?;
    let state = AppState::load(storage, filters);

    let dashboard = match args.filters.month {
        Some(month) => state.dashboard_for(month),
        None => state.dashboard(),
    };

    tracing::debug!(
        month = %dashboard.month,
        count = dashboard.transaction_count,
        "computed dashboard"
    );
    print!("{}", dashboard.format_terminal(state.currency()));
    Ok(())
}
