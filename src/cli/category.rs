//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::services::CategoryService;
use crate::state::AppState;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List => {
            println!("{}", format_category_list(&CategoryService::new(storage).list()));
        }

        CategoryCommands::Add { name } => {
            let mut state = AppState::load(storage, Default::default());
            let category = state.add_category(&name)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }
    }

    Ok(())
}
