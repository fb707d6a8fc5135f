//! Application state for the TUI
//!
//! The App struct wraps the shared [`AppState`] with what only the interface
//! needs: the register selection, a pending delete and a status message.

use crate::config::settings::Settings;
use crate::models::{CategorySelector, Filters, Month, Transaction, TransactionId};
use crate::state::AppState;
use crate::storage::Storage;

/// Main application state
pub struct App<'a> {
    /// Committed data, filters and the filtered view
    pub state: AppState<'a>,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Selected row in the register
    pub selected_index: usize,

    /// Transaction awaiting delete confirmation
    pub pending_delete: Option<TransactionId>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, filters: Filters) -> Self {
        Self {
            state: AppState::load(storage, filters),
            settings,
            should_quit: false,
            selected_index: 0,
            pending_delete: None,
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// The transaction under the cursor
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.state.filtered().get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.state.filtered().len() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the filtered view after it changes
    fn clamp_selection(&mut self) {
        let len = self.state.filtered().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    fn apply_filters(&mut self, filters: Filters) {
        match self.state.set_filters(filters) {
            Ok(()) => self.clamp_selection(),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// All -> income -> expense -> all
    pub fn cycle_type_filter(&mut self) {
        let mut filters = self.state.filters().clone();
        filters.kind = filters.kind.cycle();
        self.apply_filters(filters);
    }

    /// All -> each category in stored order -> all
    pub fn cycle_category_filter(&mut self) {
        let categories = self.state.categories();
        let next = match &self.state.filters().category {
            CategorySelector::All => categories.first(),
            CategorySelector::Only(current) => categories
                .iter()
                .position(|c| &c.id == current)
                .and_then(|i| categories.get(i + 1)),
        };
        let selector = match next {
            Some(category) => CategorySelector::Only(category.id.clone()),
            None => CategorySelector::All,
        };

        let mut filters = self.state.filters().clone();
        filters.category = selector;
        self.apply_filters(filters);
    }

    /// Move the date window to the whole previous or next month
    pub fn shift_month(&mut self, forward: bool) {
        let current = self.state.filters().active_month();
        let month: Month = if forward { current.next() } else { current.prev() };

        let mut filters = Filters::for_month(month);
        filters.category = self.state.filters().category.clone();
        filters.kind = self.state.filters().kind;
        self.apply_filters(filters);
    }

    /// Back to month-to-date with no restrictions
    pub fn reset_filters(&mut self) {
        self.apply_filters(Filters::default());
        self.set_status("Filters reset");
    }

    pub fn cycle_currency(&mut self) {
        let next = self.state.currency().cycle();
        match self.state.set_currency(next) {
            Ok(()) => self.set_status(format!("Currency: {}", next.name())),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Ask to delete the selected transaction
    pub fn request_delete(&mut self) {
        if let Some(txn) = self.selected_transaction() {
            let id = txn.id.clone();
            self.set_status(format!("Delete {}? (y/n)", id.short()));
            self.pending_delete = Some(id);
        }
    }

    /// Delete the pending transaction
    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        match self.state.delete_transaction(&id) {
            Ok(true) => {
                self.clamp_selection();
                self.set_status(format!("Deleted {}", id.short()));
            }
            Ok(false) => self.set_status("Transaction no longer exists"),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.clear_status();
    }
}
