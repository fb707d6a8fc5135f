//! Layout definitions for the TUI
//!
//! Header on top, dashboard and register side by side, status bar at the
//! bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title, currency and active filters
    pub header: Rect,
    /// Totals and budget status
    pub dashboard: Rect,
    /// Filtered transaction list
    pub register: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40), // Dashboard
                Constraint::Percentage(60), // Register
            ])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            dashboard: horizontal[0],
            register: horizontal[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the dashboard panel
pub struct DashboardLayout {
    /// Income, expense and net
    pub totals: Rect,
    /// Budget-vs-actual table
    pub budgets: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Totals
                Constraint::Min(3),    // Budgets
            ])
            .split(area);

        Self {
            totals: chunks[0],
            budgets: chunks[1],
        }
    }
}
