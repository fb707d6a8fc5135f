//! TUI Views module
//!
//! Header, dashboard, register and status bar.

pub mod dashboard;
pub mod header;
pub mod register;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, app, layout.header);
    dashboard::render(frame, app, layout.dashboard);
    register::render(frame, app, layout.register);
    status_bar::render(frame, app, layout.status_bar);
}
