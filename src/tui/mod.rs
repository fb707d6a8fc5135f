//! Terminal User Interface module
//!
//! A single-screen ratatui interface: header with the active filters and
//! currency, the dashboard, and the filtered register. Data entry stays on the
//! command line; the TUI browses, filters and deletes.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
