//! Header view
//!
//! App title, the display currency and the active filters.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{category_name, CategorySelector};
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let filters = app.state.filters();
    let currency = app.state.currency();

    let category = match &filters.category {
        CategorySelector::All => "all".to_string(),
        CategorySelector::Only(id) => category_name(app.state.categories(), id).to_string(),
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} {} ", currency.symbol(), currency.code()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            format!(
                "{} → {}",
                filters.date_from.format(&app.settings.date_format),
                filters.date_to.format(&app.settings.date_format)
            ),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ category: "),
        Span::styled(category, Style::default().fg(Color::Cyan)),
        Span::raw(" │ type: "),
        Span::styled(filters.kind.to_string(), Style::default().fg(Color::Cyan)),
    ]);

    let block = Block::default()
        .title(" Pocket Ledger ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
