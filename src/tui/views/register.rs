//! Transaction register view
//!
//! Shows the filtered transactions, most recent first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::truncate;
use crate::models::category_name;
use crate::tui::app::App;

/// Render the transaction register
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let transactions = app.state.filtered();
    let block = Block::default()
        .title(format!(" Transactions ({}) ", transactions.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if transactions.is_empty() {
        let text = Paragraph::new("No transactions match the current filters.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(11), // Date
        Constraint::Length(14), // Category
        Constraint::Length(12), // Amount
        Constraint::Min(10),    // Description
    ];

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Category"),
        Cell::from("Amount"),
        Cell::from("Description"),
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .height(1);

    let symbol = app.state.currency().symbol();
    let categories = app.state.categories();

    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            let amount_style = if txn.is_expense() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };

            Row::new(vec![
                Cell::from(txn.date.format(&app.settings.date_format).to_string()),
                Cell::from(truncate(category_name(categories, &txn.category_id), 14)),
                Cell::from(txn.signed_amount().format_with_symbol(symbol)).style(amount_style),
                Cell::from(truncate(&txn.description, 40)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
