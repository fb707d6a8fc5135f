//! Dashboard view
//!
//! Income/expense/net for the filtered view and budget status for the active
//! month.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::truncate;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DashboardLayout::new(area);
    let dashboard = app.state.dashboard();
    let symbol = app.state.currency().symbol();

    let net = dashboard.net();
    let net_color = if net.is_negative() { Color::Red } else { Color::Green };

    let totals = vec![
        Line::from(vec![
            Span::raw("Income   "),
            Span::styled(
                dashboard.income.format_with_symbol(symbol),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Expense  "),
            Span::styled(
                dashboard.expense.format_with_symbol(symbol),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::raw("Net      "),
            Span::styled(
                net.format_with_symbol(symbol),
                Style::default().fg(net_color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let totals_block = Block::default()
        .title(format!(" {} ", dashboard.month.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(totals).block(totals_block), layout.totals);

    let budgets_block = Block::default()
        .title(" Budgets ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if dashboard.budgets.is_empty() {
        let text = Paragraph::new("No budgets for this month.\nUse `pocket budget set`.")
            .block(budgets_block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, layout.budgets);
        return;
    }

    let header = Row::new(vec!["Category", "Budget", "Spent", "Used"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = dashboard
        .budgets
        .iter()
        .map(|status| {
            let used_color = if status.is_over() {
                Color::Red
            } else if status.percent_used() >= 80.0 {
                Color::Yellow
            } else {
                Color::Green
            };
            Row::new(vec![
                Cell::from(truncate(&status.category_name, 14)),
                Cell::from(status.budgeted.format_with_symbol(symbol)),
                Cell::from(status.spent.format_with_symbol(symbol)),
                Cell::from(format!("{:.0}%", status.percent_used()))
                    .style(Style::default().fg(used_color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(10),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths).header(header).block(budgets_block);
    frame.render_widget(table, layout.budgets);
}
