//! Dashboard view
//!
//! Income, expense and balance for the selected period, the overspending
//! banner, and the five most recent movements.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

use super::history::movement_table;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DashboardLayout::new(area);
    let symbol = app.settings.currency_symbol.as_str();
    let totals = app.dashboard.totals;

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(layout.totals);

    let balance_color = if totals.balance.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    render_card(frame, cards[0], "Income", totals.income, symbol, Color::Green);
    render_card(frame, cards[1], "Expense", totals.expense, symbol, Color::Red);
    render_card(frame, cards[2], "Balance", totals.balance, symbol, balance_color);

    if app.dashboard.alert {
        let banner = Paragraph::new(Line::from(Span::styled(
            " ⚠ Expenses exceed income for this period ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(banner, layout.alert);
    }

    let title = format!(
        " Recent movements: {} ({} of {}) ",
        app.dashboard.period.label(),
        app.dashboard.recent.len(),
        app.dashboard.count
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.dashboard.recent.is_empty() {
        let text = Paragraph::new("No movements in this period. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, layout.recent);
        return;
    }

    let table = movement_table(&app.dashboard.recent, symbol).block(block);
    frame.render_widget(table, layout.recent);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    amount: Money,
    symbol: &str,
    color: Color,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let value = Paragraph::new(Line::from(Span::styled(
        amount.format_with_symbol(symbol),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(block);

    frame.render_widget(value, area);
}
