//! History view
//!
//! Every movement of the selected type, newest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Movement, MovementType};
use crate::tui::app::App;

/// Table of movements shared with the dashboard
pub fn movement_table<'a>(movements: &'a [Movement], symbol: &str) -> Table<'a> {
    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(9),  // Type
        Constraint::Length(16), // Category
        Constraint::Min(10),    // Description
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = movements
        .iter()
        .map(|movement| {
            let color = match movement.kind {
                MovementType::Income => Color::Green,
                MovementType::Expense => Color::Red,
            };
            Row::new(vec![
                Cell::from(movement.date.as_str()),
                Cell::from(movement.kind.as_str()).style(Style::default().fg(color)),
                Cell::from(movement.category.as_str()),
                Cell::from(movement.description.as_str()),
                Cell::from(format!(
                    "{:>13}",
                    movement.amount.format_with_symbol(symbol)
                ))
                .style(Style::default().fg(color)),
            ])
        })
        .collect();

    Table::new(rows, widths).header(header)
}

/// Render the history table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(
        " History: {} ({}) │ t:Type filter ",
        app.history.type_filter,
        app.history.rows.len()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.history.rows.is_empty() {
        let text = Paragraph::new("No movements. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let table = movement_table(&app.history.rows, &app.settings.currency_symbol)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_history_index));

    frame.render_stateful_widget(table, area, &mut state);
}
