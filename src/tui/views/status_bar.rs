//! Status bar view
//!
//! Shows the period selection, movement count, data source and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![
        Span::styled(" Period: ", Style::default().fg(Color::White)),
        Span::styled(app.period.label(), Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
        Span::styled(
            format!("{} movements", app.ledger.len()),
            Style::default().fg(Color::White),
        ),
    ];

    if app.dashboard.alert {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Overspent", Style::default().fg(Color::Red)));
    }

    let hints = " a:Add  p:Period  x:Export CSV  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
