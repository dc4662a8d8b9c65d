//! Chart view
//!
//! Income and expense of the selected period as two bars.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::tui::app::App;

/// Render the income vs expense bar chart
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let colors = [Color::Green, Color::Red];

    let bars: Vec<Bar> = app
        .chart
        .bars
        .iter()
        .zip(app.chart.bar_values())
        .zip(colors)
        .map(|(((label, amount), (_, value)), color)| {
            Bar::default()
                .value(value)
                .label(Line::from(*label))
                .text_value(amount.format_with_symbol(symbol))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let bar_width = (area.width.saturating_sub(8) / 4).clamp(8, 24);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!(" {} │ p:Period ", app.chart.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(4);

    frame.render_widget(chart, area);
}
