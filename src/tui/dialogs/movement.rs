//! Movement entry dialog
//!
//! Modal form for recording an income or expense, with tab navigation and
//! inline validation errors.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::MovementType;
use crate::services::MovementInput;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the movement form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementField {
    #[default]
    Type,
    Amount,
    Date,
    Category,
    Description,
}

impl MovementField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Type => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Type,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Type => Self::Description,
            Self::Amount => Self::Type,
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Description => Self::Category,
        }
    }
}

/// State for the movement form dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementFormState {
    pub focused_field: MovementField,
    pub kind: MovementType,
    pub amount_input: TextInput,
    pub date_input: TextInput,
    pub category_input: TextInput,
    pub description_input: TextInput,
    /// Error message to display
    pub error_message: Option<String>,
}

impl MovementFormState {
    /// Blank income form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            focused_field: MovementField::Type,
            kind: MovementType::Income,
            amount_input: TextInput::new().placeholder("0.00"),
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            category_input: TextInput::new().placeholder("e.g. sales, supplies"),
            description_input: TextInput::new().placeholder("Optional note"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The text input under focus; `None` on the type selector
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            MovementField::Type => None,
            MovementField::Amount => Some(&mut self.amount_input),
            MovementField::Date => Some(&mut self.date_input),
            MovementField::Category => Some(&mut self.category_input),
            MovementField::Description => Some(&mut self.description_input),
        }
    }

    /// Raw form values for validation
    pub fn to_input(&self) -> MovementInput {
        MovementInput {
            kind: self.kind,
            amount: self.amount_input.value().to_string(),
            date: self.date_input.value().to_string(),
            category: self.category_input.value().to_string(),
            description: self.description_input.value().to_string(),
        }
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the movement dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 50, frame.area());
    let form = &app.movement_form;

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Movement ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Type
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    render_type_selector(frame, chunks[0], form);

    let fields = [
        (MovementField::Amount, "Amount", &form.amount_input),
        (MovementField::Date, "Date", &form.date_input),
        (MovementField::Category, "Category", &form.category_input),
        (MovementField::Description, "Description", &form.description_input),
    ];
    for (i, (field, label, input)) in fields.into_iter().enumerate() {
        render_field(frame, chunks[i + 1], label, input, form.focused_field == field);
    }

    if let Some(ref error) = form.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[6]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Space]", Style::default().fg(Color::Yellow)),
        Span::raw(" Type  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

fn render_type_selector(frame: &mut Frame, area: Rect, form: &MovementFormState) {
    let focused = form.focused_field == MovementField::Type;
    let mut spans = vec![Span::styled(format!("{:>12}: ", "Type"), label_style(focused))];

    for kind in [MovementType::Income, MovementType::Expense] {
        let style = if kind == form.kind {
            let color = match kind {
                MovementType::Income => Color::Green,
                MovementType::Expense => Color::Red,
            };
            Style::default().fg(Color::Black).bg(color)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", kind), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a single form field, with a cursor when focused
fn render_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let mut spans = vec![Span::styled(format!("{:>12}: ", label), label_style(focused))];

    if focused {
        let value_style = Style::default().fg(Color::White);
        let (before, at, after) = input.split_at_cursor();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            at.unwrap_or(' ').to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
    } else if input.value().is_empty() {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            input.value().to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the movement dialog
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.movement_form;

    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => app.submit_movement(),
        _ if form.focused_field == MovementField::Type => match key.code {
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                form.kind = form.kind.toggled();
            }
            KeyCode::Char('i') => form.kind = MovementType::Income,
            KeyCode::Char('e') => form.kind = MovementType::Expense,
            _ => {}
        },
        _ => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                match key.code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_new_form_is_blank_and_dated_today() {
        let form = MovementFormState::new(today());
        assert_eq!(form.date_input.value(), "2024-03-05");
        assert!(form.amount_input.value().is_empty());
        assert_eq!(form.kind, MovementType::Income);
    }

    #[test]
    fn test_field_cycle() {
        let mut field = MovementField::Type;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, MovementField::Type);
        assert_eq!(MovementField::Type.prev(), MovementField::Description);
    }

    #[test]
    fn test_to_input() {
        let mut form = MovementFormState::new(today());
        form.kind = MovementType::Expense;
        form.amount_input = TextInput::new().content("12.30");

        let input = form.to_input();
        assert_eq!(input.kind, MovementType::Expense);
        assert_eq!(input.amount, "12.30");
        assert_eq!(input.date, "2024-03-05");
    }

    #[test]
    fn test_type_field_has_no_text_input() {
        let mut form = MovementFormState::new(today());
        assert!(form.focused_input().is_none());
        form.next_field();
        assert!(form.focused_input().is_some());
    }
}
