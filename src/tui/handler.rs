//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or to the main views.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            app.set_today(Local::now().date_naive());
        }
        Event::Resize(_, _) => {}
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.has_dialog() {
        match app.active_dialog {
            ActiveDialog::AddMovement => dialogs::movement::handle_key(app, key),
            ActiveDialog::None => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        // Views
        KeyCode::Char('1') => app.switch_view(ActiveView::Dashboard),
        KeyCode::Char('2') => app.switch_view(ActiveView::History),
        KeyCode::Char('3') => app.switch_view(ActiveView::Chart),
        KeyCode::Tab => app.next_view(),

        // Actions
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddMovement),
        KeyCode::Char('p') => app.cycle_period(),
        KeyCode::Char('t') => app.cycle_type_filter(),
        KeyCode::Char('x') => app.export_csv(),

        // History navigation
        KeyCode::Char('j') | KeyCode::Down if app.active_view == ActiveView::History => {
            app.move_down()
        }
        KeyCode::Char('k') | KeyCode::Up if app.active_view == ActiveView::History => {
            app.move_up()
        }

        _ => {}
    }
}
