//! Application state for the TUI
//!
//! The App struct holds the session ledger, the current filters and the view
//! models derived from them. View models are recomputed by [`App::refresh`]
//! after every change, so rendering never touches the ledger directly.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::export::{export_to_file, EXPORT_FILENAME};
use crate::models::PeriodFilter;
use crate::reports::{ChartData, DashboardView, HistoryView};
use crate::services::{Ledger, TypeFilter};
use crate::storage::LoadSource;

use super::dialogs::movement::MovementFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    History,
    Chart,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [Self::Dashboard, Self::History, Self::Chart];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::History => "History",
            Self::Chart => "Chart",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::History => 1,
            Self::Chart => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Dashboard => Self::History,
            Self::History => Self::Chart,
            Self::Chart => Self::Dashboard,
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddMovement,
}

/// Main application state
pub struct App<'a> {
    pub ledger: Ledger,

    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_view: ActiveView,

    pub active_dialog: ActiveDialog,

    /// Reference date for period filters and new movements
    pub today: NaiveDate,

    /// Period selection for the dashboard and chart
    pub period: PeriodFilter,

    /// Type filter for the history view
    pub type_filter: TypeFilter,

    pub dashboard: DashboardView,
    pub history: HistoryView,
    pub chart: ChartData,

    /// Selected row in the history table
    pub selected_history_index: usize,

    pub movement_form: MovementFormState,

    pub notifications: NotificationQueue,

    /// Where `x` writes the CSV export
    pub export_path: PathBuf,
}

impl<'a> App<'a> {
    pub fn new(ledger: Ledger, settings: &'a Settings, today: NaiveDate) -> Self {
        let period = settings.period_filter();
        let type_filter = TypeFilter::All;
        let movements = ledger.movements();

        let dashboard = DashboardView::generate(movements, period, today);
        let history = HistoryView::generate(movements, type_filter);
        let chart = ChartData::generate(movements, period, today);

        let mut notifications = NotificationQueue::new();
        if ledger.source() != LoadSource::Store {
            notifications.push(Notification::info(format!(
                "Started with {}",
                ledger.source().label()
            )));
        }
        if ledger.set_aside_count() > 0 {
            notifications.push(Notification::warning(format!(
                "{} stored record(s) could not be read and were left untouched",
                ledger.set_aside_count()
            )));
        }

        Self {
            ledger,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            today,
            period,
            type_filter,
            dashboard,
            history,
            chart,
            selected_history_index: 0,
            movement_form: MovementFormState::new(today),
            notifications,
            export_path: PathBuf::from(EXPORT_FILENAME),
        }
    }

    /// Recompute every view model from the ledger
    pub fn refresh(&mut self) {
        let movements = self.ledger.movements();
        self.dashboard = DashboardView::generate(movements, self.period, self.today);
        self.history = HistoryView::generate(movements, self.type_filter);
        self.chart = ChartData::generate(movements, self.period, self.today);

        let rows = self.history.rows.len();
        self.selected_history_index = self.selected_history_index.min(rows.saturating_sub(1));
    }

    /// Move the reference date, refreshing when the day changed
    pub fn set_today(&mut self, today: NaiveDate) {
        if today != self.today {
            self.today = today;
            self.refresh();
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn next_view(&mut self) {
        self.active_view = self.active_view.next();
    }

    /// Cycle all -> current month -> previous month
    pub fn cycle_period(&mut self) {
        self.period = self.period.next();
        self.refresh();
    }

    /// Cycle the history type filter
    pub fn cycle_type_filter(&mut self) {
        self.type_filter = self.type_filter.next();
        self.selected_history_index = 0;
        self.refresh();
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::AddMovement {
            self.movement_form = MovementFormState::new(self.today);
        }
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Submit the entry form
    ///
    /// On success the dialog closes, every view refreshes, the form resets and
    /// a short-lived notice confirms the entry. Validation errors stay in the
    /// form.
    pub fn submit_movement(&mut self) {
        let input = self.movement_form.to_input();

        match self.ledger.submit(&input) {
            Ok(outcome) => {
                self.close_dialog();
                self.refresh();
                self.movement_form = MovementFormState::new(self.today);

                let notice = Duration::from_secs(self.settings.notice_duration_secs);
                self.notifications.push(
                    Notification::success(format!(
                        "Movement added: {} {}",
                        outcome.movement.kind,
                        outcome
                            .movement
                            .amount
                            .format_with_symbol(&self.settings.currency_symbol)
                    ))
                    .with_duration(notice),
                );

                if !outcome.persisted {
                    self.notifications.push(Notification::warning(
                        "Could not save; changes last until you quit",
                    ));
                }
            }
            Err(e) => self.movement_form.set_error(e.to_string()),
        }
    }

    /// Write the full movement list to the export file
    pub fn export_csv(&mut self) {
        match export_to_file(self.ledger.movements(), &self.export_path) {
            Ok(count) => self.notifications.push(Notification::success(format!(
                "Exported {} movements to {}",
                count,
                self.export_path.display()
            ))),
            Err(e) => self.notifications.push(Notification::error(e.to_string())),
        }
    }

    pub fn move_up(&mut self) {
        self.selected_history_index = self.selected_history_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_history_index + 1 < self.history.rows.len() {
            self.selected_history_index += 1;
        }
    }
}
