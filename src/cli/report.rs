//! Report CLI commands: dashboard and chart

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::error::FinordenResult;
use crate::models::PeriodFilter;
use crate::reports::{ChartData, DashboardView};
use crate::services::Ledger;

/// Period selection shared by `dashboard` and `chart`
#[derive(Args, Debug, Default)]
pub struct PeriodArgs {
    /// Period: all, current-month or previous-month (default from settings)
    #[arg(short, long)]
    pub period: Option<String>,
}

impl PeriodArgs {
    /// The selected period; unknown names mean all
    pub fn resolve(&self, settings: &Settings) -> PeriodFilter {
        match &self.period {
            Some(selector) => PeriodFilter::from_selector(selector),
            None => settings.period_filter(),
        }
    }
}

/// Handle `finorden dashboard`
pub fn handle_dashboard_command(
    ledger: &Ledger,
    settings: &Settings,
    args: PeriodArgs,
    today: NaiveDate,
) -> FinordenResult<()> {
    let view = DashboardView::generate(ledger.movements(), args.resolve(settings), today);
    print!("{}", view.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Handle `finorden chart`
pub fn handle_chart_command(
    ledger: &Ledger,
    settings: &Settings,
    args: PeriodArgs,
    today: NaiveDate,
) -> FinordenResult<()> {
    let chart = ChartData::generate(ledger.movements(), args.resolve(settings), today);
    print!("{}", chart.format_terminal(&settings.currency_symbol));
    Ok(())
}
