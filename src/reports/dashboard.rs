//! Dashboard report
//!
//! Totals, balance and the overspending alert for the selected period, plus
//! the most recent movements in it.

use chrono::NaiveDate;

use crate::display::{format_money_colored, format_movement_table, separator};
use crate::models::{Movement, PeriodFilter};
use crate::services::aggregate::{filter_by_period, is_alert, recent, Totals, RECENT_LIMIT};

/// Dashboard for one period selection
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub period: PeriodFilter,
    pub totals: Totals,
    /// Expenses exceed income in a non-empty period
    pub alert: bool,
    /// Up to five most recent movements of the period, newest first
    pub recent: Vec<Movement>,
    /// Number of movements in the period
    pub count: usize,
}

impl DashboardView {
    /// Build the dashboard for `period` as seen on `today`
    pub fn generate(movements: &[Movement], period: PeriodFilter, today: NaiveDate) -> Self {
        let subset = filter_by_period(movements, period, today);
        let totals = Totals::from_movements(subset.iter().copied());

        Self {
            period,
            totals,
            alert: is_alert(&subset, &totals),
            recent: recent(&subset, RECENT_LIMIT).into_iter().cloned().collect(),
            count: subset.len(),
        }
    }

    /// Format for terminal output
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.period.label()));
        output.push_str(&separator(40));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>14}\n",
            "Income",
            self.totals.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<12} {:>14}\n",
            "Expense",
            self.totals.expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<12} {}\n",
            "Balance",
            format_money_colored(self.totals.balance, symbol, 14)
        ));

        if self.alert {
            output.push_str("\n⚠ Expenses exceed income for this period\n");
        }

        output.push_str(&format!(
            "\nRecent movements ({} of {})\n",
            self.recent.len(),
            self.count
        ));
        let rows: Vec<&Movement> = self.recent.iter().collect();
        output.push_str(&format_movement_table(&rows, symbol));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MovementType};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_alert_and_negative_balance() {
        let movements = vec![
            Movement::new(1, MovementType::Income, Money::from_cents(10_000), "2024-01-02"),
            Movement::new(2, MovementType::Expense, Money::from_cents(15_000), "2024-01-03"),
        ];

        let view = DashboardView::generate(&movements, PeriodFilter::CurrentMonth, today());

        assert!(view.alert);
        assert_eq!(view.totals.balance.cents(), -5_000);
        assert_eq!(view.recent[0].id, 2);
        assert!(view.format_terminal("$").contains("Expenses exceed income"));
    }

    #[test]
    fn test_totals_column_aligned() {
        let movements = vec![
            Movement::new(1, MovementType::Income, Money::from_cents(10_000), "2024-01-02"),
            Movement::new(2, MovementType::Expense, Money::from_cents(2_500), "2024-01-03"),
        ];
        let output = DashboardView::generate(&movements, PeriodFilter::All, today())
            .format_terminal("$");

        let widths: Vec<usize> = output
            .lines()
            .filter(|l| ["Income", "Expense", "Balance"].iter().any(|k| l.starts_with(k)))
            .map(|l| {
                l.replace("\x1b[32m", "")
                    .replace("\x1b[31m", "")
                    .replace("\x1b[0m", "")
                    .chars()
                    .count()
            })
            .collect();

        assert_eq!(widths, vec![27, 27, 27]);
    }

    #[test]
    fn test_empty_period() {
        let movements = vec![Movement::new(
            1,
            MovementType::Expense,
            Money::from_cents(500),
            "2023-06-01",
        )];

        let view = DashboardView::generate(&movements, PeriodFilter::PreviousMonth, today());

        assert_eq!(view.count, 0);
        assert!(!view.alert);
        assert!(view.recent.is_empty());
        assert!(view.totals.income.is_zero());
        assert!(view.format_terminal("$").contains("No movements found."));
    }

    #[test]
    fn test_recent_capped_at_five() {
        let movements: Vec<Movement> = (1..=7)
            .map(|i| {
                Movement::new(
                    i,
                    MovementType::Income,
                    Money::from_cents(100),
                    format!("2024-01-0{}", i),
                )
            })
            .collect();

        let view = DashboardView::generate(&movements, PeriodFilter::All, today());

        assert_eq!(view.count, 7);
        assert_eq!(view.recent.len(), 5);
        assert_eq!(view.recent[0].date, "2024-01-07");
    }
}
