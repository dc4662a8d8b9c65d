//! Income vs expense chart data

use chrono::NaiveDate;

use crate::display::{format_bar, separator};
use crate::models::{Money, Movement, PeriodFilter};
use crate::services::aggregate::{filter_by_period, Totals};

const BAR_WIDTH: usize = 30;

/// Two bars, income then expense, for the selected period
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub bars: [(&'static str, Money); 2],
}

impl ChartData {
    pub fn generate(movements: &[Movement], period: PeriodFilter, today: NaiveDate) -> Self {
        let subset = filter_by_period(movements, period, today);
        let totals = Totals::from_movements(subset.iter().copied());

        Self {
            title: format!("Income vs Expense: {}", period.label()),
            bars: [("Income", totals.income), ("Expense", totals.expense)],
        }
    }

    /// Bar heights in whole currency units, for widgets that take integers
    pub fn bar_values(&self) -> [(&'static str, u64); 2] {
        self.bars
            .map(|(label, amount)| (label, amount.units().max(0) as u64))
    }

    /// Format for terminal output
    pub fn format_terminal(&self, symbol: &str) -> String {
        let max = self
            .bars
            .iter()
            .map(|(_, amount)| amount.to_f64())
            .fold(0.0_f64, f64::max);

        let mut output = String::new();
        output.push_str(&self.title);
        output.push('\n');
        output.push_str(&separator(BAR_WIDTH + 26));
        output.push('\n');

        for (label, amount) in &self.bars {
            output.push_str(&format!(
                "{:<8} {} {:>14}\n",
                label,
                format_bar(amount.to_f64(), max, BAR_WIDTH),
                amount.format_with_symbol(symbol)
            ));
        }

        output
    }
}
