//! History report
//!
//! Every movement of the selected type, newest first. The period selection
//! does not apply here.

use crate::display::format_movement_table;
use crate::models::Movement;
use crate::services::aggregate::{history, TypeFilter};

/// Full movement history for one type filter
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    pub type_filter: TypeFilter,
    pub rows: Vec<Movement>,
}

impl HistoryView {
    pub fn generate(movements: &[Movement], type_filter: TypeFilter) -> Self {
        Self {
            type_filter,
            rows: history(movements, type_filter).into_iter().cloned().collect(),
        }
    }

    /// Format for terminal output
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = format!("History ({}): {} movements\n", self.type_filter, self.rows.len());
        let rows: Vec<&Movement> = self.rows.iter().collect();
        output.push_str(&format_movement_table(&rows, symbol));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MovementType};

    #[test]
    fn test_history_ignores_period_and_sorts() {
        let movements = vec![
            Movement::new(1, MovementType::Income, Money::from_cents(100), "2022-03-01"),
            Movement::new(2, MovementType::Expense, Money::from_cents(200), "2024-01-01"),
            Movement::new(3, MovementType::Income, Money::from_cents(300), "2023-07-04"),
        ];

        let view = HistoryView::generate(&movements, TypeFilter::Only(MovementType::Income));

        let ids: Vec<i64> = view.rows.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(view.format_terminal("$").starts_with("History (income): 2 movements"));
    }
}
