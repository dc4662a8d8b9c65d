//! Filtering and aggregation over movements
//!
//! Everything here is pure: callers pass the movement list and a reference
//! date, and get borrowed subsets or totals back. Subsets always keep the
//! relative order of the input.

use chrono::NaiveDate;
use std::fmt;

use crate::models::{Money, Movement, MovementType, PeriodFilter};

/// Number of rows in the dashboard's recent list
pub const RECENT_LIMIT: usize = 5;

/// Keep the movements that fall in the period selected by `filter`
pub fn filter_by_period<'a>(
    movements: &'a [Movement],
    filter: PeriodFilter,
    today: NaiveDate,
) -> Vec<&'a Movement> {
    match filter.target(today) {
        None => movements.iter().collect(),
        Some(target) => movements
            .iter()
            .filter(|m| m.period_key() == target)
            .collect(),
    }
}

/// Income, expense and balance of a set of movements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl Totals {
    /// Sum a set of movements; an empty set yields zeros
    pub fn from_movements<'a, I>(movements: I) -> Self
    where
        I: IntoIterator<Item = &'a Movement>,
    {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for movement in movements {
            match movement.kind {
                MovementType::Income => income += movement.amount,
                MovementType::Expense => expense += movement.amount,
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    /// Whether expenses outgrew income
    pub fn is_overspent(&self) -> bool {
        self.expense > self.income
    }
}

/// The overspending alert: a non-empty subset whose expenses exceed income
pub fn is_alert(subset: &[&Movement], totals: &Totals) -> bool {
    !subset.is_empty() && totals.is_overspent()
}

/// Most recent movements first, at most `limit` of them
///
/// Dates are compared as strings; equal dates keep their input order.
pub fn recent<'a>(subset: &[&'a Movement], limit: usize) -> Vec<&'a Movement> {
    let mut sorted = subset.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// Type filter for the history listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(MovementType),
}

impl TypeFilter {
    pub fn selector(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(kind) => kind.as_str(),
        }
    }

    pub fn matches(&self, movement: &Movement) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => movement.kind == *kind,
        }
    }

    /// Cycle all -> income -> expense -> all (used by the TUI)
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(MovementType::Income),
            Self::Only(MovementType::Income) => Self::Only(MovementType::Expense),
            Self::Only(MovementType::Expense) => Self::All,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// Full history of one type (or all), newest first, unlimited
pub fn history(movements: &[Movement], filter: TypeFilter) -> Vec<&Movement> {
    let mut rows: Vec<&Movement> = movements.iter().filter(|m| filter.matches(m)).collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(id: i64, kind: MovementType, cents: i64, date: &str) -> Movement {
        Movement::new(id, kind, Money::from_cents(cents), date)
    }

    fn sample() -> Vec<Movement> {
        vec![
            m(1, MovementType::Income, 10_000, "2023-12-20"),
            m(2, MovementType::Expense, 2_500, "2024-01-03"),
            m(3, MovementType::Income, 5_000, "2024-01-10"),
            m(4, MovementType::Expense, 1_000, "2023-12-01"),
            m(5, MovementType::Expense, 700, "2024-01-10"),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn ids(list: &[&Movement]) -> Vec<i64> {
        list.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let movements = sample();
        let filtered = filter_by_period(&movements, PeriodFilter::All, today());
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_current_month_preserves_order() {
        let movements = sample();
        let filtered = filter_by_period(&movements, PeriodFilter::CurrentMonth, today());
        assert_eq!(ids(&filtered), vec![2, 3, 5]);
    }

    #[test]
    fn test_previous_month_rolls_over_year() {
        let movements = sample();
        let filtered = filter_by_period(&movements, PeriodFilter::PreviousMonth, today());
        assert_eq!(ids(&filtered), vec![1, 4]);
    }

    #[test]
    fn test_unknown_selector_is_identity() {
        let movements = sample();
        let filter = PeriodFilter::from_selector("someday");
        assert_eq!(filter_by_period(&movements, filter, today()).len(), 5);
    }

    #[test]
    fn test_totals_and_balance() {
        let movements = sample();
        let totals = Totals::from_movements(&movements);
        assert_eq!(totals.income.cents(), 15_000);
        assert_eq!(totals.expense.cents(), 4_200);
        assert_eq!(totals.balance, totals.income - totals.expense);
    }

    #[test]
    fn test_empty_totals_are_zero() {
        let totals = Totals::from_movements(Vec::<&Movement>::new());
        assert_eq!(totals, Totals::default());
        assert!(totals.balance.is_zero());
        assert!(!is_alert(&[], &totals));
    }

    #[test]
    fn test_alert_when_expenses_exceed_income() {
        let movements = vec![
            m(1, MovementType::Income, 10_000, "2024-01-01"),
            m(2, MovementType::Expense, 15_000, "2024-01-02"),
        ];
        let subset = filter_by_period(&movements, PeriodFilter::All, today());
        let totals = Totals::from_movements(subset.iter().copied());

        assert!(is_alert(&subset, &totals));
        assert_eq!(totals.balance.cents(), -5_000);
    }

    #[test]
    fn test_no_alert_when_balanced() {
        let movements = vec![
            m(1, MovementType::Income, 10_000, "2024-01-01"),
            m(2, MovementType::Expense, 10_000, "2024-01-02"),
        ];
        let subset: Vec<&Movement> = movements.iter().collect();
        let totals = Totals::from_movements(subset.iter().copied());
        assert!(!is_alert(&subset, &totals));
    }

    #[test]
    fn test_recent_sorted_and_limited() {
        let movements: Vec<Movement> = (1..=8)
            .map(|i| m(i, MovementType::Income, 100, &format!("2024-01-0{}", i)))
            .collect();
        let subset: Vec<&Movement> = movements.iter().collect();

        let latest = recent(&subset, RECENT_LIMIT);
        assert_eq!(ids(&latest), vec![8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_recent_shorter_than_limit_keeps_ties_in_order() {
        let movements = sample();
        let subset = filter_by_period(&movements, PeriodFilter::CurrentMonth, today());

        let latest = recent(&subset, RECENT_LIMIT);
        assert_eq!(latest.len(), 3);
        assert_eq!(ids(&latest), vec![3, 5, 2]);
    }

    #[test]
    fn test_history_filters_by_type() {
        let movements = sample();

        let expenses = history(&movements, TypeFilter::Only(MovementType::Expense));
        assert_eq!(ids(&expenses), vec![5, 2, 4]);

        let all = history(&movements, TypeFilter::All);
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].date, "2024-01-10");
    }

    #[test]
    fn test_type_filter_cycle() {
        assert_eq!(TypeFilter::All.selector(), "all");
        assert_eq!(
            TypeFilter::All.next(),
            TypeFilter::Only(MovementType::Income)
        );
        assert_eq!(TypeFilter::All.next().next().next(), TypeFilter::All);
    }

    #[test]
    fn test_huge_stored_amounts_do_not_overflow_totals() {
        let movements: Vec<Movement> = serde_json::from_str(
            r#"[{"id":1,"type":"income","amount":6e16,"date":"2024-01-01"},
                {"id":2,"type":"income","amount":6e16,"date":"2024-01-02"},
                {"id":3,"type":"expense","amount":6e16,"date":"2024-01-03"}]"#,
        )
        .unwrap();

        let totals = Totals::from_movements(&movements);
        assert_eq!(totals.income.cents(), i64::MAX);
        assert!(totals.balance.is_positive());
        assert!(!totals.is_overspent());
    }
}
