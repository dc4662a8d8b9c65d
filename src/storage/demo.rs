//! Built-in demo movements
//!
//! Last resort of the load chain when neither the store nor the seed resource
//! produced data.

use chrono::{Duration, NaiveDate};

use crate::models::{Money, Movement, MovementType};

/// Three demo movements dated three, two and one day before `today`
pub fn default_movements(today: NaiveDate) -> Vec<Movement> {
    let days_ago = |n: i64| (today - Duration::days(n)).format("%Y-%m-%d").to_string();

    vec![
        Movement::with_details(
            1,
            MovementType::Income,
            Money::from_cents(85_000),
            days_ago(3),
            "sales",
            "Cash sale",
        ),
        Movement::with_details(
            2,
            MovementType::Expense,
            Money::from_cents(32_050),
            days_ago(2),
            "supplies",
            "Raw material purchase",
        ),
        Movement::with_details(
            3,
            MovementType::Income,
            Money::from_cents(120_000),
            days_ago(1),
            "services",
            "Service completed",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_are_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let movements = default_movements(today);

        let dates: Vec<_> = movements.iter().map(|m| m.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn test_ids_and_amounts() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let movements = default_movements(today);

        let ids: Vec<_> = movements.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(movements[1].kind, MovementType::Expense);
        assert_eq!(movements[1].amount.to_decimal_string(), "320.50");
        assert!(movements.iter().all(|m| m.amount.is_positive()));
    }
}
