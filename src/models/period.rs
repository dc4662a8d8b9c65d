//! Monthly periods and period selectors
//!
//! Movements are bucketed by a `YYYY-MM` period key taken straight from their
//! date string. Dashboard and chart views pick a bucket through a
//! [`PeriodFilter`] evaluated against a reference date.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Derive the `YYYY-MM` period key of a date string
///
/// The key is the first 7 characters of the input. Nothing is validated, so a
/// malformed date yields a malformed (but stable) key.
pub fn period_of(date: &str) -> String {
    date.chars().take(7).collect()
}

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Create a period; `month` is 1-based
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The period containing a date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month immediately before this one
    pub fn prev(&self) -> Self {
        if self.month <= 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// The `YYYY-MM` key for this period
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Which slice of time the dashboard and chart look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    /// Every movement
    #[default]
    All,
    /// Movements in the month of the reference date
    CurrentMonth,
    /// Movements in the month before the reference date
    PreviousMonth,
}

impl PeriodFilter {
    /// Parse a selector string
    ///
    /// Unknown selectors behave like `all`.
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim() {
            "current-month" => Self::CurrentMonth,
            "previous-month" => Self::PreviousMonth,
            _ => Self::All,
        }
    }

    /// The canonical selector string
    pub fn selector(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::CurrentMonth => "current-month",
            Self::PreviousMonth => "previous-month",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All time",
            Self::CurrentMonth => "Current month",
            Self::PreviousMonth => "Previous month",
        }
    }

    /// The period key this filter keeps, or `None` for the identity filter
    pub fn target(&self, today: NaiveDate) -> Option<String> {
        match self {
            Self::All => None,
            Self::CurrentMonth => Some(Period::containing(today).key()),
            Self::PreviousMonth => Some(Period::containing(today).prev().key()),
        }
    }

    /// Cycle to the next selector (used by the TUI)
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::CurrentMonth,
            Self::CurrentMonth => Self::PreviousMonth,
            Self::PreviousMonth => Self::All,
        }
    }
}

impl From<&str> for PeriodFilter {
    fn from(selector: &str) -> Self {
        Self::from_selector(selector)
    }
}

impl fmt::Display for PeriodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
