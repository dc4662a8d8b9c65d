//! Movement model
//!
//! A movement is one income or expense record. The JSON shape is the one held
//! by the durable store and served by seed resources:
//!
//! ```json
//! {"id": 1, "type": "income", "amount": 850.0, "date": "2024-01-01",
//!  "category": "sales", "description": "Cash sale"}
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::period_of;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Income,
    Expense,
}

impl MovementType {
    /// Lowercase name used in JSON and CSV
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// The other type
    pub fn toggled(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    /// Unique identifier, derived from the creation timestamp
    pub id: i64,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: MovementType,

    /// Positive amount
    pub amount: Money,

    /// ISO `YYYY-MM-DD` date, kept as entered
    pub date: String,

    /// Free-text category
    #[serde(default)]
    pub category: String,

    /// Optional note
    #[serde(default)]
    pub description: String,
}

impl Movement {
    /// Create a movement with an empty category and description
    pub fn new(id: i64, kind: MovementType, amount: Money, date: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            amount,
            date: date.into(),
            category: String::new(),
            description: String::new(),
        }
    }

    /// Create a movement with every field set
    pub fn with_details(
        id: i64,
        kind: MovementType,
        amount: Money,
        date: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            date: date.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// The `YYYY-MM` bucket this movement falls in
    pub fn period_key(&self) -> String {
        period_of(&self.date)
    }

    pub fn is_income(&self) -> bool {
        self.kind == MovementType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == MovementType::Expense
    }
}
