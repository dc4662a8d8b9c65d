//! Movement entry
//!
//! Raw form input and its validation. Both the TUI entry dialog and the CLI
//! `add` command go through [`MovementInput::validate`] before anything is
//! appended to the ledger.

use crate::error::{FinordenError, FinordenResult};
use crate::models::{Money, Movement, MovementType};

/// Raw text of the entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementInput {
    pub kind: MovementType,
    pub amount: String,
    pub date: String,
    pub category: String,
    pub description: String,
}

impl MovementInput {
    /// Blank form of the given type dated `date`
    pub fn blank(kind: MovementType, date: impl Into<String>) -> Self {
        Self {
            kind,
            amount: String::new(),
            date: date.into(),
            category: String::new(),
            description: String::new(),
        }
    }

    /// Check the input and return the parsed amount
    pub fn validate(&self) -> FinordenResult<Money> {
        let amount = Money::parse(&self.amount).map_err(|_| {
            FinordenError::Validation(format!(
                "Invalid amount '{}'. Enter a number like 120.50",
                self.amount.trim()
            ))
        })?;

        if !amount.is_positive() {
            return Err(FinordenError::Validation(
                "Amount must be greater than zero".into(),
            ));
        }

        if self.date.trim().is_empty() {
            return Err(FinordenError::Validation("Date is required".into()));
        }

        Ok(amount)
    }

    /// Validate and build the movement with the given id
    pub fn to_movement(&self, id: i64) -> FinordenResult<Movement> {
        let amount = self.validate()?;

        Ok(Movement::with_details(
            id,
            self.kind,
            amount,
            self.date.trim(),
            self.category.clone(),
            self.description.trim(),
        ))
    }
}
