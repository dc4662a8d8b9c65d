//! Ledger service
//!
//! Owns the in-memory movement list for a session. The list is loaded once
//! through the persistence gateway, only ever appended to, and written back
//! in full after every append.

use chrono::{NaiveDate, Utc};

use crate::error::{FinordenError, FinordenResult};
use crate::models::Movement;
use crate::storage::{LoadSource, PersistenceGateway};

use super::entry::MovementInput;

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub movement: Movement,
    /// Whether the updated list reached the durable store
    pub persisted: bool,
}

/// The movement list of the running session
pub struct Ledger {
    movements: Vec<Movement>,
    gateway: PersistenceGateway,
    source: LoadSource,
}

impl Ledger {
    /// Load the movement list through the gateway
    pub fn open(gateway: PersistenceGateway, today: NaiveDate) -> Self {
        let outcome = gateway.load(today);
        Self {
            movements: outcome.movements,
            gateway,
            source: outcome.source,
        }
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Where the movements came from at startup
    pub fn source(&self) -> LoadSource {
        self.source
    }

    /// Stored records skipped at load because they are not movements
    pub fn set_aside_count(&self) -> usize {
        self.gateway.set_aside_count()
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Validate the input and append the new movement
    pub fn submit(&mut self, input: &MovementInput) -> FinordenResult<SubmitOutcome> {
        self.submit_at(input, Utc::now().timestamp_millis())
    }

    /// Like [`submit`](Self::submit) with an explicit clock in milliseconds
    pub fn submit_at(
        &mut self,
        input: &MovementInput,
        now_ms: i64,
    ) -> FinordenResult<SubmitOutcome> {
        let movement = input.to_movement(self.next_id(now_ms)?)?;

        self.movements.push(movement.clone());
        let persisted = self.gateway.save(&self.movements);

        tracing::info!(
            id = movement.id,
            kind = %movement.kind,
            amount = %movement.amount,
            persisted,
            "Added movement"
        );

        Ok(SubmitOutcome {
            movement,
            persisted,
        })
    }

    /// Id for a movement created at `now_ms`
    ///
    /// The creation timestamp, bumped past the largest existing id when two
    /// submits land in the same millisecond. When the largest id is already
    /// `i64::MAX`, the id goes just below the smallest one instead.
    pub fn next_id(&self, now_ms: i64) -> FinordenResult<i64> {
        let ids = self.movements.iter().map(|m| m.id);
        let Some(max_id) = ids.clone().max() else {
            return Ok(now_ms);
        };
        if max_id < now_ms {
            return Ok(now_ms);
        }

        max_id
            .checked_add(1)
            .or_else(|| ids.min().and_then(|min_id| min_id.checked_sub(1)))
            .ok_or_else(|| FinordenError::Storage("No free movement id left".into()))
    }
}
