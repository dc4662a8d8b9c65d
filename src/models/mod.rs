//! Core data models for FinOrden
//!
//! Movements, the money amounts they carry, and the monthly periods used to
//! slice them.

pub mod money;
pub mod movement;
pub mod period;

pub use money::{Money, MoneyParseError};
pub use movement::{Movement, MovementType};
pub use period::{period_of, Period, PeriodFilter};
