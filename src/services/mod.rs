//! Service layer for FinOrden
//!
//! Business logic on top of the storage layer: the session ledger, entry
//! validation, and the pure filter/aggregate functions the views are built on.

pub mod aggregate;
pub mod entry;
pub mod ledger;

pub use aggregate::{
    filter_by_period, history, is_alert, recent, Totals, TypeFilter, RECENT_LIMIT,
};
pub use entry::MovementInput;
pub use ledger::{Ledger, SubmitOutcome};
