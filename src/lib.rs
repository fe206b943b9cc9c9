#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the state machine, recurrence engine, and
//! aggregation primitives that power personal expense-tracking
//! front ends.
//!
//! The ledger lives in an immutable [`ledger::LedgerState`] snapshot;
//! every mutation flows through [`command::apply`] and produces a new
//! snapshot. [`tracker::ExpenseTracker`] wraps the snapshot together
//! with persistence and the recurring-expense schedule for hosts that
//! want a single handle.

pub mod aggregate;
pub mod command;
pub mod errors;
pub mod export;
pub mod filter;
pub mod ledger;
pub mod recurrence;
pub mod storage;
pub mod time;
pub mod tracker;

use std::sync::Once;

pub use command::{apply, Command};
pub use errors::LedgerError;
pub use ledger::LedgerState;
pub use storage::{JsonStorage, StorageBackend};
pub use time::{Clock, FixedClock, SystemClock};
pub use tracker::ExpenseTracker;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Expense Core tracing initialized.");
    });
}
