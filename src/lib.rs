#![doc(test(attr(deny(warnings))))]

//! Budget Store keeps a named, time-indexed ledger of transactions in
//! memory, behind a storage contract that admits multiple indexing
//! strategies, with JSON import and export.

pub mod errors;
pub mod ledger;
pub mod utils;

pub use errors::{BudgetError, Result};
pub use ledger::{Budget, EntryKey, EntryValue, HashBudget, TimeIndexBudget, TimeRangeBudget};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Store tracing initialized.");
    });
}
