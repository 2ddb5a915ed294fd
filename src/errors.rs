use thiserror::Error;

use crate::ledger::EntryKey;

/// Error type that captures common budget failures.
#[derive(Debug, Error)]
pub enum BudgetError {
    #[error("Invalid entry: key {key}, value {value}")]
    InvalidEntry {
        key: serde_json::Value,
        value: serde_json::Value,
    },
    #[error("No entry for key {0}")]
    KeyNotFound(EntryKey),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0} storage is not implemented")]
    Unimplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, BudgetError>;
