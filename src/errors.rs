use thiserror::Error;

/// Error type that captures ledger persistence failures.
///
/// The in-memory engine itself is infallible: the reducer, the
/// recurrence generator, and the read-side engines are total functions.
/// Only the storage boundary can fail.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Persistence error: {0}")]
    Persistence(String),
}
