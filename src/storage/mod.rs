pub mod json_backend;

use crate::errors::LedgerError;
use crate::ledger::LedgerState;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing ledger snapshots.
pub trait StorageBackend: Send + Sync {
    /// Reads the persisted snapshot, or `None` when nothing has been
    /// saved yet.
    fn load(&self) -> Result<Option<LedgerState>>;

    /// Writes the snapshot, replacing whatever was stored before.
    fn save(&self, state: &LedgerState) -> Result<()>;
}

pub use json_backend::JsonStorage;
