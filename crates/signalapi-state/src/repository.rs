//! The store capability shared by ingestion and the HTTP layer.

use crate::error::StateResult;
use crate::types::Signal;

/// Keyed storage of [`Signal`] records.
///
/// Callers receive an implementation explicitly; nothing in this workspace
/// reaches for a global store.
pub trait SignalRepository {
    /// Number of stored signals.
    fn count(&self) -> StateResult<u64>;

    /// Every stored signal, as one consistent snapshot.
    fn find_all(&self) -> StateResult<Vec<Signal>>;

    /// Look up a signal by its node identifier.
    fn find_by_node_id(&self, node_id: &str) -> StateResult<Option<Signal>>;

    /// Insert a batch of signals. Existing keys are overwritten.
    fn insert_many(&self, signals: &[Signal]) -> StateResult<()>;

    /// Remove every stored signal.
    fn clear(&self) -> StateResult<()>;
}
