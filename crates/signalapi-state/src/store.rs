//! SignalStore — redb-backed persistence for telemetry signals.
//!
//! All values are JSON-serialized into redb's `&[u8]` value column. The
//! store supports both on-disk and in-memory backends (the latter for
//! testing).

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata};
use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::repository::SignalRepository;
use crate::tables::SIGNALS;
use crate::types::Signal;

/// Convert any `Display` error into a `StateError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| StateError::$variant(e.to_string())
    };
}

/// Thread-safe signal store backed by redb.
#[derive(Clone)]
pub struct SignalStore {
    db: Arc<Database>,
}

impl fmt::Debug for SignalStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalStore").finish_non_exhaustive()
    }
}

impl SignalStore {
    /// Open (or create) a persistent signal store at the given path.
    pub fn open(path: &Path) -> StateResult<Self> {
        let db = Database::create(path).map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!(?path, "signal store opened");
        Ok(store)
    }

    /// Create an ephemeral in-memory signal store (for testing).
    pub fn open_in_memory() -> StateResult<Self> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!("in-memory signal store opened");
        Ok(store)
    }

    /// Create the signals table if it doesn't exist yet.
    fn ensure_tables(&self) -> StateResult<()> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        // Opening a table in a write transaction creates it if absent.
        txn.open_table(SIGNALS).map_err(map_err!(Table))?;
        txn.commit().map_err(map_err!(Transaction))?;
        Ok(())
    }
}

impl SignalRepository for SignalStore {
    fn count(&self) -> StateResult<u64> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(SIGNALS).map_err(map_err!(Table))?;
        table.len().map_err(map_err!(Read))
    }

    fn find_all(&self) -> StateResult<Vec<Signal>> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(SIGNALS).map_err(map_err!(Table))?;
        let mut results = Vec::new();
        for entry in table.iter().map_err(map_err!(Read))? {
            let (_, value) = entry.map_err(map_err!(Read))?;
            let signal: Signal =
                serde_json::from_slice(value.value()).map_err(map_err!(Deserialize))?;
            results.push(signal);
        }
        Ok(results)
    }

    fn find_by_node_id(&self, node_id: &str) -> StateResult<Option<Signal>> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(SIGNALS).map_err(map_err!(Table))?;
        match table.get(node_id).map_err(map_err!(Read))? {
            Some(guard) => {
                let signal: Signal =
                    serde_json::from_slice(guard.value()).map_err(map_err!(Deserialize))?;
                Ok(Some(signal))
            }
            None => Ok(None),
        }
    }

    fn insert_many(&self, signals: &[Signal]) -> StateResult<()> {
        // Serialize up front so a bad record never leaves a half-written transaction.
        let encoded = signals
            .iter()
            .map(|s| serde_json::to_vec(s).map(|v| (s.table_key(), v)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_err!(Serialize))?;

        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        {
            let mut table = txn.open_table(SIGNALS).map_err(map_err!(Table))?;
            for (key, value) in &encoded {
                table
                    .insert(*key, value.as_slice())
                    .map_err(map_err!(Write))?;
            }
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(count = signals.len(), "signal batch stored");
        Ok(())
    }

    fn clear(&self) -> StateResult<()> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        txn.delete_table(SIGNALS).map_err(map_err!(Table))?;
        txn.open_table(SIGNALS).map_err(map_err!(Table))?;
        txn.commit().map_err(map_err!(Transaction))?;
        debug!("signal store cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signal(node_id: &str, interval: Option<u32>, active: bool) -> Signal {
        Signal {
            node_id: node_id.to_string(),
            sampling_interval_ms: interval,
            deadband_value: Some(1),
            deadband_type: Some("ABSOLUTE".to_string()),
            active,
        }
    }

    #[test]
    fn insert_many_and_find_by_node_id() {
        let store = SignalStore::open_in_memory().unwrap();
        let a = test_signal("NODE1", Some(2000), true);
        let b = test_signal("NODE2", None, false);

        store.insert_many(&[a.clone(), b.clone()]).unwrap();

        assert_eq!(store.find_by_node_id("NODE1").unwrap(), Some(a));
        assert_eq!(store.find_by_node_id("NODE2").unwrap(), Some(b));
    }

    #[test]
    fn find_missing_returns_none() {
        let store = SignalStore::open_in_memory().unwrap();
        assert!(store.find_by_node_id("nope").unwrap().is_none());
    }

    #[test]
    fn count_tracks_inserts() {
        let store = SignalStore::open_in_memory().unwrap();
        assert_eq!(store.count().unwrap(), 0);

        store
            .insert_many(&[test_signal("a", None, true), test_signal("b", None, true)])
            .unwrap();
        assert_eq!(store.count().unwrap(), 2);

        store.insert_many(&[test_signal("c", None, false)]).unwrap();
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn find_all_is_ordered_by_node_id() {
        let store = SignalStore::open_in_memory().unwrap();
        store
            .insert_many(&[
                test_signal("NODE3", None, true),
                test_signal("NODE1", None, true),
                test_signal("NODE2", None, true),
            ])
            .unwrap();

        let ids: Vec<String> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|s| s.node_id)
            .collect();
        assert_eq!(ids, vec!["NODE1", "NODE2", "NODE3"]);
    }

    #[test]
    fn duplicate_key_overwrites() {
        let store = SignalStore::open_in_memory().unwrap();
        store
            .insert_many(&[
                test_signal("NODE1", Some(100), true),
                test_signal("NODE1", Some(200), false),
            ])
            .unwrap();

        assert_eq!(store.count().unwrap(), 1);
        let stored = store.find_by_node_id("NODE1").unwrap().unwrap();
        assert_eq!(stored.sampling_interval_ms, Some(200));
        assert!(!stored.active);
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let store = SignalStore::open_in_memory().unwrap();
        store.insert_many(&[]).unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn clear_removes_everything() {
        let store = SignalStore::open_in_memory().unwrap();
        store
            .insert_many(&[test_signal("a", None, true), test_signal("b", None, true)])
            .unwrap();

        store.clear().unwrap();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.find_all().unwrap().is_empty());

        // Table is still usable after a clear.
        store.insert_many(&[test_signal("c", None, true)]).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn empty_node_id_is_a_valid_key() {
        let store = SignalStore::open_in_memory().unwrap();
        store.insert_many(&[test_signal("", Some(5), true)]).unwrap();
        assert!(store.find_by_node_id("").unwrap().is_some());
    }

    #[test]
    fn debug_output_names_the_store() {
        let store = SignalStore::open_in_memory().unwrap();
        assert_eq!(format!("{store:?}"), "SignalStore { .. }");
    }

    // ── Persistence (on-disk) ──────────────────────────────────────

    #[test]
    fn persistence_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("signals.redb");

        {
            let store = SignalStore::open(&db_path).unwrap();
            store
                .insert_many(&[test_signal("NODE1", Some(2000), true)])
                .unwrap();
        }

        // Reopen the same database file.
        let store = SignalStore::open(&db_path).unwrap();
        assert_eq!(store.count().unwrap(), 1);
        let signal = store.find_by_node_id("NODE1").unwrap();
        assert_eq!(signal.unwrap().sampling_interval_ms, Some(2000));
    }
}
