//! Snapshot storage.

use heatmap_core::types::SnapshotTable;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Store key for heatmap tables, keyed by time period.
pub const DATA_STORE_KEY_HEATMAPS: &str = "heatmaps";

/// Store key for ticker tables, keyed by market index.
pub const DATA_STORE_KEY_TICKERS: &str = "tickers";

/// Keyed store of snapshot tables.
///
/// Writers replace a whole table at once; readers get whichever table was
/// current when they asked.
pub trait SnapshotStore: Send + Sync {
    /// Get the current table under `key`.
    fn get_data(&self, key: &str) -> Option<Arc<SnapshotTable>>;

    /// Replace the table under `key`.
    fn put_data(&self, key: &str, table: SnapshotTable);
}

/// Simple in-memory snapshot store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<HashMap<String, Arc<SnapshotTable>>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn get_data(&self, key: &str) -> Option<Arc<SnapshotTable>> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        tables.get(key).cloned()
    }

    fn put_data(&self, key: &str, table: SnapshotTable) {
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        tables.insert(key.to_string(), Arc::new(table));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_store() {
        let store = InMemoryStore::new();

        assert!(store.get_data(DATA_STORE_KEY_HEATMAPS).is_none());
        assert!(store.get_data(DATA_STORE_KEY_TICKERS).is_none());
    }

    #[test]
    fn test_put_replaces_whole_table() {
        let store = InMemoryStore::new();

        let mut first = SnapshotTable::new();
        first.insert("1week", json!({"AAPL": 1.0}));
        first.insert("1month", json!({"AAPL": 2.0}));
        store.put_data(DATA_STORE_KEY_HEATMAPS, first);

        let held = store.get_data(DATA_STORE_KEY_HEATMAPS).unwrap();

        let mut second = SnapshotTable::new();
        second.insert("1week", json!({"AAPL": 3.0}));
        store.put_data(DATA_STORE_KEY_HEATMAPS, second);

        let current = store.get_data(DATA_STORE_KEY_HEATMAPS).unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(**current.get("1week").unwrap(), json!({"AAPL": 3.0}));

        // Readers holding the old table keep a consistent view.
        assert_eq!(held.len(), 2);
        assert_eq!(**held.get("1week").unwrap(), json!({"AAPL": 1.0}));
    }

    #[test]
    fn test_keys_are_independent() {
        let store = InMemoryStore::new();
        store.put_data(DATA_STORE_KEY_TICKERS, SnapshotTable::new());

        assert!(store.get_data(DATA_STORE_KEY_TICKERS).is_some());
        assert!(store.get_data(DATA_STORE_KEY_HEATMAPS).is_none());
    }
}
