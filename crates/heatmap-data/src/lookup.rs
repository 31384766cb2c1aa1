//! Snapshot lookup for the read path.

use crate::store::{SnapshotStore, DATA_STORE_KEY_HEATMAPS, DATA_STORE_KEY_TICKERS};
use heatmap_core::error::{HeatmapError, HeatmapResult};
use heatmap_core::types::{IndexToken, SnapshotPayload, TimePeriodToken};
use std::sync::Arc;
use tracing::debug;

/// Reads cached snapshots for already-validated tokens.
///
/// A missing table and a missing entry both surface as
/// [`HeatmapError::MissingCacheData`]: the token is fine, the cache just has
/// not been populated for it yet.
#[derive(Clone)]
pub struct SnapshotLookup {
    store: Arc<dyn SnapshotStore>,
}

impl SnapshotLookup {
    /// Create a lookup over a store.
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Heatmap snapshot for a time period.
    pub fn heatmap(&self, period: &TimePeriodToken) -> HeatmapResult<Arc<SnapshotPayload>> {
        self.fetch(DATA_STORE_KEY_HEATMAPS, period.as_str())
    }

    /// Ticker snapshot for a market index.
    pub fn tickers(&self, index: &IndexToken) -> HeatmapResult<Arc<SnapshotPayload>> {
        self.fetch(DATA_STORE_KEY_TICKERS, index.as_str())
    }

    /// Check if a table has been populated under `store_key`.
    pub fn has_table(&self, store_key: &str) -> bool {
        self.store.get_data(store_key).is_some()
    }

    fn fetch(&self, store_key: &str, token: &str) -> HeatmapResult<Arc<SnapshotPayload>> {
        let Some(table) = self.store.get_data(store_key) else {
            debug!(store_key, "snapshot table not populated yet");
            return Err(HeatmapError::MissingCacheData(token.to_string()));
        };

        table.get(token).cloned().ok_or_else(|| {
            debug!(store_key, token, "snapshot entry not populated yet");
            HeatmapError::MissingCacheData(token.to_string())
        })
    }
}
