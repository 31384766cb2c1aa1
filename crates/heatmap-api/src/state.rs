//! Shared handler state.

use heatmap_core::types::Catalog;
use heatmap_core::Validator;
use heatmap_data::{SnapshotLookup, SnapshotStore};
use std::sync::Arc;

/// State cloned into every handler.
#[derive(Clone)]
pub struct ApiState {
    pub validator: Validator,
    pub lookup: SnapshotLookup,
}

impl ApiState {
    /// Create state over a catalog and snapshot store.
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            validator: Validator::new(catalog),
            lookup: SnapshotLookup::new(store),
        }
    }
}
