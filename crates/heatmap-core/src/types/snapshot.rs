//! Cached snapshot tables.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Opaque snapshot body. Its shape belongs to whoever populates the cache.
pub type SnapshotPayload = Value;

/// One cached table: token -> payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotTable {
    entries: HashMap<String, Arc<SnapshotPayload>>,
}

impl SnapshotTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the payload for a token.
    pub fn get(&self, token: &str) -> Option<&Arc<SnapshotPayload>> {
        self.entries.get(token)
    }

    /// Insert or replace a payload.
    pub fn insert(&mut self, token: impl Into<String>, payload: SnapshotPayload) {
        self.entries.insert(token.into(), Arc::new(payload));
    }

    /// Tokens present in this table.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, SnapshotPayload)> for SnapshotTable {
    fn from_iter<I: IntoIterator<Item = (String, SnapshotPayload)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(token, payload)| (token, Arc::new(payload)))
                .collect(),
        }
    }
}
