//! JSON file snapshot source.

use crate::populator::SnapshotPopulator;
use async_trait::async_trait;
use heatmap_core::error::DataError;
use heatmap_core::types::SnapshotTable;
use heatmap_core::{format_for_storage, RefreshPlan};
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Reads a snapshot table from a JSON object file.
///
/// The file maps tokens to payloads, e.g. `{"1week": {...}, "1month": {...}}`.
/// It is re-read on every run so an external job can replace it in place.
pub struct JsonFileSource {
    path: PathBuf,
    store_key: String,
    name: String,
}

impl JsonFileSource {
    /// Create a source that writes under `store_key`.
    pub fn new(path: impl Into<PathBuf>, store_key: impl Into<String>) -> Self {
        let path = path.into();
        let name = format!("json:{}", path.display());
        Self {
            path,
            store_key: store_key.into(),
            name,
        }
    }

    fn parse(&self, bytes: &[u8]) -> Result<SnapshotTable, DataError> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(entries) => Ok(entries.into_iter().collect()),
            _ => Err(DataError::NotAnObject(self.path.display().to_string())),
        }
    }
}

#[async_trait]
impl SnapshotPopulator for JsonFileSource {
    fn store_key(&self) -> &str {
        &self.store_key
    }

    async fn populate(&self, plan: &RefreshPlan) -> Result<SnapshotTable, DataError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let table = self.parse(&bytes)?;

        for token in table.tokens() {
            if let Some(date) = plan.reference_date(token) {
                debug!(
                    source = %self.name,
                    token,
                    reference_date = %format_for_storage(date),
                    "loaded snapshot"
                );
            }
        }

        Ok(table)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn plan() -> RefreshPlan {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        RefreshPlan {
            today,
            comparison_date: today.pred_opt().unwrap(),
            reference_dates: BTreeMap::new(),
        }
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "heatmap-json-source-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_object_file() {
        let path = temp_file("object", r#"{"1week": {"AAPL": 1.5}, "1month": [1, 2]}"#);
        let source = JsonFileSource::new(&path, "heatmaps");

        let table = source.populate(&plan()).await.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(**table.get("1week").unwrap(), json!({"AAPL": 1.5}));
        assert_eq!(source.store_key(), "heatmaps");

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_reject_non_object() {
        let path = temp_file("array", "[1, 2, 3]");
        let source = JsonFileSource::new(&path, "heatmaps");

        let result = source.populate(&plan()).await;
        assert!(matches!(result, Err(DataError::NotAnObject(_))));

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = JsonFileSource::new("/nonexistent/heatmaps.json", "heatmaps");

        let result = source.populate(&plan()).await;
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let path = temp_file("invalid", "{not json");
        let source = JsonFileSource::new(&path, "heatmaps");

        let result = source.populate(&plan()).await;
        assert!(matches!(result, Err(DataError::Parse(_))));

        std::fs::remove_file(path).unwrap();
    }
}
