//! Heatmap snapshot endpoint.

use crate::error::ApiError;
use crate::state::ApiState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use heatmap_core::types::SnapshotPayload;
use std::sync::Arc;

pub fn router() -> Router<ApiState> {
    Router::new().route("/:time_period", get(get_heatmap))
}

/// GET /heatmaps/:time_period
///
/// The token is validated before the cache is read, so an unsupported period
/// never touches the store.
pub async fn get_heatmap(
    State(state): State<ApiState>,
    Path(time_period): Path<String>,
) -> Result<Json<Arc<SnapshotPayload>>, ApiError> {
    let period = state.validator.validate_time_period(&time_period)?;
    let payload = state.lookup.heatmap(&period)?;
    Ok(Json(payload))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{get, test_app, CountingStore};
    use axum::http::StatusCode;
    use heatmap_core::types::SnapshotTable;
    use heatmap_data::{SnapshotStore, DATA_STORE_KEY_HEATMAPS};
    use serde_json::json;

    #[tokio::test]
    async fn test_populated_period_returns_payload() {
        let store = CountingStore::new();
        let mut table = SnapshotTable::new();
        table.insert("1week", json!({"AAPL": 1.5, "MSFT": -0.25}));
        store.put_data(DATA_STORE_KEY_HEATMAPS, table);

        let (status, body) = get(test_app(store.clone()), "/heatmaps/1week").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"AAPL": 1.5, "MSFT": -0.25}));
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn test_unpopulated_cache_is_server_error() {
        let store = CountingStore::new();

        let (status, body) = get(test_app(store.clone()), "/heatmaps/1week").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "No cached data available for: 1week"}));
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn test_missing_entry_is_server_error() {
        let store = CountingStore::new();
        let mut table = SnapshotTable::new();
        table.insert("1month", json!({}));
        store.put_data(DATA_STORE_KEY_HEATMAPS, table);

        let (status, _) = get(test_app(store), "/heatmaps/1week").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_unsupported_period_never_reads_cache() {
        let store = CountingStore::new();
        let mut table = SnapshotTable::new();
        table.insert("bogus", json!({"should": "not be served"}));
        store.put_data(DATA_STORE_KEY_HEATMAPS, table);

        let (status, body) = get(test_app(store.clone()), "/heatmaps/bogus").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Time period not supported: bogus"}));
        assert_eq!(store.reads(), 0);
    }

    #[tokio::test]
    async fn test_matching_is_case_sensitive() {
        let store = CountingStore::new();

        let (status, _) = get(test_app(store.clone()), "/heatmaps/1WEEK").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(store.reads(), 0);
    }
}
