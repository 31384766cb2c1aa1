//! Ticker snapshot endpoint.

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
    Router::new().route("/:index", get(get_tickers))
}

/// GET /tickers/:index
pub async fn get_tickers(
    State(state): State<ApiState>,
    Path(index): Path<String>,
) -> Result<Json<Arc<SnapshotPayload>>, ApiError> {
    let index = state.validator.validate_index(&index)?;
    let payload = state.lookup.tickers(&index)?;
    Ok(Json(payload))
}
