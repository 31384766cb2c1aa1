//! Health check endpoint.

use crate::state::ApiState;
use axum::{extract::State, routing::get, Json, Router};
use heatmap_data::{DATA_STORE_KEY_HEATMAPS, DATA_STORE_KEY_TICKERS};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub heatmaps_ready: bool,
    pub tickers_ready: bool,
}

pub fn router() -> Router<ApiState> {
    Router::new().route("/health", get(health))
}

/// GET /health
///
/// Always 200 while the process is serving; the readiness flags say whether
/// the population task has filled each table yet.
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        heatmaps_ready: state.lookup.has_table(DATA_STORE_KEY_HEATMAPS),
        tickers_ready: state.lookup.has_table(DATA_STORE_KEY_TICKERS),
    })
}
