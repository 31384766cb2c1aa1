//! HTTP layer for the heatmaps service.
//!
//! Routes:
//! - `GET /heatmaps/:time_period` - cached heatmap snapshot
//! - `GET /tickers/:index` - cached ticker snapshot
//! - `GET /health` - liveness plus cache readiness

pub mod error;
pub mod routes;
mod state;

pub use error::{ApiError, ErrorBody};
pub use state::ApiState;

use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .nest("/heatmaps", routes::heatmaps::router())
        .nest("/tickers", routes::tickers::router())
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the router until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Heatmaps API listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}


#[cfg(test)]
mod tests {
    use super::test_support::{get, test_app, CountingStore};
    use axum::{body::Body, http::Request, http::StatusCode};
    use heatmap_core::types::Catalog;
    use heatmap_core::{parse_storage_date, DateResolver, FixedClock};
    use heatmap_data::{
        populate_once, JsonFileSource, PopulationMetrics, SnapshotPopulator,
        DATA_STORE_KEY_HEATMAPS,
    };
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_populated_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "heatmap-api-e2e-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"1week": {"AAPL": 2.5}}"#).unwrap();

        let store = CountingStore::new();
        let resolver = DateResolver::new(
            Arc::new(Catalog::default()),
            Arc::new(FixedClock(parse_storage_date("2024-03-15").unwrap())),
        );
        let populators: Vec<Arc<dyn SnapshotPopulator>> =
            vec![Arc::new(JsonFileSource::new(&path, DATA_STORE_KEY_HEATMAPS))];

        let (status, _) = get(test_app(store.clone()), "/heatmaps/1week").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        populate_once(&*store, &resolver, &populators, &PopulationMetrics::default()).await;

        let (status, body) = get(test_app(store.clone()), "/heatmaps/1week").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"AAPL": 2.5}));

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = test_app(CountingStore::new());

        let request = Request::builder()
            .uri("/nowhere")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
