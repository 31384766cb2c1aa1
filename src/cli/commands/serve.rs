//! Serve command implementation.

use anyhow::{Context, Result};
use heatmap_api::{create_router, serve, ApiState};
use heatmap_config::AppConfig;
use heatmap_core::{DateResolver, SystemClock};
use heatmap_data::{
    schedule_snapshot_population, stop_population, InMemoryStore, JsonFileSource,
    SnapshotPopulator, SnapshotStore, DATA_STORE_KEY_HEATMAPS, DATA_STORE_KEY_TICKERS,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::cli::ServeArgs;

pub async fn run(args: ServeArgs, config: &AppConfig) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(host) = args.host {
        server.host = host;
    }
    if let Some(port) = args.port {
        server.port = port;
    }

    let catalog = Arc::new(config.heatmaps.catalog());
    let store: Arc<dyn SnapshotStore> = Arc::new(InMemoryStore::new());
    let resolver = DateResolver::new(catalog.clone(), Arc::new(SystemClock));

    let mut populators: Vec<Arc<dyn SnapshotPopulator>> = Vec::new();
    match args.snapshot_file.or_else(|| config.heatmaps.snapshot_file.clone()) {
        Some(path) => populators.push(Arc::new(JsonFileSource::new(path, DATA_STORE_KEY_HEATMAPS))),
        None => warn!("No snapshot file configured, heatmap requests will report missing data"),
    }
    if let Some(path) = &config.heatmaps.tickers_file {
        populators.push(Arc::new(JsonFileSource::new(path, DATA_STORE_KEY_TICKERS)));
    }

    let listener = TcpListener::bind(server.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", server.bind_address()))?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let population = schedule_snapshot_population(
        store.clone(),
        resolver,
        populators,
        config.heatmaps.population_config(),
        shutdown_rx,
    );

    info!(
        app = %config.app.name,
        environment = %config.app.environment,
        periods = catalog.time_periods().count(),
        "Starting heatmaps server"
    );

    let router = create_router(ApiState::new(catalog, store));
    let served = serve(listener, router, shutdown_signal()).await;

    // Stop population whether the server exited cleanly or not.
    let metrics = stop_population(shutdown_tx, population).await?.snapshot();
    info!(
        cycles = metrics.cycles,
        failures = metrics.failures,
        "Heatmaps server stopped"
    );

    served.context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
