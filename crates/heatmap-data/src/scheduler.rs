//! Scheduled snapshot population.
//!
//! The read path never waits on population. A background task asks each
//! [`SnapshotPopulator`] for a fresh table on a fixed interval and swaps it
//! into the store. Until the first successful run a key has no table, and
//! lookups report missing cache data.

use crate::populator::SnapshotPopulator;
use crate::store::SnapshotStore;
use heatmap_core::{format_for_storage, DateResolver};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// Default refresh interval: hourly.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3600;

/// Configuration for the population task.
#[derive(Debug, Clone)]
pub struct PopulationConfig {
    /// Time between runs. The first run starts immediately.
    pub refresh_interval: Duration,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
        }
    }
}

/// Counters for the population task.
#[derive(Debug, Default)]
pub struct PopulationMetrics {
    pub cycles: AtomicU64,
    pub tables_written: AtomicU64,
    pub failures: AtomicU64,
}

impl PopulationMetrics {
    pub fn snapshot(&self) -> PopulationMetricsSnapshot {
        PopulationMetricsSnapshot {
            cycles: self.cycles.load(Ordering::Relaxed),
            tables_written: self.tables_written.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`PopulationMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationMetricsSnapshot {
    pub cycles: u64,
    pub tables_written: u64,
    pub failures: u64,
}

/// Spawn the population task.
///
/// Call once at startup. Flip `shutdown_rx`'s sender to `true` (or drop it)
/// to stop the task; the handle resolves to the final counters.
pub fn schedule_snapshot_population(
    store: Arc<dyn SnapshotStore>,
    resolver: DateResolver,
    populators: Vec<Arc<dyn SnapshotPopulator>>,
    config: PopulationConfig,
    shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<Arc<PopulationMetrics>> {
    tokio::spawn(population_task(
        store,
        resolver,
        populators,
        config,
        shutdown_rx,
    ))
}

/// Signal the population task to stop and wait for its final counters.
pub async fn stop_population(
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<Arc<PopulationMetrics>>,
) -> Result<Arc<PopulationMetrics>, JoinError> {
    if shutdown_tx.send(true).is_err() {
        debug!("Snapshot population task already stopped");
    }
    handle.await
}

/// Run population cycles until shutdown.
async fn population_task(
    store: Arc<dyn SnapshotStore>,
    resolver: DateResolver,
    populators: Vec<Arc<dyn SnapshotPopulator>>,
    config: PopulationConfig,
    mut shutdown_rx: watch::Receiver<bool>,
) -> Arc<PopulationMetrics> {
    let metrics = Arc::new(PopulationMetrics::default());

    let mut refresh = interval(config.refresh_interval);
    refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!(
        refresh_interval_secs = config.refresh_interval.as_secs(),
        populators = populators.len(),
        "Snapshot population task started"
    );

    loop {
        tokio::select! {
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    info!("Snapshot population task shutting down");
                    break;
                }
            }

            _ = refresh.tick() => {
                populate_once(store.as_ref(), &resolver, &populators, &metrics).await;
            }
        }
    }

    let snapshot = metrics.snapshot();
    info!(
        cycles = snapshot.cycles,
        tables_written = snapshot.tables_written,
        failures = snapshot.failures,
        "Snapshot population task completed"
    );

    metrics
}

/// Run every populator once and store what they return.
///
/// A failing populator leaves its previous table in place.
pub async fn populate_once(
    store: &dyn SnapshotStore,
    resolver: &DateResolver,
    populators: &[Arc<dyn SnapshotPopulator>],
    metrics: &PopulationMetrics,
) {
    metrics.cycles.fetch_add(1, Ordering::Relaxed);

    let plan = match resolver.refresh_plan() {
        Ok(plan) => plan,
        Err(e) => {
            error!(error = %e, "Failed to resolve snapshot dates");
            metrics.failures.fetch_add(1, Ordering::Relaxed);
            return;
        }
    };

    debug!(
        comparison_date = %format_for_storage(plan.comparison_date),
        periods = plan.reference_dates.len(),
        "Populating snapshots"
    );

    for populator in populators {
        match populator.populate(&plan).await {
            Ok(table) => {
                info!(
                    populator = populator.name(),
                    store_key = populator.store_key(),
                    entries = table.len(),
                    "Snapshot table refreshed"
                );
                store.put_data(populator.store_key(), table);
                metrics.tables_written.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                warn!(
                    populator = populator.name(),
                    store_key = populator.store_key(),
                    error = %e,
                    "Snapshot population failed, keeping previous table"
                );
                metrics.failures.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}
