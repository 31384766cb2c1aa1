//! Snapshot storage, lookup and population.

mod json_source;
mod lookup;
mod populator;
mod scheduler;
mod store;

pub use json_source::JsonFileSource;
pub use lookup::SnapshotLookup;
pub use populator::SnapshotPopulator;
pub use scheduler::{
    populate_once, schedule_snapshot_population, stop_population, PopulationConfig,
    PopulationMetrics, PopulationMetricsSnapshot, DEFAULT_REFRESH_INTERVAL_SECS,
};
pub use store::{InMemoryStore, SnapshotStore, DATA_STORE_KEY_HEATMAPS, DATA_STORE_KEY_TICKERS};
