//! Core data types for the heatmaps service.

mod catalog;
mod snapshot;
mod token;

pub use catalog::{Catalog, DEFAULT_INDEXES, DEFAULT_TIME_PERIODS};
pub use snapshot::{SnapshotPayload, SnapshotTable};
pub use token::{IndexToken, TimePeriodToken};
