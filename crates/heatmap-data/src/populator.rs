//! Population seam for the snapshot store.

use async_trait::async_trait;
use heatmap_core::error::DataError;
use heatmap_core::types::SnapshotTable;
use heatmap_core::RefreshPlan;

/// Something that can produce a fresh snapshot table.
///
/// How the snapshots are computed is up to the implementation; the scheduler
/// only hands over the dates for this run and stores whatever comes back.
#[async_trait]
pub trait SnapshotPopulator: Send + Sync {
    /// Store key the produced table is written under.
    fn store_key(&self) -> &str;

    /// Produce a complete table for this run.
    async fn populate(&self, plan: &RefreshPlan) -> Result<SnapshotTable, DataError>;

    /// Get the populator name.
    fn name(&self) -> &str;
}
