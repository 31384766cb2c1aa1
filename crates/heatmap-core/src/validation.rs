//! Request validation against the catalog.

use crate::error::{HeatmapError, HeatmapResult};
use crate::types::{Catalog, IndexToken, TimePeriodToken};
use std::sync::Arc;

/// Checks caller-supplied tokens against the supported sets.
///
/// Matching is exact and case-sensitive. Validation never touches the
/// snapshot store.
#[derive(Debug, Clone)]
pub struct Validator {
    catalog: Arc<Catalog>,
}

impl Validator {
    /// Create a validator over a catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Validate a time period token.
    pub fn validate_time_period(&self, token: &str) -> HeatmapResult<TimePeriodToken> {
        if !self.catalog.has_time_period(token) {
            return Err(HeatmapError::TimePeriodUnsupported(token.to_string()));
        }
        Ok(TimePeriodToken::new(token))
    }

    /// Validate a market index token.
    pub fn validate_index(&self, token: &str) -> HeatmapResult<IndexToken> {
        if !self.catalog.has_index(token) {
            return Err(HeatmapError::IndexUnsupported(token.to_string()));
        }
        Ok(IndexToken::new(token))
    }
}
