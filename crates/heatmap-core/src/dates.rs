//! Reference date resolution for heatmap snapshots.
//!
//! A snapshot compares prices on a reference date with prices on the
//! comparison date. The reference date is `today - days_offset(period)`. The
//! comparison date is always yesterday, since the upstream price feed may not
//! have published today's figures yet.

use crate::error::{HeatmapError, HeatmapResult};
use crate::traits::Clock;
use crate::types::{Catalog, TimePeriodToken};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Date format shared by everything that writes dates to or reads dates from
/// the snapshot store.
pub const STORAGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date as `YYYY-MM-DD`.
///
/// Years outside `0000..=9999` carry a sign and as many digits as they need,
/// e.g. `+10000-01-01`.
pub fn format_for_storage(date: NaiveDate) -> String {
    date.format(STORAGE_DATE_FORMAT).to_string()
}

/// Parse a date written by [`format_for_storage`].
///
/// Only the exact rendering is accepted, so unpadded fields are rejected.
pub fn parse_storage_date(s: &str) -> HeatmapResult<NaiveDate> {
    match NaiveDate::parse_from_str(s, STORAGE_DATE_FORMAT) {
        Ok(date) if format_for_storage(date) == s => Ok(date),
        _ => Err(HeatmapError::InvalidDate(s.to_string())),
    }
}

/// Every date a population run needs, read from a single clock tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshPlan {
    /// Date the clock reported.
    pub today: NaiveDate,
    /// "Today" for comparison purposes (yesterday).
    pub comparison_date: NaiveDate,
    /// Reference date per time period token.
    pub reference_dates: BTreeMap<String, NaiveDate>,
}

impl RefreshPlan {
    /// Reference date for a token, if it was planned.
    pub fn reference_date(&self, token: &str) -> Option<NaiveDate> {
        self.reference_dates.get(token).copied()
    }
}

/// Maps time period tokens onto calendar dates.
#[derive(Clone)]
pub struct DateResolver {
    catalog: Arc<Catalog>,
    clock: Arc<dyn Clock>,
}

impl DateResolver {
    /// Create a resolver over a catalog and clock.
    pub fn new(catalog: Arc<Catalog>, clock: Arc<dyn Clock>) -> Self {
        Self { catalog, clock }
    }

    /// Date of the snapshot to compare against today for `token`.
    pub fn resolve_snapshot_date(&self, token: &TimePeriodToken) -> HeatmapResult<NaiveDate> {
        self.reference_date(self.clock.today(), token.as_str())
    }

    /// "Today" for comparison purposes: always yesterday.
    pub fn resolve_comparison_date(&self) -> HeatmapResult<NaiveDate> {
        days_before(self.clock.today(), 1)
    }

    /// Resolve the comparison date and every catalog period in one go.
    pub fn refresh_plan(&self) -> HeatmapResult<RefreshPlan> {
        let today = self.clock.today();
        let mut reference_dates = BTreeMap::new();
        for (token, _) in self.catalog.time_periods() {
            reference_dates.insert(token.to_string(), self.reference_date(today, token)?);
        }

        Ok(RefreshPlan {
            today,
            comparison_date: days_before(today, 1)?,
            reference_dates,
        })
    }

    fn reference_date(&self, today: NaiveDate, token: &str) -> HeatmapResult<NaiveDate> {
        let days = self
            .catalog
            .days_offset(token)
            .ok_or_else(|| HeatmapError::TimePeriodUnsupported(token.to_string()))?;
        days_before(today, days)
    }
}

impl std::fmt::Debug for DateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateResolver")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

fn days_before(date: NaiveDate, days: u32) -> HeatmapResult<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(days)))
        .ok_or(HeatmapError::DateOutOfRange)
}
