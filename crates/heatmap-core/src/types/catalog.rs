//! Supported time periods and market indexes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Time periods served out of the box, with their lookback in days.
pub const DEFAULT_TIME_PERIODS: &[(&str, u32)] = &[
    ("1day", 1),
    ("1week", 7),
    ("1month", 30),
    ("3months", 91),
    ("6months", 182),
    ("1year", 365),
];

/// Market indexes served out of the box.
pub const DEFAULT_INDEXES: &[&str] = &["SP500", "NASDAQ100", "DOW30", "FTSE100"];

/// The fixed enumerations requests are checked against.
///
/// Built once at startup and shared read-only; there are no mutating methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    time_periods: BTreeMap<String, u32>,
    indexes: BTreeSet<String>,
}

impl Catalog {
    /// Create a catalog from explicit tables.
    pub fn new(
        time_periods: impl IntoIterator<Item = (String, u32)>,
        indexes: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            time_periods: time_periods.into_iter().collect(),
            indexes: indexes.into_iter().collect(),
        }
    }

    /// Lookback in days for a time period token.
    pub fn days_offset(&self, token: &str) -> Option<u32> {
        self.time_periods.get(token).copied()
    }

    /// Check if a time period token is supported.
    pub fn has_time_period(&self, token: &str) -> bool {
        self.time_periods.contains_key(token)
    }

    /// Check if an index token is supported.
    pub fn has_index(&self, token: &str) -> bool {
        self.indexes.contains(token)
    }

    /// Supported time periods, ordered by token.
    pub fn time_periods(&self) -> impl Iterator<Item = (&str, u32)> {
        self.time_periods.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Supported indexes, ordered by token.
    pub fn indexes(&self) -> impl Iterator<Item = &str> {
        self.indexes.iter().map(String::as_str)
    }

    /// Check that the catalog can serve any request at all.
    pub fn is_empty(&self) -> bool {
        self.time_periods.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_TIME_PERIODS
                .iter()
                .map(|(token, days)| (token.to_string(), *days)),
            DEFAULT_INDEXES.iter().map(|index| index.to_string()),
        )
    }
}
