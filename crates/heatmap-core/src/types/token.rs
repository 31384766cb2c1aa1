//! Validated request tokens.

use serde::Serialize;
use std::fmt;

/// A time period token known to be in the catalog.
///
/// Only [`Validator`](crate::Validator) hands these out, so holding one means
/// the token has already been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TimePeriodToken(String);

impl TimePeriodToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token, as used for cache keys.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimePeriodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TimePeriodToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A market index token known to be in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IndexToken(String);

impl IndexToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IndexToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
