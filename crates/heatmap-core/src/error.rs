//! Error types for the heatmaps service.

use thiserror::Error;

/// Top-level heatmaps error.
#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("Time period not supported: {0}")]
    TimePeriodUnsupported(String),

    #[error("Index not supported: {0}")]
    IndexUnsupported(String),

    #[error("No cached data available for: {0}")]
    MissingCacheData(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range")]
    DateOutOfRange,
}

/// Who is responsible for an error.
///
/// Transport layers map these onto their own status conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent a value outside the supported set.
    ClientInput,
    /// The request was valid but server state is not ready yet.
    ServerState,
    /// Anything else.
    Internal,
}

impl HeatmapError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeatmapError::TimePeriodUnsupported(_) | HeatmapError::IndexUnsupported(_) => {
                ErrorKind::ClientInput
            }
            HeatmapError::MissingCacheData(_) => ErrorKind::ServerState,
            HeatmapError::InvalidDate(_) | HeatmapError::DateOutOfRange => ErrorKind::Internal,
        }
    }
}

/// Snapshot store and populator errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Snapshot source {0} did not contain a JSON object")]
    NotAnObject(String),

    #[error("Populator error: {0}")]
    Internal(String),
}

/// Result type alias for heatmaps operations.
pub type HeatmapResult<T> = Result<T, HeatmapError>;
