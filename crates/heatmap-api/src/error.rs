//! Translation of service errors into HTTP responses.
//!
//! This is the only place that knows about status codes. Every handler
//! returns [`ApiError`] and the mapping below decides the status from the
//! error's kind.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use heatmap_core::error::{ErrorKind, HeatmapError};
use serde::{Deserialize, Serialize};

/// JSON error body: `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned from request handlers.
#[derive(Debug)]
pub struct ApiError(HeatmapError);

impl ApiError {
    /// HTTP status for this error, 500 when its kind defines none.
    pub fn status_code(&self) -> StatusCode {
        status_for_kind(self.0.kind()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn status_for_kind(kind: ErrorKind) -> Option<StatusCode> {
    match kind {
        ErrorKind::ClientInput => Some(StatusCode::BAD_REQUEST),
        ErrorKind::ServerState => Some(StatusCode::INTERNAL_SERVER_ERROR),
        ErrorKind::Internal => None,
    }
}

impl From<HeatmapError> for ApiError {
    fn from(err: HeatmapError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self.0.kind() {
            ErrorKind::ClientInput => tracing::debug!(error = %self.0, "Rejected request"),
            ErrorKind::ServerState => tracing::warn!(error = %self.0, "Request hit unpopulated cache"),
            ErrorKind::Internal => tracing::error!(error = ?self.0, "Request failed"),
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
