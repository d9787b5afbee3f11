use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Failures a report request can surface.
///
/// The backend protocol gives no guarantees worth trusting blindly: a
/// query can come back empty or malformed, a metadata lookup can miss,
/// and the two series of a distribution report can disagree on length.
/// Each of those is an explicit variant here instead of a latent panic.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("backend query failed: {0}")]
    Backend(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("misaligned series: primary has {primary} slots, baseline has {baseline}")]
    MisalignedSeries { primary: usize, baseline: usize },
}

#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Backend(reason) => AppError::BackendError(reason),
            ReportError::NotFound(what) => AppError::NotFound(what),
            // A length mismatch means the backend broke its slot-ordering
            // contract, so it is reported as a backend fault too.
            err @ ReportError::MisalignedSeries { .. } => AppError::BackendError(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BackendError(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
