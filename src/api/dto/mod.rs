pub mod report_dto;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Uniform success envelope for API responses; failures go through
/// `AppError` instead.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub generated_at: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data,
            generated_at: Utc::now(),
        }
    }
}
