use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::{AppError, ReportError};

pub fn to_json<T: serde::Serialize>(
    result: Result<T, ReportError>,
) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => Err(err.into()), // preserves the tagged error kind
    }
}
