//! Report routes (e.g., /api/v1/reports/*)

use axum::{routing::get, Router};

use crate::api::controller::report::ReportController;
use crate::app_state::AppState;

/// Build the router for report endpoints under /api/v1/reports
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/distribution", get(ReportController::get_distribution))
        .route(
            "/distribution/legend",
            get(ReportController::get_distribution_legend),
        )
        .route("/events", get(ReportController::get_events))
        .route("/states", get(ReportController::get_states))
        .route("/time-spans", get(ReportController::get_time_spans))
        .route("/arguments", get(ReportController::get_arguments))
}
