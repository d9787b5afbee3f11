use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::report_dto::ReportQuery;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::report::args::ArgumentDef;
use crate::domain::report::service::distribution::DistributionRow;
use crate::domain::report::service::events::EventCountRow;
use crate::domain::report::service::legend::LegendRow;
use crate::domain::report::service::states::StateShareRow;
use crate::domain::report::service::time_spans::TimeSpanRow;
use crate::domain::report::source::ReportSource;
use crate::errors::AppError;

pub struct ReportController;

impl ReportController {
    pub async fn get_distribution(
        State(state): State<AppState>,
        Query(q): Query<ReportQuery>,
    ) -> Result<Json<ApiResponse<Vec<DistributionRow>>>, AppError> {
        let args = state.arguments.resolve(q.view, &q.time_span);
        to_json(state.distribution.produce_rows(&args).await)
    }

    pub async fn get_distribution_legend(
        State(state): State<AppState>,
        Query(q): Query<ReportQuery>,
    ) -> Result<Json<ApiResponse<Vec<LegendRow>>>, AppError> {
        let args = state.arguments.resolve(q.view, &q.time_span);
        to_json(state.legend.produce_rows(&args).await)
    }

    pub async fn get_events(
        State(state): State<AppState>,
        Query(q): Query<ReportQuery>,
    ) -> Result<Json<ApiResponse<Vec<EventCountRow>>>, AppError> {
        let args = state.arguments.resolve(q.view, &q.time_span);
        to_json(state.events.produce_rows(&args).await)
    }

    pub async fn get_states(
        State(state): State<AppState>,
        Query(q): Query<ReportQuery>,
    ) -> Result<Json<ApiResponse<Vec<StateShareRow>>>, AppError> {
        let args = state.arguments.resolve(q.view, &q.time_span);
        to_json(state.states.produce_rows(&args).await)
    }

    pub async fn get_time_spans(
        State(state): State<AppState>,
        Query(q): Query<ReportQuery>,
    ) -> Result<Json<ApiResponse<Vec<TimeSpanRow>>>, AppError> {
        let args = state.arguments.resolve(q.view, &q.time_span);
        to_json(state.time_spans.produce_rows(&args).await)
    }

    pub async fn get_arguments(
        State(state): State<AppState>,
    ) -> Json<ApiResponse<Vec<ArgumentDef>>> {
        Json(ApiResponse::ok(state.arguments.declared()))
    }
}
