//! Request and response types of the monitoring backend's report API.

use serde::{Deserialize, Serialize};

use crate::domain::report::args::ViewFilter;
use crate::domain::report::planner::QueryPlan;

/// Inclusion flags sent with every report query. Reports always cover
/// derived elements and services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
    pub include_derived_elements: bool,
    pub include_services: bool,
}

impl ReportOptions {
    pub fn standard() -> Self {
        ReportOptions {
            include_derived_elements: true,
            include_services: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IncludedSeverities {
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TopSortMethod {
    Total,
}

/// One alarm-distribution query: a planned window plus the request scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmDistributionRequest {
    #[serde(flatten)]
    pub plan: QueryPlan,
    pub included_severities: IncludedSeverities,
    pub options: ReportOptions,
    pub view_id: i32,
}

impl AlarmDistributionRequest {
    pub fn new(plan: QueryPlan, view: ViewFilter) -> Self {
        AlarmDistributionRequest {
            plan,
            included_severities: IncludedSeverities::All,
            options: ReportOptions::standard(),
            view_id: view.view_id(),
        }
    }
}

/// One data series: slot labels and the value per slot, in the backend's
/// slot order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlarmDistributionResponse {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Top-N query shared by the event-count and state report families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopAlarmRequest {
    pub time_span: String,
    pub sort_method: TopSortMethod,
    pub max_amount: usize,
    pub options: ReportOptions,
    pub view_id: i32,
}

impl TopAlarmRequest {
    pub fn top_by_total(time_span: &str, view: ViewFilter, max_amount: usize) -> Self {
        TopAlarmRequest {
            time_span: time_span.to_string(),
            sort_method: TopSortMethod::Total,
            max_amount,
            options: ReportOptions::standard(),
            view_id: view.view_id(),
        }
    }
}

/// Alarm-event counts of one monitored object, bucketed by severity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmCountResponse {
    pub agent_id: i32,
    pub object_id: i32,
    pub is_service: bool,
    pub amount_timeout: i64,
    pub amount_warning: i64,
    pub amount_minor: i64,
    pub amount_major: i64,
    pub amount_critical: i64,
}

impl AlarmCountResponse {
    pub fn total(&self) -> i64 {
        self.amount_timeout
            + self.amount_warning
            + self.amount_minor
            + self.amount_major
            + self.amount_critical
    }
}

/// Percentage of time one monitored object spent in each alarm state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlarmStateResponse {
    pub agent_id: i32,
    pub object_id: i32,
    pub is_service: bool,
    pub percentage_timeout: f64,
    pub percentage_warning: f64,
    pub percentage_minor: f64,
    pub percentage_major: f64,
    pub percentage_critical: f64,
}

impl AlarmStateResponse {
    pub fn total(&self) -> f64 {
        self.percentage_timeout
            + self.percentage_warning
            + self.percentage_minor
            + self.percentage_major
            + self.percentage_critical
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ElementInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
}
