//! Report API DTOs

use serde::Deserialize;

use crate::domain::report::time_span::TimeSpan;

/// Query parameters shared by the report endpoints.
///
/// `time_span` defaults to the Day identifier; an unknown identifier is
/// not rejected here, the shapers answer it with an empty result.
#[derive(Deserialize, Debug)]
pub struct ReportQuery {
    pub view: Option<i32>,
    #[serde(default = "default_time_span", alias = "time-span")]
    pub time_span: String,
}

fn default_time_span() -> String {
    TimeSpan::Day.identifier().to_string()
}
