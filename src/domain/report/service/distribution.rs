//! Historical alarm distribution with a trailing-average comparison.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::core::client::dms::DmsClient;
use crate::core::client::messages::{AlarmDistributionRequest, AlarmDistributionResponse};
use crate::domain::report::args::{ArgumentDef, ReportArguments, ResolvedArgs, ViewFilter};
use crate::domain::report::planner::{plans_for, QueryPlan};
use crate::domain::report::source::{ColumnDef, ColumnKind, ReportSource};
use crate::domain::report::time_span::TimeSpan;
use crate::errors::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionRow {
    pub label: String,
    pub value: f64,
    /// Only present when the active time span has a baseline plan.
    pub average: Option<f64>,
}

pub struct DistributionSource<C> {
    dms: Arc<C>,
    arguments: Arc<ReportArguments>,
}

impl<C: DmsClient> DistributionSource<C> {
    pub fn new(dms: Arc<C>, arguments: Arc<ReportArguments>) -> Self {
        DistributionSource { dms, arguments }
    }

    async fn fetch(
        &self,
        plan: QueryPlan,
        view: ViewFilter,
    ) -> Result<AlarmDistributionResponse, ReportError> {
        let req = AlarmDistributionRequest::new(plan, view);
        let series = self.dms.alarm_distribution(&req).await?;
        if series.labels.len() != series.values.len() {
            return Err(ReportError::Backend(format!(
                "series has {} labels but {} values",
                series.labels.len(),
                series.values.len()
            )));
        }
        Ok(series)
    }

    fn shape(
        span: TimeSpan,
        primary: AlarmDistributionResponse,
        baseline: Option<AlarmDistributionResponse>,
    ) -> Result<Vec<DistributionRow>, ReportError> {
        // Primary and baseline are zipped by slot position; the backend
        // contract is that both series share length and slot order, and a
        // length mismatch is rejected instead of silently mispairing.
        let averages = match &baseline {
            Some(series) => {
                if series.values.len() != primary.values.len() {
                    return Err(ReportError::MisalignedSeries {
                        primary: primary.values.len(),
                        baseline: series.values.len(),
                    });
                }
                Some(&series.values)
            }
            None => None,
        };

        let rows = primary
            .labels
            .iter()
            .zip(primary.values.iter())
            .enumerate()
            .map(|(slot, (label, value))| DistributionRow {
                label: match span {
                    TimeSpan::Week => weekday_label(label).to_string(),
                    _ => label.clone(),
                },
                value: *value,
                average: averages.map(|values| values[slot]),
            })
            .collect();
        Ok(rows)
    }
}

/// Maps the backend's raw weekday identifier to an English weekday name.
/// Unrecognized identifiers pass through unchanged.
fn weekday_label(raw: &str) -> &str {
    match raw {
        "1" => "Monday",
        "2" => "Tuesday",
        "3" => "Wednesday",
        "4" => "Thursday",
        "5" => "Friday",
        "6" => "Saturday",
        "7" => "Sunday",
        other => other,
    }
}

#[async_trait]
impl<C: DmsClient> ReportSource for DistributionSource<C> {
    type Row = DistributionRow;

    fn declared_arguments(&self) -> Vec<ArgumentDef> {
        self.arguments.declared()
    }

    fn columns(&self) -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Label", ColumnKind::String),
            ColumnDef::new("Value", ColumnKind::Double),
            ColumnDef::nullable("Average", ColumnKind::Double),
        ]
    }

    async fn produce_rows(&self, args: &ResolvedArgs) -> Result<Vec<DistributionRow>, ReportError> {
        let Some(span) = args.time_span else {
            return Ok(Vec::new());
        };

        let plan = plans_for(span);
        debug!(?span, ?plan, "running distribution report");

        let primary = self.fetch(plan.primary, args.view_filter).await?;
        let baseline = match plan.baseline {
            Some(baseline_plan) => Some(self.fetch(baseline_plan, args.view_filter).await?),
            None => None,
        };

        Self::shape(span, primary, baseline)
    }
}
