//! Top-5 percentage of time spent in each alarm state per monitored
//! object. Same shape as the event-count report, but over the state-data
//! query family and with percentages instead of counts.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::core::client::dms::DmsClient;
use crate::core::client::messages::TopAlarmRequest;
use crate::domain::report::args::{ArgumentDef, ReportArguments, ResolvedArgs};
use crate::domain::report::names::NameResolver;
use crate::domain::report::service::TOP_RESULT_LIMIT;
use crate::domain::report::source::{ColumnDef, ColumnKind, ReportSource};
use crate::errors::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateShareRow {
    pub name: String,
    pub timeout: f64,
    pub warning: f64,
    pub minor: f64,
    pub major: f64,
    pub critical: f64,
}

pub struct StatesSource<C> {
    dms: Arc<C>,
    arguments: Arc<ReportArguments>,
}

impl<C: DmsClient> StatesSource<C> {
    pub fn new(dms: Arc<C>, arguments: Arc<ReportArguments>) -> Self {
        StatesSource { dms, arguments }
    }
}

#[async_trait]
impl<C: DmsClient> ReportSource for StatesSource<C> {
    type Row = StateShareRow;

    fn declared_arguments(&self) -> Vec<ArgumentDef> {
        self.arguments.declared()
    }

    fn columns(&self) -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Name", ColumnKind::String),
            ColumnDef::new("Timeout", ColumnKind::Double),
            ColumnDef::new("Warning", ColumnKind::Double),
            ColumnDef::new("Minor", ColumnKind::Double),
            ColumnDef::new("Major", ColumnKind::Double),
            ColumnDef::new("Critical", ColumnKind::Double),
        ]
    }

    async fn produce_rows(&self, args: &ResolvedArgs) -> Result<Vec<StateShareRow>, ReportError> {
        let Some(span) = args.time_span else {
            return Ok(Vec::new());
        };

        let req =
            TopAlarmRequest::top_by_total(span.identifier(), args.view_filter, TOP_RESULT_LIMIT);
        let mut objects = self.dms.top_alarm_states(&req).await?;
        debug!(?span, objects = objects.len(), "shaping state report");

        objects.sort_by(|a, b| b.total().total_cmp(&a.total()));
        objects.truncate(TOP_RESULT_LIMIT);

        let resolver = NameResolver::new(&*self.dms);
        let mut rows = Vec::with_capacity(objects.len());
        for object in objects {
            let name = resolver
                .display_name(object.agent_id, object.object_id, object.is_service)
                .await?;
            rows.push(StateShareRow {
                name,
                timeout: object.percentage_timeout,
                warning: object.percentage_warning,
                minor: object.percentage_minor,
                major: object.percentage_major,
                critical: object.percentage_critical,
            });
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::service::test_support::{state_row, MockDms};

    fn args_for(raw_span: &str) -> ResolvedArgs {
        ReportArguments::new().resolve(None, raw_span)
    }

    #[tokio::test]
    async fn truncates_to_five_rows_ordered_by_total() {
        let mut dms = MockDms::default();
        for id in 0..7 {
            dms = dms.with_service(4, id, &format!("Service {id}"));
        }
        let states = (0..7)
            .map(|id| state_row(4, id, true, [id as f64, 0.0, 0.0, 0.0, 0.0]))
            .collect();
        let dms = dms.with_states(states);

        let source = StatesSource::new(Arc::new(dms), Arc::new(ReportArguments::new()));
        let rows = source.produce_rows(&args_for("WEEK")).await.unwrap();

        assert_eq!(rows.len(), TOP_RESULT_LIMIT);
        assert_eq!(rows[0].name, "Service 6");
        assert_eq!(rows[4].name, "Service 2");
    }

    #[tokio::test]
    async fn carries_percentages_through_unchanged() {
        let dms = MockDms::default()
            .with_element(1, 5, "Transcoder")
            .with_states(vec![state_row(1, 5, false, [0.5, 1.5, 2.5, 3.5, 4.5])]);
        let source = StatesSource::new(Arc::new(dms), Arc::new(ReportArguments::new()));

        let rows = source.produce_rows(&args_for("DAY")).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Transcoder");
        assert_eq!(rows[0].timeout, 0.5);
        assert_eq!(rows[0].critical, 4.5);
    }

    #[tokio::test]
    async fn unknown_object_gets_placeholder_name() {
        let dms = MockDms::default().with_states(vec![state_row(2, 8, true, [1.0; 5])]);
        let source = StatesSource::new(Arc::new(dms), Arc::new(ReportArguments::new()));

        let rows = source.produce_rows(&args_for("MONTH")).await.unwrap();
        assert_eq!(rows[0].name, "Service 2/8");
    }

    #[tokio::test]
    async fn unrecognized_span_yields_no_rows_and_no_queries() {
        let dms = Arc::new(MockDms::default());
        let source = StatesSource::new(dms.clone(), Arc::new(ReportArguments::new()));

        let rows = source.produce_rows(&args_for("hour")).await.unwrap();
        assert!(rows.is_empty());
        assert!(dms.top_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn backend_failure_fails_the_request() {
        let source =
            StatesSource::new(Arc::new(MockDms::failing()), Arc::new(ReportArguments::new()));
        let err = source.produce_rows(&args_for("DAY")).await.unwrap_err();
        assert!(matches!(err, ReportError::Backend(_)));
    }
}
