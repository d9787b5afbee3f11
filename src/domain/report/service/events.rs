//! Top-5 alarm-event counts per monitored object.

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

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCountRow {
    pub name: String,
    pub timeout: i64,
    pub warning: i64,
    pub minor: i64,
    pub major: i64,
    pub critical: i64,
}

pub struct EventsSource<C> {
    dms: Arc<C>,
    arguments: Arc<ReportArguments>,
}

impl<C: DmsClient> EventsSource<C> {
    pub fn new(dms: Arc<C>, arguments: Arc<ReportArguments>) -> Self {
        EventsSource { dms, arguments }
    }
}

#[async_trait]
impl<C: DmsClient> ReportSource for EventsSource<C> {
    type Row = EventCountRow;

    fn declared_arguments(&self) -> Vec<ArgumentDef> {
        self.arguments.declared()
    }

    fn columns(&self) -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Name", ColumnKind::String),
            ColumnDef::new("Timeout", ColumnKind::Int),
            ColumnDef::new("Warning", ColumnKind::Int),
            ColumnDef::new("Minor", ColumnKind::Int),
            ColumnDef::new("Major", ColumnKind::Int),
            ColumnDef::new("Critical", ColumnKind::Int),
        ]
    }

    async fn produce_rows(&self, args: &ResolvedArgs) -> Result<Vec<EventCountRow>, ReportError> {
        let Some(span) = args.time_span else {
            return Ok(Vec::new());
        };

        let req =
            TopAlarmRequest::top_by_total(span.identifier(), args.view_filter, TOP_RESULT_LIMIT);
        let mut objects = self.dms.top_alarm_counts(&req).await?;
        debug!(?span, objects = objects.len(), "shaping event count report");

        // The backend sorts and caps the broadcast result itself; hold it
        // to that rather than trusting it.
        objects.sort_by_key(|o| std::cmp::Reverse(o.total()));
        objects.truncate(TOP_RESULT_LIMIT);

        let resolver = NameResolver::new(&*self.dms);
        let mut rows = Vec::with_capacity(objects.len());
        for object in objects {
            let name = resolver
                .display_name(object.agent_id, object.object_id, object.is_service)
                .await?;
            rows.push(EventCountRow {
                name,
                timeout: object.amount_timeout,
                warning: object.amount_warning,
                minor: object.amount_minor,
                major: object.amount_major,
                critical: object.amount_critical,
            });
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::service::test_support::{count_row, MockDms};

    fn args_for(raw_span: &str) -> ResolvedArgs {
        ReportArguments::new().resolve(Some(12), raw_span)
    }

    #[tokio::test]
    async fn truncates_to_five_rows_ordered_by_total() {
        let mut dms = MockDms::default();
        for id in 0..8 {
            dms = dms.with_element(1, id, &format!("Element {id}"));
        }
        let counts = (0..8)
            .map(|id| count_row(1, id, false, [id as i64, 0, 0, 0, 0]))
            .collect();
        let dms = dms.with_counts(counts);

        let source = EventsSource::new(Arc::new(dms), Arc::new(ReportArguments::new()));
        let rows = source.produce_rows(&args_for("DAY")).await.unwrap();

        assert_eq!(rows.len(), TOP_RESULT_LIMIT);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Element 7",
                "Element 6",
                "Element 5",
                "Element 4",
                "Element 3"
            ]
        );
    }

    #[tokio::test]
    async fn resolves_element_and_service_names() {
        let dms = MockDms::default()
            .with_element(1, 100, "Encoder A")
            .with_service(2, 200, "Playout")
            .with_counts(vec![
                count_row(1, 100, false, [0, 1, 2, 3, 4]),
                count_row(2, 200, true, [1, 1, 1, 1, 1]),
            ]);

        let source = EventsSource::new(Arc::new(dms), Arc::new(ReportArguments::new()));
        let rows = source.produce_rows(&args_for("WEEK")).await.unwrap();

        assert_eq!(rows[0].name, "Encoder A");
        assert_eq!(rows[0].critical, 4);
        assert_eq!(rows[1].name, "Playout");
    }

    #[tokio::test]
    async fn unknown_object_gets_placeholder_name() {
        let dms =
            MockDms::default().with_counts(vec![count_row(9, 77, false, [1, 0, 0, 0, 0])]);
        let source = EventsSource::new(Arc::new(dms), Arc::new(ReportArguments::new()));

        let rows = source.produce_rows(&args_for("DAY")).await.unwrap();
        assert_eq!(rows[0].name, "Element 9/77");
    }

    #[tokio::test]
    async fn request_carries_span_identifier_and_view() {
        let dms = Arc::new(MockDms::default());
        let source = EventsSource::new(dms.clone(), Arc::new(ReportArguments::new()));
        source.produce_rows(&args_for("MONTH")).await.unwrap();

        let requests = dms.top_requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].time_span, "MONTH");
        assert_eq!(requests[0].view_id, 12);
        assert_eq!(requests[0].max_amount, TOP_RESULT_LIMIT);
    }

    #[tokio::test]
    async fn unrecognized_span_yields_no_rows_and_no_queries() {
        let dms = Arc::new(MockDms::default());
        let source = EventsSource::new(dms.clone(), Arc::new(ReportArguments::new()));

        let rows = source.produce_rows(&args_for("YESTERDAY")).await.unwrap();
        assert!(rows.is_empty());
        assert!(dms.top_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn repeated_requests_are_idempotent() {
        let dms = MockDms::default()
            .with_element(1, 1, "A")
            .with_counts(vec![count_row(1, 1, false, [1, 2, 3, 4, 5])]);
        let source = EventsSource::new(Arc::new(dms), Arc::new(ReportArguments::new()));

        let first = source.produce_rows(&args_for("DAY")).await.unwrap();
        let second = source.produce_rows(&args_for("DAY")).await.unwrap();
        assert_eq!(first, second);
    }
}
