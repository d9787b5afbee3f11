//! Static selector source listing the available time spans.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::report::args::{ArgumentDef, ResolvedArgs};
use crate::domain::report::source::{ColumnDef, ColumnKind, ReportSource};
use crate::domain::report::time_span::TimeSpan;
use crate::errors::ReportError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSpanRow {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Default)]
pub struct TimeSpansSource;

#[async_trait]
impl ReportSource for TimeSpansSource {
    type Row = TimeSpanRow;

    fn declared_arguments(&self) -> Vec<ArgumentDef> {
        Vec::new()
    }

    fn columns(&self) -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Label", ColumnKind::String),
            ColumnDef::new("Value", ColumnKind::String),
        ]
    }

    async fn produce_rows(&self, _args: &ResolvedArgs) -> Result<Vec<TimeSpanRow>, ReportError> {
        Ok(TimeSpan::ALL
            .iter()
            .map(|span| TimeSpanRow {
                label: span.label(),
                value: span.identifier(),
            })
            .collect())
    }
}
