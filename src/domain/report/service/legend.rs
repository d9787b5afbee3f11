//! Legend rows for the distribution chart.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::report::args::{ArgumentDef, ReportArguments, ResolvedArgs};
use crate::domain::report::source::{ColumnDef, ColumnKind, ReportSource};
use crate::domain::report::time_span::TimeSpan;
use crate::errors::ReportError;

pub const WEEKLY_AVG_LABEL: &str = "7 day average";
pub const MONTHLY_AVG_LABEL: &str = "30 day average";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendRow {
    pub label: &'static str,
    pub is_average: bool,
}

impl LegendRow {
    const fn new(label: &'static str, is_average: bool) -> Self {
        LegendRow { label, is_average }
    }
}

/// One legend entry per series the distribution report draws for the
/// selected span: the current period, plus the baseline where one exists.
pub fn legend_rows(span: Option<TimeSpan>) -> Vec<LegendRow> {
    match span {
        Some(TimeSpan::Day) => vec![
            LegendRow::new(TimeSpan::Day.label(), false),
            LegendRow::new(WEEKLY_AVG_LABEL, true),
        ],
        Some(TimeSpan::Week) => vec![
            LegendRow::new(TimeSpan::Week.label(), false),
            LegendRow::new(MONTHLY_AVG_LABEL, true),
        ],
        Some(TimeSpan::Month) => vec![LegendRow::new(TimeSpan::Month.label(), false)],
        None => Vec::new(),
    }
}

pub struct LegendSource {
    arguments: Arc<ReportArguments>,
}

impl LegendSource {
    pub fn new(arguments: Arc<ReportArguments>) -> Self {
        LegendSource { arguments }
    }
}

#[async_trait]
impl ReportSource for LegendSource {
    type Row = LegendRow;

    fn declared_arguments(&self) -> Vec<ArgumentDef> {
        self.arguments.declared_time_span_only()
    }

    fn columns(&self) -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Label", ColumnKind::String),
            ColumnDef::new("Is average", ColumnKind::Boolean),
        ]
    }

    async fn produce_rows(&self, args: &ResolvedArgs) -> Result<Vec<LegendRow>, ReportError> {
        Ok(legend_rows(args.time_span))
    }
}
