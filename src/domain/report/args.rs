//! Declared report arguments and their resolution.
//!
//! Every report variant takes the same two parameters: an optional view
//! filter and a required time span. The catalog describing them is built
//! once at startup and shared read-only through `AppState`; there is no
//! lazily initialized global.

use serde::Serialize;
use serde_json::json;

use crate::domain::report::time_span::TimeSpan;

/// View id a report is scoped to, `-1` meaning "all monitored objects".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewFilter(i32);

impl ViewFilter {
    pub const ALL: ViewFilter = ViewFilter(-1);

    pub fn new(view_id: i32) -> Self {
        ViewFilter(view_id)
    }

    pub fn view_id(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentKind {
    Int,
    String,
}

/// Caller-facing description of one report argument.
#[derive(Debug, Clone, Serialize)]
pub struct ArgumentDef {
    pub name: &'static str,
    pub kind: ArgumentKind,
    pub required: bool,
    pub default: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<&'static str>>,
}

/// Arguments of a resolved request, owned by that request alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedArgs {
    pub view_filter: ViewFilter,
    /// `None` when the raw identifier matched no catalog entry; shapers
    /// answer that with an empty row set.
    pub time_span: Option<TimeSpan>,
}

/// The immutable argument catalog shared by all report variants.
#[derive(Debug, Clone)]
pub struct ReportArguments {
    view_filter: ArgumentDef,
    time_span: ArgumentDef,
}

impl ReportArguments {
    pub fn new() -> Self {
        ReportArguments {
            view_filter: ArgumentDef {
                name: "View filter",
                kind: ArgumentKind::Int,
                required: false,
                default: json!(ViewFilter::ALL.view_id()),
                options: None,
            },
            time_span: ArgumentDef {
                name: "Time span",
                kind: ArgumentKind::String,
                required: true,
                default: json!(TimeSpan::Day.identifier()),
                options: Some(TimeSpan::ALL.iter().map(|s| s.identifier()).collect()),
            },
        }
    }

    /// Both argument declarations, in selector order.
    pub fn declared(&self) -> Vec<ArgumentDef> {
        vec![self.view_filter.clone(), self.time_span.clone()]
    }

    /// Only the time-span declaration (the legend variant takes no view
    /// filter).
    pub fn declared_time_span_only(&self) -> Vec<ArgumentDef> {
        vec![self.time_span.clone()]
    }

    pub fn resolve(&self, view: Option<i32>, raw_time_span: &str) -> ResolvedArgs {
        ResolvedArgs {
            view_filter: view.map(ViewFilter::new).unwrap_or(ViewFilter::ALL),
            time_span: TimeSpan::from_identifier(raw_time_span),
        }
    }
}

impl Default for ReportArguments {
    fn default() -> Self {
        Self::new()
    }
}
