//! Translates a user-facing time span into the historical queries that
//! answer it.
//!
//! Every span gets a primary plan covering the current period. Day and
//! Week additionally get a baseline plan: a longer window sampled at the
//! same granularity with backend-side averaging, so the two series can be
//! compared slot-for-slot. Month has no longer window in this system and
//! therefore no baseline.

use serde::Serialize;

use crate::domain::report::time_span::TimeSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HistoryWindow {
    Last24Hours,
    LastWeek,
    LastMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeslotGranularity {
    Hour,
    DayOfWeek,
    Day,
}

impl TimeslotGranularity {
    /// Upper bound on the number of slots the backend returns for a
    /// series of this granularity.
    pub fn slot_capacity(self) -> usize {
        match self {
            TimeslotGranularity::Hour => 24,
            TimeslotGranularity::DayOfWeek => 7,
            TimeslotGranularity::Day => 31,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AveragingMode {
    None,
    DailyAverage,
    WeeklyAverage,
}

/// One historical-data query: window, slot granularity and averaging
/// as understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QueryPlan {
    pub window: HistoryWindow,
    pub timeslot: TimeslotGranularity,
    pub averaging: AveragingMode,
}

/// The queries needed for one distribution report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPlan {
    pub primary: QueryPlan,
    pub baseline: Option<QueryPlan>,
}

pub fn plans_for(span: TimeSpan) -> ReportPlan {
    match span {
        TimeSpan::Day => ReportPlan {
            primary: QueryPlan {
                window: HistoryWindow::Last24Hours,
                timeslot: TimeslotGranularity::Hour,
                averaging: AveragingMode::None,
            },
            baseline: Some(QueryPlan {
                window: HistoryWindow::LastWeek,
                timeslot: TimeslotGranularity::Hour,
                averaging: AveragingMode::DailyAverage,
            }),
        },
        TimeSpan::Week => ReportPlan {
            primary: QueryPlan {
                window: HistoryWindow::LastWeek,
                timeslot: TimeslotGranularity::DayOfWeek,
                averaging: AveragingMode::None,
            },
            baseline: Some(QueryPlan {
                window: HistoryWindow::LastMonth,
                timeslot: TimeslotGranularity::DayOfWeek,
                averaging: AveragingMode::WeeklyAverage,
            }),
        },
        TimeSpan::Month => ReportPlan {
            primary: QueryPlan {
                window: HistoryWindow::LastMonth,
                timeslot: TimeslotGranularity::Day,
                averaging: AveragingMode::None,
            },
            baseline: None,
        },
    }
}
