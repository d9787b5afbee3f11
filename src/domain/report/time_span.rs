//! Selectable reporting time spans and their canonical identifiers.

use serde::Serialize;

/// One of the three reporting windows a dashboard user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeSpan {
    Day,
    Week,
    Month,
}

impl TimeSpan {
    /// Catalog order; also the display order of the selector dropdown.
    pub const ALL: [TimeSpan; 3] = [TimeSpan::Day, TimeSpan::Week, TimeSpan::Month];

    /// Canonical identifier as sent by the dashboard and the backend.
    pub fn identifier(self) -> &'static str {
        match self {
            TimeSpan::Day => "DAY",
            TimeSpan::Week => "WEEK",
            TimeSpan::Month => "MONTH",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeSpan::Day => "Last 24 hours",
            TimeSpan::Week => "Last 7 days",
            TimeSpan::Month => "Last 30 days",
        }
    }

    /// Case-sensitive match against the canonical identifiers.
    ///
    /// Anything else resolves to `None`; shapers turn that into an empty
    /// result set rather than an error.
    pub fn from_identifier(raw: &str) -> Option<TimeSpan> {
        match raw {
            "DAY" => Some(TimeSpan::Day),
            "WEEK" => Some(TimeSpan::Week),
            "MONTH" => Some(TimeSpan::Month),
            _ => None,
        }
    }
}
