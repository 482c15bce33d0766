use super::day_aggregate::DayAggregate;
use chrono::{DateTime, Local};
use serde::Serialize;

/// The reporting structure exposed at the query boundary: current punch
/// state plus today/this-week totals and the per-day breakdown.
///
/// Serialized with camelCase keys; optional timestamps are RFC 3339 and
/// omitted entirely when absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub name: String,

    pub is_punched_in: bool,
    pub is_on_break: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_punch_in: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_punch_out: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_break_start: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_break_end: Option<DateTime<Local>>,

    pub hours_today: f64,
    pub hours_this_week: f64,
    pub break_time_today: f64,

    /// One entry per day of the current week, most recent date first.
    pub weekly_timesheet: Vec<DayAggregate>,
}
