use chrono::NaiveDate;
use serde::Serialize;

/// Per-calendar-date summary of worked and break hours.
///
/// Derived on demand from the ledger, never stored. Hours are plain
/// floating-point seconds/3600 sums; rounding is a presentation concern.
#[derive(Debug, Clone, Serialize)]
pub struct DayAggregate {
    pub date: NaiveDate,
    #[serde(rename = "hoursWorked")]
    pub worked_hours: f64,
    #[serde(rename = "breakTime")]
    pub break_hours: f64,
}

impl DayAggregate {
    /// An all-zero aggregate, used for dates with no events so reporting
    /// windows always contain one row per calendar date.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            worked_hours: 0.0,
            break_hours: 0.0,
        }
    }
}
