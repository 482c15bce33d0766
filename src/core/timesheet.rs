//! Timesheet assembly: compose the state projection and the weekly
//! aggregation into the reporting structure exposed at the boundary.

use crate::core::calculator::aggregate::aggregate_window;
use crate::core::projector::project;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::identity::EnrolledIdentity;
use crate::models::timesheet::Timesheet;
use crate::utils::date::week_window;
use chrono::{NaiveDate, Weekday};

pub struct TimesheetLogic;

impl TimesheetLogic {
    /// Build the full report for one subject at one query instant.
    ///
    /// Both sub-results are read back-to-back without locking; a concurrent
    /// append for the same subject can make the totals momentarily stale,
    /// which the next fetch self-corrects.
    pub fn assemble(
        store: &dyn EventStore,
        ident: &EnrolledIdentity,
        today: NaiveDate,
        first_dow: Weekday,
    ) -> AppResult<Timesheet> {
        let state = project(store, &ident.subject_id)?;

        let (week_start, week_end) = week_window(today, first_dow);
        let days = aggregate_window(store, &ident.subject_id, week_start, week_end)?;

        let hours_this_week = days.iter().map(|d| d.worked_hours).sum();

        let today_row = days.iter().find(|d| d.date == today);
        let hours_today = today_row.map(|d| d.worked_hours).unwrap_or(0.0);
        let break_time_today = today_row.map(|d| d.break_hours).unwrap_or(0.0);

        // Most recent date first, the order the weekly view renders.
        let mut weekly_timesheet = days;
        weekly_timesheet.reverse();

        Ok(Timesheet {
            name: ident.name.clone(),
            is_punched_in: state.is_punched_in,
            is_on_break: state.is_on_break,
            last_punch_in: state.last_punch_in,
            last_punch_out: state.last_punch_out,
            last_break_start: state.last_break_start,
            last_break_end: state.last_break_end,
            hours_today,
            hours_this_week,
            break_time_today,
            weekly_timesheet,
        })
    }
}
