//! Day-level aggregation: bucket ledger events by local calendar date and
//! sum the recognized interval durations into worked/break hours.

use crate::core::calculator::pairing::swept_seconds;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::day_aggregate::DayAggregate;
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventCategory;
use crate::utils::date::{days_in_window, local_day_bounds, local_midnight_utc};
use crate::utils::time::seconds_to_hours;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Aggregate one subject over an inclusive date window.
///
/// Emits exactly one `DayAggregate` per calendar date in the window,
/// all-zero rows included, so callers can render a complete calendar.
/// One store query per category covers the whole window; bucketing and
/// pairing happen here, store-agnostically.
pub fn aggregate_window(
    store: &dyn EventStore,
    subject_id: &str,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> AppResult<Vec<DayAggregate>> {
    if window_start > window_end {
        return Err(AppError::InvalidWindow {
            start: window_start.to_string(),
            end: window_end.to_string(),
        });
    }

    let from = local_midnight_utc(window_start);
    let (_, to) = local_day_bounds(window_end);

    let punches = store.events_in_window(subject_id, EventCategory::Punch, from, to)?;
    let breaks = store.events_in_window(subject_id, EventCategory::Break, from, to)?;

    let punches_by_day = bucket_by_local_date(punches);
    let breaks_by_day = bucket_by_local_date(breaks);

    let mut out = Vec::new();
    for date in days_in_window(window_start, window_end) {
        let worked = punches_by_day
            .get(&date)
            .map(|evs| swept_seconds(evs, EventCategory::Punch))
            .unwrap_or(0);
        let brk = breaks_by_day
            .get(&date)
            .map(|evs| swept_seconds(evs, EventCategory::Break))
            .unwrap_or(0);

        out.push(DayAggregate {
            date,
            worked_hours: seconds_to_hours(worked),
            break_hours: seconds_to_hours(brk),
        });
    }

    Ok(out)
}

/// Single-day variant, used for "today" totals.
pub fn aggregate_day(
    store: &dyn EventStore,
    subject_id: &str,
    date: NaiveDate,
) -> AppResult<DayAggregate> {
    let mut days = aggregate_window(store, subject_id, date, date)?;
    Ok(days.pop().unwrap_or_else(|| DayAggregate::empty(date)))
}

/// Group events by their local calendar date, preserving the store's
/// `(timestamp, id)` order within each bucket.
fn bucket_by_local_date(
    events: Vec<AttendanceEvent>,
) -> BTreeMap<NaiveDate, Vec<AttendanceEvent>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<AttendanceEvent>> = BTreeMap::new();
    for ev in events {
        buckets.entry(ev.local_date()).or_default().push(ev);
    }
    buckets
}
