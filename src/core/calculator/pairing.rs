//! Interval reconstruction from the raw event stream.
//!
//! Pairing is a single left-to-right greedy sweep over consecutive
//! elements: events are taken two at a time, and a chunk is recognized as
//! an interval only when it is (open, close) for the category. Any other
//! chunk (open/open, a close appearing first, a dangling trailing event)
//! contributes zero duration, and both of its events are consumed: a
//! non-conforming event is never reused by a later pair. This is NOT a
//! stack-based matcher; a double punch-in swallows the event that could
//! otherwise have paired with the following punch-out.

use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventCategory;

/// A reconstructed start/end span. Derived, never stored.
#[derive(Debug, Clone)]
pub struct Interval {
    pub start: AttendanceEvent,
    pub end: AttendanceEvent,
}

impl Interval {
    /// Non-negative given the store's ascending `(timestamp, id)` order.
    pub fn duration_seconds(&self) -> i64 {
        (self.end.timestamp - self.start.timestamp).num_seconds()
    }
}

/// Run the greedy sweep over events already sorted by the ledger ordering
/// key. Foreign-category events are filtered out first; callers normally
/// pass a single-category slice straight from the store.
pub fn sweep_intervals(events: &[AttendanceEvent], category: EventCategory) -> Vec<Interval> {
    let open = category.open_kind();
    let close = category.close_kind();

    let events: Vec<&AttendanceEvent> = events
        .iter()
        .filter(|e| e.kind.category() == category)
        .collect();

    let mut intervals = Vec::new();
    let mut i = 0;

    while i + 1 < events.len() {
        let first = events[i];
        let second = events[i + 1];

        if first.kind == open && second.kind == close {
            intervals.push(Interval {
                start: first.clone(),
                end: second.clone(),
            });
        }

        i += 2;
    }

    intervals
}

/// Total recognized seconds for one category. Mismatched and dangling
/// events degrade to zero, never to negative or open-ended durations.
pub fn swept_seconds(events: &[AttendanceEvent], category: EventCategory) -> i64 {
    sweep_intervals(events, category)
        .iter()
        .map(Interval::duration_seconds)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event_kind::EventKind;
    use chrono::{TimeZone, Utc};

    fn ev(kind: EventKind, hour: u32) -> AttendanceEvent {
        AttendanceEvent::new(
            "w1",
            kind,
            Utc.with_ymd_and_hms(2026, 3, 2, hour, 0, 0).unwrap(),
            "test",
        )
    }

    #[test]
    fn well_formed_day_yields_one_interval() {
        let events = vec![ev(EventKind::PunchIn, 8), ev(EventKind::PunchOut, 16)];
        let total = swept_seconds(&events, EventCategory::Punch);
        assert_eq!(total, 8 * 3600);
    }

    #[test]
    fn dangling_open_contributes_zero() {
        let events = vec![ev(EventKind::PunchIn, 8)];
        assert_eq!(swept_seconds(&events, EventCategory::Punch), 0);
    }

    #[test]
    fn double_punch_in_swallows_the_pair() {
        // [In@08, In@09, Out@17]: the first chunk mismatches and consumes
        // both punch-ins; the punch-out is left dangling. Total is zero.
        let events = vec![
            ev(EventKind::PunchIn, 8),
            ev(EventKind::PunchIn, 9),
            ev(EventKind::PunchOut, 17),
        ];
        assert_eq!(swept_seconds(&events, EventCategory::Punch), 0);
    }

    #[test]
    fn close_before_open_contributes_zero() {
        let events = vec![
            ev(EventKind::PunchOut, 7),
            ev(EventKind::PunchIn, 8),
            ev(EventKind::PunchOut, 16),
        ];
        assert_eq!(swept_seconds(&events, EventCategory::Punch), 0);
    }

    #[test]
    fn two_clean_sessions_both_count() {
        let events = vec![
            ev(EventKind::PunchIn, 8),
            ev(EventKind::PunchOut, 12),
            ev(EventKind::PunchIn, 13),
            ev(EventKind::PunchOut, 17),
        ];
        assert_eq!(swept_seconds(&events, EventCategory::Punch), 8 * 3600);
    }
}
