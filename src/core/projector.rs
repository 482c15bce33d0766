//! State projection: derive "punched in right now" / "on break right now"
//! from the most recent ledger events.

use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::event_kind::{EventCategory, EventKind};
use chrono::{DateTime, Local};

/// Current punch state of one subject.
///
/// Only the side of each pair that is most recent is populated: if the
/// latest punch event is a PunchIn then `last_punch_in` is set and
/// `last_punch_out` is absent, and vice versa. Same for breaks.
#[derive(Debug, Clone, Default)]
pub struct PunchState {
    pub is_punched_in: bool,
    pub is_on_break: bool,
    pub last_punch_in: Option<DateTime<Local>>,
    pub last_punch_out: Option<DateTime<Local>>,
    pub last_break_start: Option<DateTime<Local>>,
    pub last_break_end: Option<DateTime<Local>>,
}

/// Project the current state from the latest punch and break events,
/// with unbounded lookback (most recent ever, not windowed to today).
///
/// A break cannot outlive a punch-out: `is_on_break` requires the subject
/// to be punched in as well.
pub fn project(store: &dyn EventStore, subject_id: &str) -> AppResult<PunchState> {
    let last_punch = store.last_event(subject_id, EventCategory::Punch)?;
    let last_break = store.last_event(subject_id, EventCategory::Break)?;

    let mut state = PunchState::default();

    if let Some(punch) = &last_punch {
        if punch.kind == EventKind::PunchIn {
            state.is_punched_in = true;
            state.last_punch_in = Some(punch.local_time());
        } else {
            state.last_punch_out = Some(punch.local_time());
        }
    }

    if let Some(brk) = &last_break {
        if brk.kind == EventKind::BreakStart {
            state.is_on_break = state.is_punched_in;
            state.last_break_start = Some(brk.local_time());
        } else {
            state.last_break_end = Some(brk.local_time());
        }
    }

    Ok(state)
}
