//! Event ingestion: stamp and append punch/break commands to the ledger.

use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::{EventCategory, EventKind};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakDirection {
    Start,
    End,
}

pub struct ClockLogic;

impl ClockLogic {
    /// Record a punch event. The timestamp is stamped here (`now()`)
    /// unless the caller supplies an explicit instant for back-filling.
    ///
    /// Punching out auto-closes an open break: if the subject's latest
    /// break event is a BreakStart, a synthetic BreakEnd is appended at
    /// the same punch-out instant, so `is_on_break` can never outlive a
    /// punch-out. Returns every appended event.
    pub fn record_punch(
        store: &dyn EventStore,
        subject_id: &str,
        direction: PunchDirection,
        at: Option<DateTime<Utc>>,
        source: &str,
    ) -> AppResult<Vec<AttendanceEvent>> {
        let ts = at.unwrap_or_else(Utc::now);
        let kind = match direction {
            PunchDirection::In => EventKind::PunchIn,
            PunchDirection::Out => EventKind::PunchOut,
        };

        let mut appended = vec![store.append(&AttendanceEvent::new(subject_id, kind, ts, source))?];

        if direction == PunchDirection::Out
            && let Some(last_break) = store.last_event(subject_id, EventCategory::Break)?
            && last_break.kind == EventKind::BreakStart
        {
            appended.push(store.append(&AttendanceEvent::new(
                subject_id,
                EventKind::BreakEnd,
                ts,
                "auto",
            ))?);
        }

        Ok(appended)
    }

    /// Record a break event. Starting a break requires the subject to be
    /// currently punched in; ending one is always accepted (the ledger
    /// tolerates malformed histories, and pairing degrades them to zero).
    pub fn record_break(
        store: &dyn EventStore,
        subject_id: &str,
        direction: BreakDirection,
        at: Option<DateTime<Utc>>,
        source: &str,
    ) -> AppResult<AttendanceEvent> {
        if direction == BreakDirection::Start {
            let punched_in = store
                .last_event(subject_id, EventCategory::Punch)?
                .is_some_and(|ev| ev.kind == EventKind::PunchIn);

            if !punched_in {
                return Err(AppError::NotPunchedIn);
            }
        }

        let ts = at.unwrap_or_else(Utc::now);
        let kind = match direction {
            BreakDirection::Start => EventKind::BreakStart,
            BreakDirection::End => EventKind::BreakEnd,
        };

        store.append(&AttendanceEvent::new(subject_id, kind, ts, source))
    }
}
