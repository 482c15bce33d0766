use super::event_kind::EventKind;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

/// One appended row of the attendance ledger.
///
/// Events are never updated or deleted by the core; the ordering key is
/// `(subject_id, timestamp)` with the autoincrement `id` as the stable
/// tiebreaker for same-instant events.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEvent {
    pub id: i64,              // ⇔ events.id (INTEGER PRIMARY KEY, insertion order)
    pub subject_id: String,   // ⇔ events.subject_id
    pub kind: EventKind,      // ⇔ events.kind
    pub timestamp: DateTime<Utc>, // ⇔ events.timestamp (UTC RFC3339 text)
    pub source: String,       // ⇔ events.source ('cli', 'auto', ...)
    pub created_at: String,   // ⇔ events.created_at (ISO8601)
}

impl AttendanceEvent {
    /// Constructor for events about to be appended.
    /// - `id = 0` (assigned by the store on append)
    /// - `created_at = now() in ISO8601`
    pub fn new(
        subject_id: impl Into<String>,
        kind: EventKind,
        timestamp: DateTime<Utc>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            subject_id: subject_id.into(),
            kind,
            timestamp,
            source: source.into(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Calendar date of the event in local time; the aggregation engine
    /// buckets by this.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }

    /// Event instant in local time, for display.
    pub fn local_time(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }
}
