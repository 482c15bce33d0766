//! The attendance event store: the append-only system of record.
//!
//! The core consumes the store through the [`EventStore`] trait and receives
//! a handle explicitly; components never reach for a shared global
//! connection. [`SqliteEventStore`] is the production implementation.

use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::{EventCategory, EventKind};
use crate::utils::time::{fmt_ts, parse_ts};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row, params};

/// Contract the ledger core requires from any backing store.
///
/// Results are always ordered ascending by `(timestamp, id)`; the stable
/// `id` tiebreaker matters because the pairing sweep is order-sensitive
/// for same-instant events.
pub trait EventStore {
    /// Append one event; returns the stored row with its assigned id.
    fn append(&self, event: &AttendanceEvent) -> AppResult<AttendanceEvent>;

    /// Events of one category for a subject within `[from, to)`.
    fn events_in_window(
        &self,
        subject_id: &str,
        category: EventCategory,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<AttendanceEvent>>;

    /// Most recent event of one category for a subject, unbounded lookback.
    fn last_event(
        &self,
        subject_id: &str,
        category: EventCategory,
    ) -> AppResult<Option<AttendanceEvent>>;
}

/// SQLite-backed store over a borrowed connection.
pub struct SqliteEventStore<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteEventStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl EventStore for SqliteEventStore<'_> {
    fn append(&self, event: &AttendanceEvent) -> AppResult<AttendanceEvent> {
        self.conn.execute(
            "INSERT INTO events (subject_id, kind, timestamp, source, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.subject_id,
                event.kind.to_db_str(),
                fmt_ts(&event.timestamp),
                event.source,
                event.created_at,
            ],
        )?;

        let mut stored = event.clone();
        stored.id = self.conn.last_insert_rowid();
        Ok(stored)
    }

    fn events_in_window(
        &self,
        subject_id: &str,
        category: EventCategory,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<AttendanceEvent>> {
        let (open, close) = category.db_strs();

        let mut stmt = self.conn.prepare_cached(
            "SELECT id, subject_id, kind, timestamp, source, created_at
             FROM events
             WHERE subject_id = ?1
               AND kind IN (?2, ?3)
               AND timestamp >= ?4
               AND timestamp < ?5
             ORDER BY timestamp ASC, id ASC",
        )?;

        let rows = stmt.query_map(
            params![subject_id, open, close, fmt_ts(&from), fmt_ts(&to)],
            map_row,
        )?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn last_event(
        &self,
        subject_id: &str,
        category: EventCategory,
    ) -> AppResult<Option<AttendanceEvent>> {
        let (open, close) = category.db_strs();

        let mut stmt = self.conn.prepare_cached(
            "SELECT id, subject_id, kind, timestamp, source, created_at
             FROM events
             WHERE subject_id = ?1
               AND kind IN (?2, ?3)
             ORDER BY timestamp DESC, id DESC
             LIMIT 1",
        )?;

        let mut rows = stmt.query_map(params![subject_id, open, close], map_row)?;

        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }
}

fn map_row(row: &Row) -> rusqlite::Result<AttendanceEvent> {
    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventKind(kind_str.clone())),
        )
    })?;

    let ts_str: String = row.get("timestamp")?;
    let timestamp = parse_ts(&ts_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(AttendanceEvent {
        id: row.get("id")?,
        subject_id: row.get("subject_id")?,
        kind,
        timestamp,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}
