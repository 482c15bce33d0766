//! Database migration engine.
//!
//! Schema changes are expressed as ordered, idempotent migrations tracked in
//! the `schema_version` table; `run_pending_migrations` applies whatever the
//! current database is missing and records each step in the internal log.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: i64,
    name: &'static str,
    up: fn(&Connection) -> rusqlite::Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "initial_schema",
        up: migrate_v1_initial_schema,
    },
    Migration {
        version: 2,
        name: "event_kind_index",
        up: migrate_v2_event_kind_index,
    },
];

/// Apply all migrations newer than the database's recorded version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_version_table(conn)?;

    let current = current_version(conn)?;

    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        (m.up)(conn).map_err(|e| {
            AppError::Migration(format!("migration {} ({}) failed: {e}", m.version, m.name))
        })?;

        conn.execute(
            "INSERT INTO schema_version (version, name, applied_at)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![m.version, m.name, chrono::Local::now().to_rfc3339()],
        )?;

        // Non-blocking: the log table itself is created by migration 1.
        let _ = ttlog(
            conn,
            "migration_applied",
            m.name,
            &format!("Schema migrated to version {}", m.version),
        );
    }

    Ok(())
}

fn ensure_version_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            name       TEXT NOT NULL,
            applied_at TEXT NOT NULL
        );
        "#,
    )
}

fn current_version(conn: &Connection) -> rusqlite::Result<i64> {
    let v: Option<i64> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .optional()?
        .flatten();
    Ok(v.unwrap_or(0))
}

fn migrate_v1_initial_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS identities (
            subject_id  TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            role        TEXT NOT NULL CHECK(role IN ('worker','admin')),
            template    TEXT,
            enrolled_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_id TEXT NOT NULL REFERENCES identities(subject_id),
            kind       TEXT NOT NULL
                       CHECK(kind IN ('punch_in','punch_out','break_start','break_end')),
            timestamp  TEXT NOT NULL,
            source     TEXT NOT NULL DEFAULT 'cli',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_subject_ts ON events(subject_id, timestamp);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn migrate_v2_event_kind_index(conn: &Connection) -> rusqlite::Result<()> {
    // The projector and aggregator filter by category on every read.
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_events_subject_kind_ts
         ON events(subject_id, kind, timestamp);",
    )
}
