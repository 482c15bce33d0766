use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EventExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use crate::utils::date::{local_day_bounds, local_midnight_utc};
use crate::utils::time::fmt_ts;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export ledger events, optionally filtered by subject and range.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        subject: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let events = load_events(pool, date_bounds, subject)?;

        if events.is_empty() {
            warning("⚠️  No events found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&events, path)?,
            ExportFormat::Json => export_json(&events, path)?,
        }

        Ok(())
    }
}

/// Load flat export rows, joining the gallery for subject names.
fn load_events(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
    subject: Option<&str>,
) -> AppResult<Vec<EventExport>> {
    let mut sql = String::from(
        "SELECT e.id, e.subject_id, i.name, e.kind, e.timestamp, e.source
         FROM events e
         JOIN identities i ON i.subject_id = e.subject_id
         WHERE 1=1",
    );

    let mut args: Vec<String> = Vec::new();

    if let Some((start, end)) = bounds {
        let from = local_midnight_utc(start);
        let (_, to) = local_day_bounds(end);
        sql.push_str(" AND e.timestamp >= ? AND e.timestamp < ?");
        args.push(fmt_ts(&from));
        args.push(fmt_ts(&to));
    }

    if let Some(s) = subject {
        sql.push_str(" AND e.subject_id = ?");
        args.push(s.to_string());
    }

    sql.push_str(" ORDER BY e.timestamp ASC, e.id ASC");

    let mut stmt = pool.conn.prepare(&sql)?;

    let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), |row| {
        Ok(EventExport {
            id: row.get(0)?,
            subject_id: row.get(1)?,
            name: row.get(2)?,
            kind: row.get(3)?,
            timestamp: row.get(4)?,
            source: row.get(5)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
