use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::aggregate_window;
use crate::db::identities::find_identity;
use crate::db::pool::DbPool;
use crate::db::store::SqliteEventStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use chrono::{Datelike, NaiveDate};

/// Per-day aggregates over a period, rendered as a calendar table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timesheet { subject, period } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let ident = find_identity(&pool.conn, subject)?;

        let (start, end) = resolve_period(period)?;

        let store = SqliteEventStore::new(&pool.conn);
        let days = aggregate_window(&store, &ident.subject_id, start, end)?;

        let mut table = Table::new(vec![
            Column {
                header: "DATE".to_string(),
                width: 10,
            },
            Column {
                header: "WORKED".to_string(),
                width: 8,
            },
            Column {
                header: "BREAK".to_string(),
                width: 8,
            },
        ]);

        let mut total_worked = 0.0;
        let mut total_break = 0.0;

        for day in &days {
            total_worked += day.worked_hours;
            total_break += day.break_hours;
            table.add_row(vec![
                day.date.to_string(),
                hours2readable(day.worked_hours),
                hours2readable(day.break_hours),
            ]);
        }

        println!("\n=== {} ({} → {}) ===\n", ident.name, start, end);
        println!("{}", table.render());
        println!(
            "Total: {} worked, {} break",
            hours2readable(total_worked),
            hours2readable(total_break)
        );
    }

    Ok(())
}

/// Expand `--period` into an inclusive date window; defaults to the
/// current month, the range a site admin reviews most.
pub(crate) fn resolve_period(period: &Option<String>) -> AppResult<(NaiveDate, NaiveDate)> {
    let dates = match period {
        Some(p) if p.contains(':') => {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidDate)?
            } else {
                return Err(AppError::InvalidDate(p.clone()));
            }
        }
        Some(p) => date::generate_from_period(p).map_err(AppError::InvalidDate)?,
        None => {
            let t = date::today();
            date::all_days_of_month(t.year(), t.month())
        }
    };

    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => Ok((*first, *last)),
        _ => Err(AppError::InvalidDate("empty period".to_string())),
    }
}
