use crate::cli::commands::resolve_subject;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::aggregate::aggregate_day;
use crate::core::clock::{BreakDirection, ClockLogic};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::SqliteEventStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::today;
use crate::utils::hours2readable;
use crate::utils::time::parse_ts;

/// Record a break-start or break-end for a subject.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Break {
        direction,
        subject,
        probe,
        at,
    } = cmd
    {
        let direction = match direction.as_str() {
            "start" => BreakDirection::Start,
            "end" => BreakDirection::End,
            other => return Err(AppError::InvalidEventKind(other.to_string())),
        };

        let at = match at {
            Some(raw) => Some(parse_ts(raw)?),
            None => None,
        };

        let pool = DbPool::new(&cfg.database)?;
        let ident = resolve_subject(&pool, cfg, subject, probe)?;

        let store = SqliteEventStore::new(&pool.conn);
        ClockLogic::record_break(
            &store,
            &ident.subject_id,
            direction,
            at,
            &cfg.default_source,
        )?;

        let op = match direction {
            BreakDirection::Start => "break_start",
            BreakDirection::End => "break_end",
        };
        let _ = ttlog(&pool.conn, op, &ident.name, "Break recorded");

        match direction {
            BreakDirection::Start => success(format!("{} is on break.", ident.name)),
            BreakDirection::End => success(format!("{} is back from break.", ident.name)),
        }

        let day = aggregate_day(&store, &ident.subject_id, today())?;
        println!("Break time today: {}", hours2readable(day.break_hours));
    }

    Ok(())
}
