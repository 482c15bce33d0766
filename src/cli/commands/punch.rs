use crate::cli::commands::resolve_subject;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{ClockLogic, PunchDirection};
use crate::core::timesheet::TimesheetLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::SqliteEventStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::today;
use crate::utils::hours2readable;
use crate::utils::time::parse_ts;

/// Record a punch-in or punch-out for a subject.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        direction,
        subject,
        probe,
        at,
    } = cmd
    {
        //
        // 1. Parse direction and optional timestamp override
        //
        let direction = match direction.as_str() {
            "in" => PunchDirection::In,
            "out" => PunchDirection::Out,
            other => return Err(AppError::InvalidEventKind(other.to_string())),
        };

        let at = match at {
            Some(raw) => Some(parse_ts(raw)?),
            None => None,
        };

        //
        // 2. Resolve the acting subject (by id or by face)
        //
        let pool = DbPool::new(&cfg.database)?;
        let ident = resolve_subject(&pool, cfg, subject, probe)?;

        //
        // 3. Append to the ledger
        //
        let store = SqliteEventStore::new(&pool.conn);
        let appended = ClockLogic::record_punch(
            &store,
            &ident.subject_id,
            direction,
            at,
            &cfg.default_source,
        )?;

        let op = match direction {
            PunchDirection::In => "punch_in",
            PunchDirection::Out => "punch_out",
        };
        let _ = ttlog(&pool.conn, op, &ident.name, "Punch recorded");

        match direction {
            PunchDirection::In => success(format!("{} punched in.", ident.name)),
            PunchDirection::Out => success(format!("{} punched out.", ident.name)),
        }
        if appended.len() > 1 {
            println!("↳ open break closed at the punch-out instant");
        }

        //
        // 4. Refreshed totals, so the kiosk shows the effect immediately
        //
        let sheet =
            TimesheetLogic::assemble(&store, &ident, today(), cfg.week_start_weekday())?;
        println!(
            "Hours today: {} | This week: {}",
            hours2readable(sheet.hours_today),
            hours2readable(sheet.hours_this_week),
        );
    }

    Ok(())
}
