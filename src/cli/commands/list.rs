use crate::cli::commands::timesheet::resolve_period;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::identities::find_identity;
use crate::db::pool::DbPool;
use crate::db::store::{EventStore, SqliteEventStore};
use crate::errors::AppResult;
use crate::models::event::AttendanceEvent;
use crate::models::event_kind::EventCategory;
use crate::utils::date::{local_day_bounds, local_midnight_utc};

/// List raw ledger events for a subject, in ledger order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { subject, period } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let ident = find_identity(&pool.conn, subject)?;

        let (start, end) = resolve_period(period)?;
        let from = local_midnight_utc(start);
        let (_, to) = local_day_bounds(end);

        let store = SqliteEventStore::new(&pool.conn);

        // The store serves one category per query; the raw listing shows
        // both, re-merged on the ledger ordering key.
        let mut events = store.events_in_window(&ident.subject_id, EventCategory::Punch, from, to)?;
        events.extend(store.events_in_window(&ident.subject_id, EventCategory::Break, from, to)?);
        events.sort_by_key(|e| (e.timestamp, e.id));

        if events.is_empty() {
            println!("No events for {} in {} → {}", ident.name, start, end);
            return Ok(());
        }

        println!("EVENTS for {}:", ident.name);
        for ev in &events {
            print_event(ev);
        }
    }

    Ok(())
}

fn print_event(ev: &AttendanceEvent) {
    println!(
        "{} | {} | {} | {}",
        ev.id,
        ev.local_time().format("%Y-%m-%d %H:%M:%S"),
        ev.kind.to_db_str(),
        ev.source,
    );
}
