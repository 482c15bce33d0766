use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timesheet::TimesheetLogic;
use crate::db::identities::find_identity;
use crate::db::pool::DbPool;
use crate::db::store::SqliteEventStore;
use crate::errors::{AppError, AppResult};
use crate::models::timesheet::Timesheet;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_flag};
use crate::utils::formatting::bold;
use crate::utils::date::today;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Local};
use std::io;

/// Show the full punch state + weekly timesheet for one subject.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { subject, json } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let ident = find_identity(&pool.conn, subject)?;

        let store = SqliteEventStore::new(&pool.conn);
        let sheet = TimesheetLogic::assemble(&store, &ident, today(), cfg.week_start_weekday())?;

        if *json {
            let out = serde_json::to_string_pretty(&sheet)
                .map_err(|e| AppError::from(io::Error::other(format!("JSON error: {e}"))))?;
            println!("{out}");
        } else {
            print_report(&sheet);
        }
    }

    Ok(())
}

fn print_report(sheet: &Timesheet) {
    println!("\n=== {} ===", bold(&sheet.name));
    println!(
        "Punched in: {} | On break: {}",
        flag(sheet.is_punched_in),
        flag(sheet.is_on_break)
    );

    print_instant("Last punch in ", &sheet.last_punch_in);
    print_instant("Last punch out", &sheet.last_punch_out);
    print_instant("Last break start", &sheet.last_break_start);
    print_instant("Last break end  ", &sheet.last_break_end);

    println!(
        "\n{}Today:{} {} worked, {} break",
        CYAN,
        RESET,
        hours2readable(sheet.hours_today),
        hours2readable(sheet.break_time_today),
    );
    println!(
        "{}This week:{} {} worked",
        CYAN,
        RESET,
        hours2readable(sheet.hours_this_week)
    );

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

    for day in &sheet.weekly_timesheet {
        table.add_row(vec![
            day.date.to_string(),
            hours2readable(day.worked_hours),
            hours2readable(day.break_hours),
        ]);
    }

    println!("\n{}", table.render());
}

fn flag(on: bool) -> String {
    let label = if on { "yes" } else { "no" };
    format!("{}{label}{RESET}", color_for_flag(on))
}

fn print_instant(label: &str, instant: &Option<DateTime<Local>>) {
    match instant {
        Some(ts) => println!("{label}: {}", ts.format("%Y-%m-%d %H:%M:%S")),
        None => println!("{label}: {GREY}--{RESET}"),
    }
}
