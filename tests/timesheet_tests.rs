//! Timesheet assembly: weekly windows, totals and ordering.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc, Weekday};
use rusqlite::Connection;
use siteclock::core::timesheet::TimesheetLogic;
use siteclock::db::identities::insert_identity;
use siteclock::db::initialize::init_db;
use siteclock::db::store::{EventStore, SqliteEventStore};
use siteclock::models::event::AttendanceEvent;
use siteclock::models::event_kind::EventKind;
use siteclock::models::feature::FeatureVector;
use siteclock::models::identity::{EnrolledIdentity, Role};

fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init schema");
    conn
}

fn enroll_test_worker(conn: &Connection) -> EnrolledIdentity {
    let template = FeatureVector::new(vec![0.0; 128]).expect("valid template");
    let ident = EnrolledIdentity::new("test-worker", Role::Worker, Some(template))
        .expect("valid identity");
    insert_identity(conn, &ident).expect("insert identity");
    ident
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn at(d: NaiveDate, h: u32) -> DateTime<Utc> {
    let naive = d.and_hms_opt(h, 0, 0).expect("valid time");
    Local
        .from_local_datetime(&naive)
        .unwrap()
        .with_timezone(&Utc)
}

fn append(store: &dyn EventStore, subject: &str, kind: EventKind, ts: DateTime<Utc>) {
    store
        .append(&AttendanceEvent::new(subject, kind, ts, "test"))
        .expect("append event");
}

// 2026-03-04 is a Wednesday; with Sunday weeks the window is 03-01..03-07.
const TODAY: (i32, u32, u32) = (2026, 3, 4);

#[test]
fn weekly_total_is_the_sum_of_daily_totals() {
    let conn = test_conn();
    let ident = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let today = date(TODAY.0, TODAY.1, TODAY.2);

    // Monday 8h, Wednesday (today) 6h, Friday 4h.
    let mon = date(2026, 3, 2);
    append(&store, &ident.subject_id, EventKind::PunchIn, at(mon, 8));
    append(&store, &ident.subject_id, EventKind::PunchOut, at(mon, 16));

    append(&store, &ident.subject_id, EventKind::PunchIn, at(today, 9));
    append(&store, &ident.subject_id, EventKind::PunchOut, at(today, 15));

    let fri = date(2026, 3, 6);
    append(&store, &ident.subject_id, EventKind::PunchIn, at(fri, 10));
    append(&store, &ident.subject_id, EventKind::PunchOut, at(fri, 14));

    let sheet =
        TimesheetLogic::assemble(&store, &ident, today, Weekday::Sun).expect("assemble");

    let summed: f64 = sheet
        .weekly_timesheet
        .iter()
        .map(|d| d.worked_hours)
        .sum();
    assert_eq!(sheet.hours_this_week, summed);
    assert_eq!(sheet.hours_this_week, 18.0);
    assert_eq!(sheet.hours_today, 6.0);
}

#[test]
fn weekly_breakdown_covers_all_seven_days_most_recent_first() {
    let conn = test_conn();
    let ident = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let today = date(TODAY.0, TODAY.1, TODAY.2);

    let sheet =
        TimesheetLogic::assemble(&store, &ident, today, Weekday::Sun).expect("assemble");

    assert_eq!(sheet.weekly_timesheet.len(), 7);
    assert_eq!(sheet.weekly_timesheet[0].date, date(2026, 3, 7));
    assert_eq!(sheet.weekly_timesheet[6].date, date(2026, 3, 1));
    assert!(sheet.weekly_timesheet.iter().all(|d| d.worked_hours == 0.0));
}

#[test]
fn events_outside_the_week_do_not_count() {
    let conn = test_conn();
    let ident = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let today = date(TODAY.0, TODAY.1, TODAY.2);

    // The previous Friday, outside the Sunday-based window.
    let prev = date(2026, 2, 27);
    append(&store, &ident.subject_id, EventKind::PunchIn, at(prev, 8));
    append(&store, &ident.subject_id, EventKind::PunchOut, at(prev, 16));

    let sheet =
        TimesheetLogic::assemble(&store, &ident, today, Weekday::Sun).expect("assemble");
    assert_eq!(sheet.hours_this_week, 0.0);

    // The projector still sees the punch-out: lookback is unbounded.
    assert!(sheet.last_punch_out.is_some());
}

#[test]
fn break_today_fills_break_time_today() {
    let conn = test_conn();
    let ident = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let today = date(TODAY.0, TODAY.1, TODAY.2);

    append(&store, &ident.subject_id, EventKind::PunchIn, at(today, 8));
    append(&store, &ident.subject_id, EventKind::BreakStart, at(today, 12));
    append(&store, &ident.subject_id, EventKind::BreakEnd, at(today, 13));
    append(&store, &ident.subject_id, EventKind::PunchOut, at(today, 16));

    let sheet =
        TimesheetLogic::assemble(&store, &ident, today, Weekday::Sun).expect("assemble");
    assert_eq!(sheet.break_time_today, 1.0);
    assert_eq!(sheet.hours_today, 8.0);
}

#[test]
fn monday_weeks_shift_the_window() {
    let conn = test_conn();
    let ident = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let today = date(TODAY.0, TODAY.1, TODAY.2);

    // Sunday 2026-03-01: inside the Sunday-based week, outside Monday-based.
    let sun = date(2026, 3, 1);
    append(&store, &ident.subject_id, EventKind::PunchIn, at(sun, 8));
    append(&store, &ident.subject_id, EventKind::PunchOut, at(sun, 12));

    let sunday_weeks =
        TimesheetLogic::assemble(&store, &ident, today, Weekday::Sun).expect("assemble");
    assert_eq!(sunday_weeks.hours_this_week, 4.0);

    let monday_weeks =
        TimesheetLogic::assemble(&store, &ident, today, Weekday::Mon).expect("assemble");
    assert_eq!(monday_weeks.hours_this_week, 0.0);
}

#[test]
fn report_serializes_with_wire_field_names() {
    let conn = test_conn();
    let ident = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let today = date(TODAY.0, TODAY.1, TODAY.2);

    append(&store, &ident.subject_id, EventKind::PunchIn, at(today, 8));

    let sheet =
        TimesheetLogic::assemble(&store, &ident, today, Weekday::Sun).expect("assemble");
    let json = serde_json::to_string(&sheet).expect("serialize");

    assert!(json.contains("\"isPunchedIn\":true"));
    assert!(json.contains("\"hoursThisWeek\""));
    assert!(json.contains("\"weeklyTimesheet\""));
    assert!(json.contains("\"lastPunchIn\""));
    // Absent optionals are omitted, not null.
    assert!(!json.contains("\"lastPunchOut\""));
}
