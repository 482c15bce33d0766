//! Interval pairing and day aggregation over a real (in-memory) store.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use rusqlite::Connection;
use siteclock::core::calculator::aggregate::{aggregate_day, aggregate_window};
use siteclock::core::calculator::pairing::sweep_intervals;
use siteclock::db::identities::insert_identity;
use siteclock::db::initialize::init_db;
use siteclock::db::store::{EventStore, SqliteEventStore};
use siteclock::errors::AppError;
use siteclock::models::event::AttendanceEvent;
use siteclock::models::event_kind::{EventCategory, EventKind};
use siteclock::models::feature::FeatureVector;
use siteclock::models::identity::{EnrolledIdentity, Role};

fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init schema");
    conn
}

fn enroll_test_worker(conn: &Connection) -> String {
    let template = FeatureVector::new(vec![0.0; 128]).expect("valid template");
    let ident = EnrolledIdentity::new("test-worker", Role::Worker, Some(template))
        .expect("valid identity");
    insert_identity(conn, &ident).expect("insert identity");
    ident.subject_id
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// An instant on a local calendar date, so bucketing is deterministic
/// regardless of the host timezone.
fn at(d: NaiveDate, h: u32, min: u32) -> DateTime<Utc> {
    let naive = d.and_hms_opt(h, min, 0).expect("valid time");
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

#[test]
fn well_formed_day_aggregates_exactly() {
    let conn = test_conn();
    let subject = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let d = date(2026, 3, 2);

    append(&store, &subject, EventKind::PunchIn, at(d, 8, 0));
    append(&store, &subject, EventKind::PunchOut, at(d, 16, 0));

    let agg = aggregate_day(&store, &subject, d).expect("aggregate");
    assert_eq!(agg.worked_hours, 8.0);
    assert_eq!(agg.break_hours, 0.0);
}

#[test]
fn dangling_open_event_contributes_zero() {
    let conn = test_conn();
    let subject = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let d = date(2026, 3, 2);

    append(&store, &subject, EventKind::PunchIn, at(d, 8, 0));

    let agg = aggregate_day(&store, &subject, d).expect("aggregate");
    assert_eq!(agg.worked_hours, 0.0);
}

#[test]
fn mismatched_sequence_contributes_zero() {
    // [In@08, In@09, Out@17]: the greedy two-at-a-time sweep consumes
    // both punch-ins as a mismatched chunk and leaves the punch-out
    // dangling, so the whole day sums to zero.
    let conn = test_conn();
    let subject = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let d = date(2026, 3, 2);

    append(&store, &subject, EventKind::PunchIn, at(d, 8, 0));
    append(&store, &subject, EventKind::PunchIn, at(d, 9, 0));
    append(&store, &subject, EventKind::PunchOut, at(d, 17, 0));

    let agg = aggregate_day(&store, &subject, d).expect("aggregate");
    assert_eq!(agg.worked_hours, 0.0);
}

#[test]
fn empty_window_returns_one_row_per_day() {
    let conn = test_conn();
    let subject = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);

    let start = date(2026, 3, 1);
    let end = date(2026, 3, 7);

    let days = aggregate_window(&store, &subject, start, end).expect("aggregate");
    assert_eq!(days.len(), 7);
    for day in &days {
        assert_eq!(day.worked_hours, 0.0);
        assert_eq!(day.break_hours, 0.0);
    }
    assert_eq!(days.first().map(|d| d.date), Some(start));
    assert_eq!(days.last().map(|d| d.date), Some(end));
}

#[test]
fn inverted_window_is_rejected() {
    let conn = test_conn();
    let subject = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);

    let result = aggregate_window(&store, &subject, date(2026, 3, 7), date(2026, 3, 1));
    assert!(matches!(result, Err(AppError::InvalidWindow { .. })));
}

#[test]
fn breaks_aggregate_independently_of_punches() {
    let conn = test_conn();
    let subject = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let d = date(2026, 3, 2);

    append(&store, &subject, EventKind::PunchIn, at(d, 8, 0));
    append(&store, &subject, EventKind::BreakStart, at(d, 12, 0));
    append(&store, &subject, EventKind::BreakEnd, at(d, 12, 30));
    append(&store, &subject, EventKind::PunchOut, at(d, 16, 0));

    let agg = aggregate_day(&store, &subject, d).expect("aggregate");
    assert_eq!(agg.worked_hours, 8.0);
    assert_eq!(agg.break_hours, 0.5);
}

#[test]
fn days_bucket_independently() {
    let conn = test_conn();
    let subject = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let d1 = date(2026, 3, 2);
    let d2 = date(2026, 3, 3);

    append(&store, &subject, EventKind::PunchIn, at(d1, 8, 0));
    append(&store, &subject, EventKind::PunchOut, at(d1, 12, 0));
    append(&store, &subject, EventKind::PunchIn, at(d2, 9, 0));
    append(&store, &subject, EventKind::PunchOut, at(d2, 15, 0));

    let days = aggregate_window(&store, &subject, d1, d2).expect("aggregate");
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].worked_hours, 4.0);
    assert_eq!(days[1].worked_hours, 6.0);
}

#[test]
fn subjects_do_not_leak_into_each_other() {
    let conn = test_conn();
    let subject = enroll_test_worker(&conn);

    let other_template = FeatureVector::new(vec![0.5; 128]).expect("valid template");
    let other = EnrolledIdentity::new("other-worker", Role::Worker, Some(other_template))
        .expect("valid identity");
    insert_identity(&conn, &other).expect("insert identity");

    let store = SqliteEventStore::new(&conn);
    let d = date(2026, 3, 2);

    append(&store, &subject, EventKind::PunchIn, at(d, 8, 0));
    append(&store, &subject, EventKind::PunchOut, at(d, 16, 0));
    append(&store, &other.subject_id, EventKind::PunchIn, at(d, 10, 0));
    append(&store, &other.subject_id, EventKind::PunchOut, at(d, 11, 0));

    let agg = aggregate_day(&store, &subject, d).expect("aggregate");
    assert_eq!(agg.worked_hours, 8.0);

    let other_agg = aggregate_day(&store, &other.subject_id, d).expect("aggregate");
    assert_eq!(other_agg.worked_hours, 1.0);
}

#[test]
fn same_instant_events_keep_insertion_order() {
    // Two events at the same timestamp must come back in append order:
    // the pairing sweep is order-sensitive and relies on the stable id
    // tiebreaker.
    let conn = test_conn();
    let subject = enroll_test_worker(&conn);
    let store = SqliteEventStore::new(&conn);
    let d = date(2026, 3, 2);
    let instant = at(d, 8, 0);

    append(&store, &subject, EventKind::PunchIn, instant);
    append(&store, &subject, EventKind::PunchOut, instant);

    let (from, to) = siteclock::utils::date::local_day_bounds(d);
    let events = store
        .events_in_window(&subject, EventCategory::Punch, from, to)
        .expect("query");

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].kind, EventKind::PunchIn);
    assert_eq!(events[1].kind, EventKind::PunchOut);

    let intervals = sweep_intervals(&events, EventCategory::Punch);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].duration_seconds(), 0);
}
