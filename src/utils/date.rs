use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone, Utc, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Local midnight of `date`, expressed in UTC. Falls back to the naive
/// instant when local midnight does not exist (DST spring-forward).
pub fn local_midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

/// Half-open UTC bounds of a local calendar date: `[midnight, next midnight)`.
pub fn local_day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let next = date.checked_add_days(Days::new(1)).unwrap_or(date);
    (local_midnight_utc(date), local_midnight_utc(next))
}

/// All dates of the inclusive window `[start, end]`, ascending.
pub fn days_in_window(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;

    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// First day of the week containing `date`, given the configured first
/// day of week (the original product counted weeks from Sunday).
pub fn week_start_for(date: NaiveDate, first_dow: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_sunday()
        - first_dow.num_days_from_sunday())
        % 7;
    date.checked_sub_days(Days::new(offset as u64)).unwrap_or(date)
}

/// Inclusive 7-day window of the week containing `date`.
pub fn week_window(date: NaiveDate, first_dow: Weekday) -> (NaiveDate, NaiveDate) {
    let start = week_start_for(date, first_dow);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

/// Expand a period expression into the dates it covers.
///
/// Supports `YYYY`, `YYYY-MM`, `YYYY-MM-DD`.
pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

/// Expand a `start:end` period range (both sides in any period format).
pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let start_date = *s.first().ok_or_else(|| format!("Invalid period: {start}"))?;
    let end_date = *e.last().ok_or_else(|| format!("Invalid period: {end}"))?;

    Ok(days_in_window(start_date, end_date))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return v;
    };

    while d.year() == year {
        v.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    v
}

/// Parse the configured first day of week ("sunday", "monday", ...).
pub fn parse_week_start(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "sunday" | "sun" => Some(Weekday::Sun),
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        _ => None,
    }
}
