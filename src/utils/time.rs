//! Time utilities: timestamp persistence format, parsing, seconds→hours.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, SecondsFormat, Utc};

/// Persisted timestamp format: UTC RFC 3339 with fixed millisecond width,
/// so that lexicographic order on the column equals chronological order.
pub fn fmt_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a stored or user-supplied RFC 3339 timestamp into UTC.
pub fn parse_ts(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Seconds → fractional hours. No rounding at this layer.
pub fn seconds_to_hours(secs: i64) -> f64 {
    secs as f64 / 3600.0
}
