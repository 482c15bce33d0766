//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Fractional hours → "7h 30m". The ledger keeps full float precision;
/// this is display-only.
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).floor() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    format!("{}h {:02}m", h, m)
}
