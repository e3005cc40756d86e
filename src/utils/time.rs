//! Time utilities: elapsed-time formatting and minute conversions.

use chrono::TimeDelta;

/// `HH:MM:SS` for a running timer. Negative deltas render as zero.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total_seconds = elapsed.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Milliseconds → whole minutes, rounded to nearest.
pub fn round_to_minutes(millis: i64) -> i64 {
    (millis as f64 / 60_000.0).round() as i64
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
