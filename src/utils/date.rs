use chrono::{DateTime, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Lenient calendar-date parse used for sorting and overdue checks:
/// accepts `YYYY-MM-DD` and full RFC 3339 timestamps (date part kept).
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    parse_date(s).or_else(|| {
        DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.date_naive())
    })
}

pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Payroll month label for a date: 2024-03-31 → "March 2024".
pub fn month_label(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

