use crate::errors::AppError;
use crate::models::{Priority, Record};
use crate::utils::date::parse_calendar_date;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Alphabetical, case-insensitive
    Name,
    /// Earliest first, missing or unparsable dates last
    #[default]
    DueDate,
    /// High → Medium → Low
    Priority,
    /// Most advanced first
    Progress,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::DueDate => "due-date",
            SortKey::Priority => "priority",
            SortKey::Progress => "progress",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    /// Accepts `due-date`, `due_date` and `dueDate` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match norm.as_str() {
            "name" => Ok(SortKey::Name),
            "duedate" => Ok(SortKey::DueDate),
            "priority" => Ok(SortKey::Priority),
            "progress" => Ok(SortKey::Progress),
            _ => Err(AppError::InvalidSortKey(s.to_string())),
        }
    }
}

/// Ordering of two records under `key`. Keys a record kind does not carry
/// compare equal, so the stable sort keeps their input order.
pub fn compare<R: Record>(a: &R, b: &R, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortKey::DueDate => {
            let da = a.due_date().and_then(parse_calendar_date);
            let db = b.due_date().and_then(parse_calendar_date);
            match (da, db) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
        SortKey::Priority => {
            let ra = a.priority().unwrap_or(Priority::Medium).rank();
            let rb = b.priority().unwrap_or(Priority::Medium).rank();
            rb.cmp(&ra)
        }
        SortKey::Progress => b.progress().unwrap_or(0).cmp(&a.progress().unwrap_or(0)),
    }
}

/// Stable in-place sort: ties keep their relative order.
pub fn sort_records<R: Record>(records: &mut [R], key: SortKey) {
    records.sort_by(|a, b| compare(a, b, key));
}
