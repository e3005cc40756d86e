use super::record::Identified;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A tracked (or manually logged) block of time against one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub task_id: String,
    pub task_name: String,
    pub project_id: Option<String>,
    pub project_name: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Whole minutes.
    pub duration: u32,
    pub description: Option<String>,
    /// Day bucket used by the daily totals.
    pub date: NaiveDate,
}

impl TimeEntry {
    pub fn is_manual(&self) -> bool {
        self.end_time.is_none()
    }
}

impl Identified for TimeEntry {
    const KIND: &'static str = "time entry";

    fn id(&self) -> &str {
        &self.id
    }
}
