use super::priority::Priority;
use super::record::{Identified, Record};
use super::status::WorkStatus;
use super::task::TaskBlueprint;
use crate::utils::date::parse_calendar_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: WorkStatus,
    pub due_date: String,
    pub progress: u8,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    pub budget: Option<u64>,
    pub estimated_hours: Option<u32>,
    pub actual_hours: Option<u32>,
    pub client_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_date: String,
    pub updated_date: Option<String>,
    pub manager_id: Option<String>,
}

impl Project {
    /// A project is overdue when its due date lies strictly before `today`.
    /// Completed projects and unparsable dates are never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.status == WorkStatus::Completed {
            return false;
        }
        parse_calendar_date(&self.due_date).is_some_and(|d| d < today)
    }

    /// Actual hours as a percentage of the estimate, when both are known.
    pub fn hours_utilization(&self) -> Option<f64> {
        match (self.estimated_hours, self.actual_hours) {
            (Some(est), Some(act)) if est > 0 => Some(act as f64 * 100.0 / est as f64),
            _ => None,
        }
    }
}

impl Identified for Project {
    const KIND: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Project {
    type Status = WorkStatus;

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> WorkStatus {
        self.status
    }

    fn searchable_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields.extend(self.client_name.as_deref());
        fields
    }

    fn priority(&self) -> Option<Priority> {
        self.priority
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn due_date(&self) -> Option<&str> {
        Some(&self.due_date)
    }

    fn progress(&self) -> Option<u8> {
        Some(self.progress)
    }
}

/// Reusable starting point for a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Estimated duration in days.
    pub estimated_duration: u32,
    pub tasks: Vec<TaskBlueprint>,
}
