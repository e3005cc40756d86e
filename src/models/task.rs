use super::priority::Priority;
use super::record::{Identified, Record};
use super::status::WorkStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub assignee: String,
    pub due_date: String,
    pub status: WorkStatus,
    pub priority: Priority,
    pub project_id: Option<String>,
    pub description: Option<String>,
    pub estimated_hours: Option<u32>,
    pub actual_hours: Option<u32>,
    pub completed_date: Option<String>,
    pub created_date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Identified for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Task {
    type Status = WorkStatus;

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> WorkStatus {
        self.status
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.assignee.as_str()]
    }

    fn priority(&self) -> Option<Priority> {
        Some(self.priority)
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn assignee(&self) -> Option<&str> {
        Some(&self.assignee)
    }

    fn due_date(&self) -> Option<&str> {
        Some(&self.due_date)
    }
}

/// Task shape carried by a project template (no id, project or dates yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskBlueprint {
    pub name: String,
    pub priority: Priority,
    pub description: String,
}
