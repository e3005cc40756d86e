use super::priority::Priority;
use super::record::{Identified, Record};
use super::status::{StepStatus, WorkflowStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub id: String,
    pub name: String,
    pub description: String,
    pub assignee_id: String,
    pub status: StepStatus,
    pub due_date: String,
    /// Ids of steps that must complete before this one can start.
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub estimated_hours: Option<u32>,
    pub actual_hours: Option<u32>,
    pub blocked_reason: Option<String>,
    pub completed_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<WorkflowStep>,
    pub project_id: Option<String>,
    pub status: WorkflowStatus,
    pub priority: Option<Priority>,
    pub created_date: String,
    pub due_date: Option<String>,
    pub template_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Workflow {
    pub fn step(&self, step_id: &str) -> Option<&WorkflowStep> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    pub fn step_mut(&mut self, step_id: &str) -> Option<&mut WorkflowStep> {
        self.steps.iter_mut().find(|s| s.id == step_id)
    }

    /// Dependencies of `step_id` that are not completed yet, in declaration order.
    pub fn pending_dependencies(&self, step_id: &str) -> Vec<&WorkflowStep> {
        let Some(step) = self.step(step_id) else {
            return Vec::new();
        };
        step.dependencies
            .iter()
            .filter_map(|dep| self.step(dep))
            .filter(|dep| dep.status != StepStatus::Completed)
            .collect()
    }
}

impl Identified for WorkflowStep {
    const KIND: &'static str = "workflow step";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for WorkflowStep {
    type Status = StepStatus;

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> StepStatus {
        self.status
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn assignee(&self) -> Option<&str> {
        Some(&self.assignee_id)
    }

    fn due_date(&self) -> Option<&str> {
        Some(&self.due_date)
    }
}

impl Identified for Workflow {
    const KIND: &'static str = "workflow";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Workflow {
    type Status = WorkflowStatus;

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> WorkflowStatus {
        self.status
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn priority(&self) -> Option<Priority> {
        self.priority
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }
}
