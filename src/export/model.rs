// src/export/model.rs

use crate::models::{PayrollEntry, Project, Task, TeamMember, TimeEntry, Workflow, WorkflowStep};
use serde::Serialize;

/// Flat project row; tags joined with `;`.
#[derive(Serialize, Clone, Debug)]
pub struct ProjectExport {
    pub id: String,
    pub name: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
    pub progress: u8,
    pub client: String,
    pub budget: Option<u64>,
    pub tags: String,
}

impl From<&Project> for ProjectExport {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            status: p.status.label().to_string(),
            priority: p.priority.map(|x| x.label().to_string()).unwrap_or_default(),
            due_date: p.due_date.clone(),
            progress: p.progress,
            client: p.client_name.clone().unwrap_or_default(),
            budget: p.budget,
            tags: p.tags.join(";"),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct TaskExport {
    pub id: String,
    pub name: String,
    pub assignee: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
    pub project_id: String,
}

impl From<&Task> for TaskExport {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            assignee: t.assignee.clone(),
            status: t.status.label().to_string(),
            priority: t.priority.label().to_string(),
            due_date: t.due_date.clone(),
            project_id: t.project_id.clone().unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PayrollExport {
    pub id: String,
    pub employee_id: String,
    pub employee: String,
    pub month: String,
    pub status: String,
    pub amount: i64,
    pub hours_worked: f64,
    pub overtime_hours: f64,
    pub bonus: f64,
}

impl From<&PayrollEntry> for PayrollExport {
    fn from(e: &PayrollEntry) -> Self {
        Self {
            id: e.id.clone(),
            employee_id: e.employee_id.clone(),
            employee: e.employee_name.clone(),
            month: e.month.clone(),
            status: e.status.label().to_string(),
            amount: e.amount_or_zero(),
            hours_worked: e.hours_worked.unwrap_or_default(),
            overtime_hours: e.overtime_hours.unwrap_or_default(),
            bonus: e.bonus.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct MemberExport {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub salary: Option<u64>,
    pub status: String,
}

impl From<&TeamMember> for MemberExport {
    fn from(m: &TeamMember) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            email: m.email.clone(),
            role: m.role.clone().unwrap_or_default(),
            department: m.department.clone().unwrap_or_default(),
            salary: m.salary,
            status: m.status.label().to_string(),
        }
    }
}

/// One row per step, carrying its workflow.
#[derive(Serialize, Clone, Debug)]
pub struct StepExport {
    pub workflow_id: String,
    pub workflow: String,
    pub id: String,
    pub name: String,
    pub status: String,
    pub assignee_id: String,
    pub due_date: String,
    pub dependencies: String,
}

impl StepExport {
    pub fn new(workflow: &Workflow, step: &WorkflowStep) -> Self {
        Self {
            workflow_id: workflow.id.clone(),
            workflow: workflow.name.clone(),
            id: step.id.clone(),
            name: step.name.clone(),
            status: step.status.label().to_string(),
            assignee_id: step.assignee_id.clone(),
            due_date: step.due_date.clone(),
            dependencies: step.dependencies.join(";"),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct TimeEntryExport {
    pub id: String,
    pub date: String,
    pub task_id: String,
    pub task: String,
    pub project: String,
    pub minutes: u32,
    pub start: String,
    pub end: String,
    pub description: String,
}

impl From<&TimeEntry> for TimeEntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id.clone(),
            date: e.date.format("%Y-%m-%d").to_string(),
            task_id: e.task_id.clone(),
            task: e.task_name.clone(),
            project: e.project_name.clone().unwrap_or_default(),
            minutes: e.duration,
            start: e.start_time.to_rfc3339(),
            end: e.end_time.map(|t| t.to_rfc3339()).unwrap_or_default(),
            description: e.description.clone().unwrap_or_default(),
        }
    }
}
