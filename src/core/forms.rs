//! Creation forms: required-field validation and record construction.
//!
//! Each `build` either returns a complete record or a `ValidationError`;
//! nothing is half-created on failure.

use crate::core::payroll::PayPolicy;
use crate::errors::ValidationError;
use crate::models::team::initials_of;
use crate::models::{
    MemberStatus, PayrollEntry, PayrollStatus, Priority, Project, ProjectTemplate, StepStatus,
    Task, TeamMember, WorkStatus, Workflow, WorkflowStatus, WorkflowStep,
};
use crate::utils::date::iso;
use chrono::NaiveDate;

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub status: WorkStatus,
    pub due_date: String,
    pub progress: u8,
    pub priority: Priority,
    pub description: String,
    pub budget: u64,
    pub estimated_hours: u32,
    pub client_name: String,
    pub tags: Vec<String>,
}

impl NewProject {
    /// Pre-fills name and description; a template day counts as 8 hours.
    pub fn from_template(template: &ProjectTemplate) -> Self {
        Self {
            name: template.name.clone(),
            description: template.description.clone(),
            estimated_hours: template.estimated_duration * 8,
            ..Self::default()
        }
    }

    /// Adds `tag` unless it is blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.due_date, "due date")?;
        if self.progress > 100 {
            return Err(ValidationError::ProgressOutOfRange(self.progress as u32));
        }
        Ok(())
    }

    pub fn build(self, id: String, today: NaiveDate) -> Result<Project, ValidationError> {
        self.validate()?;
        Ok(Project {
            id,
            name: self.name.trim().to_string(),
            status: self.status,
            due_date: self.due_date.trim().to_string(),
            progress: self.progress,
            priority: Some(self.priority),
            description: non_empty(self.description),
            budget: Some(self.budget).filter(|b| *b > 0),
            estimated_hours: Some(self.estimated_hours).filter(|h| *h > 0),
            actual_hours: None,
            client_name: non_empty(self.client_name),
            tags: self.tags,
            created_date: iso(today),
            updated_date: Some(iso(today)),
            manager_id: None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub name: String,
    pub assignee: String,
    pub due_date: String,
    pub status: WorkStatus,
    pub priority: Priority,
    pub project_id: Option<String>,
}

impl NewTask {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.assignee, "assignee")?;
        require(&self.due_date, "due date")
    }

    pub fn build(self, id: String, today: NaiveDate) -> Result<Task, ValidationError> {
        self.validate()?;
        Ok(Task {
            id,
            name: self.name.trim().to_string(),
            assignee: self.assignee.trim().to_string(),
            due_date: self.due_date.trim().to_string(),
            status: self.status,
            priority: self.priority,
            project_id: self.project_id.and_then(non_empty),
            description: None,
            estimated_hours: None,
            actual_hours: None,
            completed_date: None,
            created_date: iso(today),
            tags: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewPayrollEntry {
    pub employee_id: String,
    pub month: String,
    pub hours_worked: Option<f64>,
    pub overtime_hours: f64,
    pub bonus: f64,
}

impl NewPayrollEntry {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.employee_id, "employee")?;
        require(&self.month, "month")?;
        match self.hours_worked {
            Some(h) if h > 0.0 => Ok(()),
            _ => Err(ValidationError::MissingField("hours worked")),
        }
    }

    /// New entries start as `Processing`, due on the creation date, with the
    /// amount computed from the employee's salary under `policy`.
    pub fn build(
        self,
        id: String,
        team: &[TeamMember],
        policy: &PayPolicy,
        today: NaiveDate,
    ) -> Result<PayrollEntry, ValidationError> {
        self.validate()?;
        let employee = team
            .iter()
            .find(|m| m.id == self.employee_id)
            .ok_or_else(|| ValidationError::UnknownEmployee(self.employee_id.clone()))?;

        let hours = self.hours_worked.unwrap_or_default();
        let salary = employee.salary.unwrap_or(0) as f64;
        let pay = policy.breakdown(salary, hours, self.overtime_hours, self.bonus);

        Ok(PayrollEntry {
            id,
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            month: self.month.trim().to_string(),
            status: PayrollStatus::Processing,
            amount: Some(pay.amount),
            due_date: Some(iso(today)),
            hours_worked: Some(hours),
            overtime_hours: Some(self.overtime_hours),
            bonus: Some(self.bonus),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewWorkflowStep {
    pub name: String,
    pub description: String,
    pub assignee_id: String,
    pub status: StepStatus,
    pub due_date: String,
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewWorkflow {
    pub name: String,
    pub description: String,
    pub steps: Vec<NewWorkflowStep>,
}

impl NewWorkflow {
    pub fn add_step(&mut self, step: NewWorkflowStep) {
        self.steps.push(step);
    }

    pub fn remove_step(&mut self, index: usize) -> Option<NewWorkflowStep> {
        (index < self.steps.len()).then(|| self.steps.remove(index))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        match self.steps.iter().position(|s| s.name.trim().is_empty()) {
            Some(i) => Err(ValidationError::UnnamedStep(i + 1)),
            None => Ok(()),
        }
    }

    /// Step ids are `{workflow id}-{index}`.
    pub fn build(self, id: String, today: NaiveDate) -> Result<Workflow, ValidationError> {
        self.validate()?;
        let steps = self
            .steps
            .into_iter()
            .enumerate()
            .map(|(i, s)| WorkflowStep {
                id: format!("{id}-{i}"),
                name: s.name.trim().to_string(),
                description: s.description,
                assignee_id: s.assignee_id,
                status: s.status,
                due_date: s.due_date,
                dependencies: s.dependencies,
                estimated_hours: None,
                actual_hours: None,
                blocked_reason: None,
                completed_date: None,
            })
            .collect();

        Ok(Workflow {
            id,
            name: self.name.trim().to_string(),
            description: self.description,
            steps,
            project_id: None,
            status: WorkflowStatus::Active,
            priority: None,
            created_date: iso(today),
            due_date: None,
            template_id: None,
            tags: Vec::new(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub name: String,
    pub email: String,
    pub role: String,
    pub salary: Option<u64>,
    pub pay_period: String,
}

impl Default for NewTeamMember {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: String::new(),
            salary: None,
            pay_period: "Biweekly".to_string(),
        }
    }
}

impl NewTeamMember {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.email, "email")
    }

    pub fn build(self, id: String) -> Result<TeamMember, ValidationError> {
        self.validate()?;
        let name = self.name.trim().to_string();
        Ok(TeamMember {
            id,
            initials: initials_of(&name),
            name,
            email: self.email.trim().to_string(),
            role: non_empty(self.role),
            salary: self.salary,
            pay_period: non_empty(self.pay_period),
            department: None,
            status: MemberStatus::Active,
            projects: Vec::new(),
        })
    }
}
