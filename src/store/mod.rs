//! Entity Store: the owned, single-threaded container of every collection.
//!
//! All mutations go through explicit methods on [`EntityStore`], each of
//! which records a line in the activity log. Views never mutate; they borrow
//! `as_slice()` and derive what they need.

pub mod ids;
pub mod seed;

use crate::core::forms::{NewPayrollEntry, NewProject, NewTask, NewTeamMember, NewWorkflow};
use crate::core::log::ActivityLog;
use crate::core::notifications::NotificationFeed;
use crate::core::payroll::PayPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Identified, PayrollEntry, PayrollStatus, Project, ProjectTemplate, StepStatus, Task,
    TeamMember, WorkStatus, Workflow, WorkflowStatus,
};
use crate::utils::date::iso;
use chrono::NaiveDate;
use ids::IdGenerator;

/// Ordered records with unique ids.
#[derive(Debug, Clone)]
pub struct Collection<T: Identified> {
    items: Vec<T>,
}

impl<T: Identified> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> Collection<T> {
    /// Fails on the first repeated id.
    pub fn from_vec(items: Vec<T>) -> AppResult<Self> {
        let mut c = Self::default();
        for item in items {
            c.insert(item)?;
        }
        Ok(c)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Identified::id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn require(&self, id: &str) -> AppResult<&T> {
        self.get(id).ok_or_else(|| not_found::<T>(id))
    }

    /// Append, rejecting an id already present.
    pub fn insert(&mut self, item: T) -> AppResult<()> {
        if self.get(item.id()).is_some() {
            return Err(AppError::DuplicateId {
                kind: T::KIND,
                id: item.id().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Apply `f` to the record with `id` in place.
    pub fn update<F>(&mut self, id: &str, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut T),
    {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or_else(|| not_found::<T>(id))?;
        f(item);
        Ok(())
    }
}

fn not_found<T: Identified>(id: &str) -> AppError {
    AppError::NotFound {
        kind: T::KIND,
        id: id.to_string(),
    }
}

pub struct EntityStore {
    pub projects: Collection<Project>,
    pub tasks: Collection<Task>,
    pub team: Collection<TeamMember>,
    pub payroll: Collection<PayrollEntry>,
    pub workflows: Collection<Workflow>,
    pub notifications: NotificationFeed,
    pub templates: Vec<ProjectTemplate>,
    pub log: ActivityLog,
    ids: IdGenerator,
    today: NaiveDate,
}

impl EntityStore {
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            projects: Collection::default(),
            tasks: Collection::default(),
            team: Collection::default(),
            payroll: Collection::default(),
            workflows: Collection::default(),
            notifications: NotificationFeed::default(),
            templates: Vec::new(),
            log: ActivityLog::default(),
            ids: IdGenerator::default(),
            today,
        }
    }

    /// Store populated with the built-in demo data set.
    pub fn seeded(today: NaiveDate) -> AppResult<Self> {
        let mut store = Self::empty(today);
        store.projects = Collection::from_vec(seed::projects())?;
        store.tasks = Collection::from_vec(seed::tasks())?;
        store.team = Collection::from_vec(seed::team())?;
        store.payroll = Collection::from_vec(seed::payroll())?;
        store.workflows = Collection::from_vec(seed::workflows())?;
        store.notifications = NotificationFeed::new(seed::notifications(today));
        store.templates = seed::templates();

        let mut all: Vec<&str> = Vec::new();
        all.extend(store.projects.ids());
        all.extend(store.tasks.ids());
        all.extend(store.team.ids());
        all.extend(store.payroll.ids());
        all.extend(store.workflows.ids());
        store.ids = IdGenerator::after(all);

        store.log.record("init", "", "demo data loaded");
        Ok(store)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    // ---------------------------
    // Creation
    // ---------------------------

    pub fn add_project(&mut self, form: NewProject) -> AppResult<String> {
        form.validate()?;
        let id = self.next_id();
        let project = form.build(id.clone(), self.today)?;
        let msg = format!("Project '{}' created", project.name);
        self.projects.insert(project)?;
        self.log.record("add", &format!("project {id}"), &msg);
        Ok(id)
    }

    pub fn add_project_from_template(
        &mut self,
        template_id: &str,
        due_date: &str,
    ) -> AppResult<String> {
        let template = self
            .templates
            .iter()
            .find(|t| t.id == template_id)
            .ok_or_else(|| AppError::NotFound {
                kind: "template",
                id: template_id.to_string(),
            })?;
        let mut form = NewProject::from_template(template);
        form.due_date = due_date.to_string();
        self.add_project(form)
    }

    pub fn add_task(&mut self, form: NewTask) -> AppResult<String> {
        form.validate()?;
        if let Some(pid) = form.project_id.as_deref().filter(|p| !p.is_empty()) {
            self.projects.require(pid)?;
        }
        let id = self.next_id();
        let task = form.build(id.clone(), self.today)?;
        let msg = format!("Task '{}' assigned to {}", task.name, task.assignee);
        self.tasks.insert(task)?;
        self.log.record("add", &format!("task {id}"), &msg);
        Ok(id)
    }

    pub fn add_payroll_entry(
        &mut self,
        form: NewPayrollEntry,
        policy: &PayPolicy,
    ) -> AppResult<String> {
        form.validate()?;
        let id = self.next_id();
        let entry = form.build(id.clone(), self.team.as_slice(), policy, self.today)?;
        let msg = format!(
            "{} / {}: amount {}",
            entry.employee_name,
            entry.month,
            entry.amount_or_zero()
        );
        self.payroll.insert(entry)?;
        self.log.record("add", &format!("payroll {id}"), &msg);
        Ok(id)
    }

    pub fn add_workflow(&mut self, form: NewWorkflow) -> AppResult<String> {
        form.validate()?;
        let id = self.next_id();
        let workflow = form.build(id.clone(), self.today)?;
        let msg = format!(
            "Workflow '{}' with {} steps",
            workflow.name,
            workflow.steps.len()
        );
        self.workflows.insert(workflow)?;
        self.log.record("add", &format!("workflow {id}"), &msg);
        Ok(id)
    }

    pub fn add_team_member(&mut self, form: NewTeamMember) -> AppResult<String> {
        form.validate()?;
        let id = self.next_id();
        let member = form.build(id.clone())?;
        let msg = format!("{} joined the team", member.name);
        self.team.insert(member)?;
        self.log.record("add", &format!("member {id}"), &msg);
        Ok(id)
    }

    // ---------------------------
    // Status changes
    // ---------------------------

    pub fn set_project_status(&mut self, id: &str, status: WorkStatus) -> AppResult<()> {
        let today = iso(self.today);
        self.projects.update(id, |p| {
            p.status = status;
            if status == WorkStatus::Completed {
                p.progress = 100;
            }
            p.updated_date = Some(today);
        })?;
        self.log
            .record("status", &format!("project {id}"), status.label());
        Ok(())
    }

    pub fn set_project_progress(&mut self, id: &str, progress: u8) -> AppResult<()> {
        if progress > 100 {
            return Err(crate::errors::ValidationError::ProgressOutOfRange(progress as u32).into());
        }
        let today = iso(self.today);
        self.projects.update(id, |p| {
            p.progress = progress;
            p.updated_date = Some(today);
        })?;
        self.log
            .record("progress", &format!("project {id}"), &format!("{progress}%"));
        Ok(())
    }

    /// Completing a task stamps its completion date; reopening clears it.
    pub fn set_task_status(&mut self, id: &str, status: WorkStatus) -> AppResult<()> {
        let today = iso(self.today);
        self.tasks.update(id, |t| {
            t.status = status;
            t.completed_date = (status == WorkStatus::Completed).then_some(today);
        })?;
        self.log.record("status", &format!("task {id}"), status.label());
        Ok(())
    }

    pub fn set_payroll_status(&mut self, id: &str, status: PayrollStatus) -> AppResult<()> {
        self.payroll.update(id, |e| e.status = status)?;
        self.log
            .record("status", &format!("payroll {id}"), status.label());
        Ok(())
    }

    pub fn set_workflow_status(&mut self, id: &str, status: WorkflowStatus) -> AppResult<()> {
        self.workflows.update(id, |w| w.status = status)?;
        self.log
            .record("status", &format!("workflow {id}"), status.label());
        Ok(())
    }

    pub fn set_step_status(
        &mut self,
        workflow_id: &str,
        step_id: &str,
        status: StepStatus,
    ) -> AppResult<()> {
        let today = iso(self.today);
        let mut found = false;
        self.workflows.update(workflow_id, |w| {
            if let Some(step) = w.step_mut(step_id) {
                step.status = status;
                step.completed_date = (status == StepStatus::Completed).then_some(today);
                if status != StepStatus::Blocked {
                    step.blocked_reason = None;
                }
                found = true;
            }
        })?;
        if !found {
            return Err(AppError::NotFound {
                kind: "workflow step",
                id: step_id.to_string(),
            });
        }
        self.log.record(
            "status",
            &format!("step {workflow_id}/{step_id}"),
            status.label(),
        );
        Ok(())
    }

    // ---------------------------
    // Notifications
    // ---------------------------

    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        let done = self.notifications.mark_as_read(id);
        if done {
            self.log.record("read", &format!("notification {id}"), "");
        }
        done
    }

    pub fn mark_all_notifications_read(&mut self) {
        self.notifications.mark_all_as_read();
        self.log.record("read", "notifications", "all marked as read");
    }

    pub fn dismiss_notification(&mut self, id: &str) -> bool {
        match self.notifications.dismiss(id) {
            Some(n) => {
                self.log
                    .record("dismiss", &format!("notification {id}"), &n.title);
                true
            }
            None => false,
        }
    }
}
