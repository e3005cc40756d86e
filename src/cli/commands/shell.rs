//! Interactive session over one in-memory store.
//!
//! Each input line is tokenized (double and single quotes group words), parsed
//! with the `ShellLine` grammar and executed against the session store. Errors
//! are printed and the loop keeps going; `exit`, `quit` or end of input leave.

use crate::cli::commands::{dashboard, export, list, notifications, track};
use crate::cli::parser::{ShellCommand, ShellLine};
use crate::config::Config;
use crate::core::forms::{
    NewPayrollEntry, NewProject, NewTask, NewTeamMember, NewWorkflow, NewWorkflowStep,
};
use crate::core::ticker::{Ticker, elapsed_display};
use crate::core::tracker::{SystemClock, TimeTracker};
use crate::errors::{AppError, AppResult};
use crate::store::EntityStore;
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::date::{iso, month_label, parse_date};
use crate::utils::formatting::italic;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_elapsed, format_minutes};
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Split a line into words. Quotes group words and are removed; a quote left
/// open is an error.
pub fn split_line(line: &str) -> AppResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(AppError::UnbalancedQuotes(line.trim().to_string()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// What the loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    pub store: EntityStore,
    pub tracker: TimeTracker,
    cfg: Config,
    ticker: Option<Ticker>,
}

impl Session {
    pub fn new(cfg: Config, today: NaiveDate) -> AppResult<Self> {
        Ok(Self {
            store: EntityStore::seeded(today)?,
            tracker: TimeTracker::new().pinned_to(today),
            cfg,
            ticker: None,
        })
    }

    pub fn execute(&mut self, line: &str) -> AppResult<Flow> {
        let words = split_line(line)?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(p) => p,
            Err(e) => {
                // help output and usage errors alike
                let _ = e.print();
                return Ok(Flow::Continue);
            }
        };

        self.run(parsed.command)
    }

    fn run(&mut self, cmd: ShellCommand) -> AppResult<Flow> {
        let cfg = &self.cfg;
        match cmd {
            // ---- views ----
            ShellCommand::Projects(args) => list::show_projects(&args, &self.store, cfg),
            ShellCommand::Tasks(args) => list::show_tasks(&args, &self.store, cfg),
            ShellCommand::Payroll(args) => list::show_payroll(&args, &self.store, cfg),
            ShellCommand::Workflows(args) => list::show_workflows(&args, &self.store, cfg),
            ShellCommand::Team(args) => list::show_team(&args, &self.store, cfg),
            ShellCommand::Templates => self.show_templates(),
            ShellCommand::Dashboard => dashboard::show(&self.store, cfg),

            // ---- creation ----
            ShellCommand::AddProject {
                name,
                due_date,
                priority,
                status,
                progress,
                description,
                budget,
                hours,
                client,
                tags,
            } => {
                let mut form = NewProject {
                    name,
                    status,
                    due_date,
                    progress,
                    priority,
                    description,
                    budget,
                    estimated_hours: hours,
                    client_name: client,
                    tags: Vec::new(),
                };
                for t in &tags {
                    form.add_tag(t);
                }
                let id = self.store.add_project(form)?;
                success(format!("Project {id} created."));
            }
            ShellCommand::FromTemplate { template, due_date } => {
                let id = self.store.add_project_from_template(&template, &due_date)?;
                success(format!("Project {id} created from template {template}."));
            }
            ShellCommand::AddTask {
                name,
                assignee,
                due_date,
                priority,
                status,
                project,
            } => {
                let id = self.store.add_task(NewTask {
                    name,
                    assignee,
                    due_date,
                    status,
                    priority,
                    project_id: project,
                })?;
                success(format!("Task {id} created."));
            }
            ShellCommand::AddPayroll {
                employee,
                month,
                hours,
                overtime,
                bonus,
            } => {
                let form = NewPayrollEntry {
                    employee_id: employee,
                    month: month.unwrap_or_else(|| month_label(self.store.today())),
                    hours_worked: hours,
                    overtime_hours: overtime,
                    bonus,
                };
                let id = self.store.add_payroll_entry(form, &cfg.pay_policy())?;
                success(format!("Payroll entry {id} created (Processing)."));
            }
            ShellCommand::AddWorkflow {
                name,
                description,
                steps,
            } => {
                let mut form = NewWorkflow {
                    name,
                    description,
                    steps: Vec::new(),
                };
                for spec in &steps {
                    form.add_step(parse_step(spec));
                }
                let id = self.store.add_workflow(form)?;
                success(format!("Workflow {id} created with {} steps.", steps.len()));
            }
            ShellCommand::AddMember {
                name,
                email,
                role,
                salary,
                pay_period,
            } => {
                let id = self.store.add_team_member(NewTeamMember {
                    name,
                    email,
                    role,
                    salary,
                    pay_period,
                })?;
                success(format!("Team member {id} added."));
            }

            // ---- status changes ----
            ShellCommand::ProjectStatus { id, status } => {
                self.store.set_project_status(&id, status)?;
                success(format!("Project {id} is now {status}."));
            }
            ShellCommand::Progress { id, percent } => {
                self.store.set_project_progress(&id, percent)?;
                success(format!("Project {id} at {percent}%."));
            }
            ShellCommand::TaskStatus { id, status } => {
                self.store.set_task_status(&id, status)?;
                success(format!("Task {id} is now {status}."));
            }
            ShellCommand::PayrollStatus { id, status } => {
                self.store.set_payroll_status(&id, status)?;
                success(format!("Payroll entry {id} is now {status}."));
            }
            ShellCommand::WorkflowStatus { id, status } => {
                self.store.set_workflow_status(&id, status)?;
                success(format!("Workflow {id} is now {status}."));
            }
            ShellCommand::StepStatus {
                workflow,
                step,
                status,
            } => {
                self.store.set_step_status(&workflow, &step, status)?;
                success(format!("Step {step} of workflow {workflow} is now {status}."));
                self.warn_pending(&workflow, &step);
            }

            // ---- time tracking ----
            ShellCommand::Start { task } => self.start(&task)?,
            ShellCommand::Stop => self.stop(),
            ShellCommand::Timer => self.timer_status(),
            ShellCommand::Manual(args) => {
                if let Some(entry) = track::log_manual(&mut self.tracker, &self.store, &args)? {
                    self.store.log.record(
                        "track",
                        &format!("task {}", entry.task_id),
                        &format!("{} min (manual)", entry.duration),
                    );
                }
            }
            ShellCommand::Total { date } => {
                let date = match date {
                    Some(d) => parse_date(&d).ok_or(AppError::InvalidDate(d))?,
                    None => self.store.today(),
                };
                info(format!(
                    "Total for {}: {}",
                    iso(date),
                    format_minutes(self.tracker.total_minutes_for_date(date) as i64)
                ));
            }
            ShellCommand::History => self.show_history(),

            // ---- notifications ----
            ShellCommand::Notifications { unread } => {
                notifications::show(&self.store.notifications, unread)
            }
            ShellCommand::Read { id } => {
                if self.store.mark_notification_read(&id) {
                    success(format!("Notification {id} marked as read."));
                } else {
                    warning(format!("No notification with id {id}."));
                }
            }
            ShellCommand::ReadAll => {
                self.store.mark_all_notifications_read();
                success("All notifications marked as read.");
            }
            ShellCommand::Dismiss { id } => {
                if self.store.dismiss_notification(&id) {
                    success(format!("Notification {id} dismissed."));
                } else {
                    warning(format!("No notification with id {id}."));
                }
            }

            // ---- misc ----
            ShellCommand::Log => {
                if self.store.log.is_empty() {
                    info("Activity log is empty.");
                } else {
                    print!("{}", self.store.log.render());
                }
            }
            ShellCommand::Export(args) => {
                export::run(&args, &self.store, self.tracker.history())?
            }
            ShellCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn start(&mut self, task: &str) -> AppResult<()> {
        let name = self.store.tasks.require(task)?.name.clone();
        if !self.tracker.start(task) {
            warning(format!(
                "Timer already running on task {}; stop it first.",
                self.tracker.active_task().unwrap_or("?")
            ));
            return Ok(());
        }

        let started_at = self.tracker.started_at().unwrap_or_default();
        let live = self.cfg.live_timer;
        self.ticker = Some(elapsed_display(SystemClock, started_at, move |elapsed| {
            if live {
                print!("\r⏱  {} ", format_elapsed(elapsed));
                io::stdout().flush().ok();
            }
        }));
        success(format!("Timer started on '{name}'."));
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut t) = self.ticker.take() {
            t.disarm();
        }
        match self
            .tracker
            .stop(self.store.tasks.as_slice(), self.store.projects.as_slice())
        {
            Some(entry) => {
                self.store.log.record(
                    "track",
                    &format!("task {}", entry.task_id),
                    &format!("{} min", entry.duration),
                );
                track::print_entry(&entry);
            }
            None => warning("Timer is not running."),
        }
    }

    fn warn_pending(&self, workflow: &str, step: &str) {
        let Some(wf) = self.store.workflows.get(workflow) else {
            return;
        };
        let pending: Vec<&str> = wf
            .pending_dependencies(step)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        if !pending.is_empty() {
            warning(format!("Still waiting on: {}", pending.join(", ")));
        }
    }

    fn timer_status(&self) {
        match (self.tracker.active_task(), self.tracker.elapsed()) {
            (Some(task), Some(elapsed)) => info(format!(
                "Running on task {task}: {}",
                format_elapsed(elapsed)
            )),
            _ => info("Timer idle."),
        }
    }

    fn show_history(&self) {
        let history = self.tracker.history();
        header(format!("Time entries ({})", history.len()));
        if history.is_empty() {
            info("Nothing tracked in this session.");
            return;
        }
        let mut table = Table::new(vec![
            Column::new("ID", 3),
            Column::new("Date", 10),
            Column::new("Task", 20),
            Column::new("Project", 18),
            Column::new("Time", 5),
            Column::new("Note", 10),
        ])
        .with_separator(self.cfg.separator());
        for e in history {
            table.add_row(vec![
                e.id.clone(),
                iso(e.date),
                e.task_name.clone(),
                e.project_name.clone().unwrap_or_default(),
                format_minutes(e.duration as i64),
                e.description.as_deref().map(italic).unwrap_or_default(),
            ]);
        }
        print!("{}", table.render());
    }

    fn show_templates(&self) {
        header("Project templates");
        for t in &self.store.templates {
            println!(
                "{:>2}  {} [{}], {} days, {} tasks",
                t.id,
                t.name,
                t.category,
                t.estimated_duration,
                t.tasks.len()
            );
            println!("    {}", italic(&t.description));
        }
    }

    /// Stop the live ticker; a running session is left unrecorded.
    pub fn shutdown(&mut self) {
        if let Some(mut t) = self.ticker.take() {
            t.disarm();
        }
        if self.tracker.is_running() {
            warning("Timer was still running; session discarded.");
        }
    }
}

/// `NAME[:ASSIGNEE_ID[:DUE]]`
fn parse_step(spec: &str) -> NewWorkflowStep {
    let mut parts = spec.splitn(3, ':');
    NewWorkflowStep {
        name: parts.next().unwrap_or_default().to_string(),
        assignee_id: parts.next().unwrap_or_default().to_string(),
        due_date: parts.next().unwrap_or_default().to_string(),
        ..NewWorkflowStep::default()
    }
}

pub fn handle(cfg: &Config, today: NaiveDate) -> AppResult<()> {
    let mut session = Session::new(cfg.clone(), today)?;
    info("pmdash shell: type 'help' for commands, 'exit' to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        print!("pmdash> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match session.execute(&line) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => error(e),
        }
    }

    session.shutdown();
    Ok(())
}
