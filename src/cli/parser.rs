use crate::config::Config;
use crate::core::view::{FilterCriteria, SortKey, criteria::unless_all};
use crate::errors::AppError;
use crate::export::{ExportFormat, ExportKind};
use crate::models::{
    MemberStatus, PayrollStatus, Priority, StepStatus, WorkStatus, WorkflowStatus,
};
use crate::utils::path::resolve;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for pmdash
/// Project-management dashboard: projects, tasks, payroll, workflows and time tracking
#[derive(Parser)]
#[command(
    name = "pmdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "A project-management dashboard in your terminal: views, payroll and time tracking",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Pin the current date (YYYY-MM-DD), used by tests
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(p) => resolve(p),
            None => Config::config_file(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List projects
    Projects(ProjectsArgs),

    /// List tasks
    Tasks(TasksArgs),

    /// List payroll entries
    Payroll(PayrollArgs),

    /// List workflows
    Workflows(WorkflowsArgs),

    /// List team members
    Team(TeamArgs),

    /// Compute a payroll amount
    Pay(PayArgs),

    /// Overview: counts, task status, project progress and upcoming deadlines
    Dashboard,

    /// Log time on a task without running the timer
    LogTime(ManualArgs),

    /// Track a task for a number of seconds with a live timer
    Track {
        #[arg(long, value_name = "TASK_ID")]
        task: String,

        #[arg(long = "for", value_name = "SECS", default_value_t = 5)]
        seconds: u64,
    },

    /// Show the notification feed
    Notifications {
        #[arg(long, help = "Only unread notifications")]
        unread: bool,
    },

    /// Export a collection to CSV or JSON
    Export(ExportArgs),

    /// Interactive session: create records, change statuses, track time
    Shell,
}

// ---------------------------
// Shared view arguments
// ---------------------------

/// Filter and sort options shared by every list view.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Case-insensitive text search
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// high | medium | low | all
    #[arg(long, value_parser = choice::<Priority>)]
    pub priority: Option<Choice<Priority>>,

    /// Required tag (repeatable, all must match)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    #[arg(long)]
    pub assignee: Option<String>,

    /// Payroll month, e.g. "March 2024"
    #[arg(long)]
    pub month: Option<String>,

    /// name | due-date | priority | progress (default from config)
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse().map_err(|e: AppError| e.to_string())
}

/// A selector value: one concrete variant, or "all" for no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Choice<T> {
    pub fn only(self) -> Option<T> {
        match self {
            Choice::All => None,
            Choice::Only(v) => Some(v),
        }
    }
}

fn choice<T: ValueEnum>(s: &str) -> Result<Choice<T>, String> {
    if s.trim().eq_ignore_ascii_case("all") {
        return Ok(Choice::All);
    }
    T::from_str(s.trim(), true).map(Choice::Only).map_err(|_| {
        let names: Vec<String> = T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|p| p.get_name().to_string())
            .collect();
        format!("expected one of: {}, all", names.join(", "))
    })
}

impl ViewArgs {
    pub fn criteria<S>(&self, status: Option<Choice<S>>) -> FilterCriteria<S> {
        FilterCriteria {
            search_text: self.search.clone().unwrap_or_default(),
            status: status.and_then(Choice::only),
            priority: self.priority.and_then(Choice::only),
            tags: self.tags.clone(),
            assignee: unless_all(self.assignee.clone()),
            month: unless_all(self.month.clone()),
        }
    }

    pub fn sort_key(&self, cfg: &Config) -> SortKey {
        self.sort.unwrap_or(cfg.default_sort)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProjectsArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    #[arg(long, value_parser = choice::<WorkStatus>)]
    pub status: Option<Choice<WorkStatus>>,

    #[arg(long, help = "Show descriptions and hours")]
    pub details: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TasksArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    #[arg(long, value_parser = choice::<WorkStatus>)]
    pub status: Option<Choice<WorkStatus>>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PayrollArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    #[arg(long, value_parser = choice::<PayrollStatus>)]
    pub status: Option<Choice<PayrollStatus>>,

    #[arg(long, help = "Show totals above the list")]
    pub summary: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct WorkflowsArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    #[arg(long, value_parser = choice::<WorkflowStatus>)]
    pub status: Option<Choice<WorkflowStatus>>,

    #[arg(long, help = "List the steps of every workflow shown")]
    pub steps: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TeamArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    #[arg(long, value_parser = choice::<MemberStatus>)]
    pub status: Option<Choice<MemberStatus>>,
}

// ---------------------------
// Other shared arguments
// ---------------------------

#[derive(Args, Debug, Clone)]
pub struct PayArgs {
    /// Team member whose salary is used
    #[arg(long, conflicts_with = "salary", required_unless_present = "salary")]
    pub employee: Option<String>,

    /// Monthly base salary
    #[arg(long)]
    pub salary: Option<u64>,

    #[arg(long)]
    pub hours: f64,

    #[arg(long, default_value_t = 0.0)]
    pub overtime: f64,

    #[arg(long, default_value_t = 0.0)]
    pub bonus: f64,
}

#[derive(Args, Debug, Clone)]
pub struct ManualArgs {
    #[arg(long, value_name = "TASK_ID")]
    pub task: String,

    #[arg(long, default_value_t = 0)]
    pub hours: u32,

    #[arg(long, default_value_t = 0)]
    pub minutes: u32,

    /// Day the time is booked on (YYYY-MM-DD, default today)
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[arg(long, value_enum)]
    pub what: ExportKind,

    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    #[arg(long, value_name = "FILE")]
    pub file: String,

    #[arg(long, short = 'f')]
    pub force: bool,
}

// ---------------------------
// Shell grammar
// ---------------------------

/// One line typed inside `pmdash shell`.
#[derive(Parser)]
#[command(
    name = "shell",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand)]
pub enum ShellCommand {
    /// List projects
    Projects(ProjectsArgs),
    /// List tasks
    Tasks(TasksArgs),
    /// List payroll entries
    Payroll(PayrollArgs),
    /// List workflows
    Workflows(WorkflowsArgs),
    /// List team members
    Team(TeamArgs),
    /// List project templates
    Templates,
    /// Overview
    Dashboard,

    /// Create a project
    AddProject {
        #[arg(long)]
        name: String,
        #[arg(long = "due")]
        due_date: String,
        #[arg(long, value_enum, default_value = "medium", ignore_case = true)]
        priority: Priority,
        #[arg(long, value_enum, default_value = "not-started")]
        status: WorkStatus,
        #[arg(long, default_value_t = 0)]
        progress: u8,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value_t = 0)]
        budget: u64,
        #[arg(long, default_value_t = 0)]
        hours: u32,
        #[arg(long, default_value = "")]
        client: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Create a project from a template
    FromTemplate {
        template: String,
        #[arg(long = "due")]
        due_date: String,
    },

    /// Create a task
    AddTask {
        #[arg(long)]
        name: String,
        #[arg(long)]
        assignee: String,
        #[arg(long = "due")]
        due_date: String,
        #[arg(long, value_enum, default_value = "medium", ignore_case = true)]
        priority: Priority,
        #[arg(long, value_enum, default_value = "not-started")]
        status: WorkStatus,
        #[arg(long)]
        project: Option<String>,
    },

    /// Create a payroll entry for a team member
    AddPayroll {
        #[arg(long)]
        employee: String,
        /// Defaults to the current month, e.g. "May 2024"
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        hours: Option<f64>,
        #[arg(long, default_value_t = 0.0)]
        overtime: f64,
        #[arg(long, default_value_t = 0.0)]
        bonus: f64,
    },

    /// Create a workflow; each --step is NAME[:ASSIGNEE_ID[:DUE]]
    AddWorkflow {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "step", value_name = "STEP")]
        steps: Vec<String>,
    },

    /// Add a team member
    AddMember {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long)]
        salary: Option<u64>,
        #[arg(long, default_value = "Biweekly")]
        pay_period: String,
    },

    /// Change a project's status
    ProjectStatus {
        id: String,
        #[arg(value_enum)]
        status: WorkStatus,
    },
    /// Set a project's progress (0-100)
    Progress { id: String, percent: u8 },
    /// Change a task's status
    TaskStatus {
        id: String,
        #[arg(value_enum)]
        status: WorkStatus,
    },
    /// Change a payroll entry's status
    PayrollStatus {
        id: String,
        #[arg(value_enum)]
        status: PayrollStatus,
    },
    /// Change a workflow's status
    WorkflowStatus {
        id: String,
        #[arg(value_enum)]
        status: WorkflowStatus,
    },
    /// Change a workflow step's status
    StepStatus {
        workflow: String,
        step: String,
        #[arg(value_enum)]
        status: StepStatus,
    },

    /// Start the timer on a task
    Start { task: String },
    /// Stop the timer and record the session
    Stop,
    /// Show the timer state
    Timer,
    /// Log time without the timer
    Manual(ManualArgs),
    /// Minutes logged on a day (default today)
    Total { date: Option<String> },
    /// Time entries recorded in this session
    History,

    /// Show the notification feed
    Notifications {
        #[arg(long)]
        unread: bool,
    },
    /// Mark a notification as read
    Read { id: String },
    /// Mark every notification as read
    ReadAll,
    /// Remove a notification
    Dismiss { id: String },

    /// Show the activity log
    Log,
    /// Export a collection
    Export(ExportArgs),

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}
