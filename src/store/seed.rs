//! Built-in demo data set loaded by every session.

use crate::models::{
    MemberStatus, Notification, NotificationKind, PayrollEntry, PayrollStatus, Priority, Project,
    ProjectTemplate, StepStatus, Task, TaskBlueprint, TeamMember, WorkStatus, Workflow,
    WorkflowStatus, WorkflowStep,
};
use chrono::{NaiveDate, NaiveTime, TimeDelta};

fn s(v: &str) -> String {
    v.to_string()
}

fn tags(v: &[&str]) -> Vec<String> {
    v.iter().map(|t| t.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    status: WorkStatus,
    due_date: &str,
    progress: u8,
    priority: Priority,
    description: &str,
    budget: u64,
    hours: (u32, Option<u32>),
    client: &str,
    tag_list: &[&str],
    created: &str,
    manager: &str,
) -> Project {
    Project {
        id: s(id),
        name: s(name),
        status,
        due_date: s(due_date),
        progress,
        priority: Some(priority),
        description: Some(s(description)),
        budget: Some(budget),
        estimated_hours: Some(hours.0),
        actual_hours: hours.1,
        client_name: Some(s(client)),
        tags: tags(tag_list),
        created_date: s(created),
        updated_date: None,
        manager_id: Some(s(manager)),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Website Redesign",
            WorkStatus::InProgress,
            "2024-06-30",
            75,
            Priority::High,
            "Complete redesign of company website with modern UI/UX",
            15000,
            (120, Some(90)),
            "Tech Corp",
            &["web", "design", "frontend"],
            "2024-03-01",
            "1",
        ),
        project(
            "2",
            "Marketing Campaign",
            WorkStatus::NotStarted,
            "2024-07-15",
            0,
            Priority::Medium,
            "Q3 marketing campaign for product launch",
            8000,
            (80, None),
            "StartupXYZ",
            &["marketing", "campaign"],
            "2024-03-05",
            "2",
        ),
        project(
            "3",
            "Mobile App Development",
            WorkStatus::InProgress,
            "2024-05-20",
            60,
            Priority::High,
            "Native mobile app for iOS and Android",
            25000,
            (200, Some(120)),
            "Mobile Solutions Inc",
            &["mobile", "app", "development"],
            "2024-02-15",
            "3",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    name: &str,
    assignee: &str,
    due_date: &str,
    status: WorkStatus,
    priority: Priority,
    project_id: &str,
    created: &str,
) -> Task {
    Task {
        id: s(id),
        name: s(name),
        assignee: s(assignee),
        due_date: s(due_date),
        status,
        priority,
        project_id: Some(s(project_id)),
        description: None,
        estimated_hours: None,
        actual_hours: None,
        completed_date: None,
        created_date: s(created),
        tags: Vec::new(),
    }
}

pub fn tasks() -> Vec<Task> {
    use Priority::*;
    use WorkStatus::*;
    vec![
        task("1", "Design mockups", "John Smith", "2024-05-05", InProgress, High, "1", "2024-03-01"),
        task("2", "Write blog post", "Sarah Brown", "2024-04-25", Completed, Medium, "2", "2024-03-05"),
        task("3", "Fix bugs", "John Smith", "2024-04-28", InProgress, High, "1", "2024-02-15"),
        task("4", "Create presentation", "Michael Lee", "2024-05-10", NotStarted, Low, "3", "2024-01-10"),
        task("5", "Update documentation", "Emily Davis", "2024-05-02", InProgress, Medium, "1", "2024-02-20"),
    ]
}

fn member(
    id: &str,
    name: &str,
    initials: &str,
    role: &str,
    salary: u64,
    department: &str,
    projects: &[&str],
) -> TeamMember {
    TeamMember {
        id: s(id),
        name: s(name),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        initials: s(initials),
        role: Some(s(role)),
        salary: Some(salary),
        pay_period: Some(s("Monthly")),
        department: Some(s(department)),
        status: MemberStatus::Active,
        projects: tags(projects),
    }
}

pub fn team() -> Vec<TeamMember> {
    vec![
        member(
            "1",
            "John Smith",
            "JS",
            "Project Manager",
            7500,
            "Management",
            &["E-commerce Platform", "Mobile App Redesign"],
        ),
        member(
            "2",
            "Sarah Brown",
            "SB",
            "Designer",
            5000,
            "Design",
            &["Brand Identity System", "Mobile App Redesign"],
        ),
        member(
            "3",
            "Michael Lee",
            "ML",
            "Developer",
            6500,
            "Engineering",
            &["E-commerce Platform", "API Integration"],
        ),
        member(
            "4",
            "Emily Davis",
            "ED",
            "Marketing Specialist",
            4800,
            "Marketing",
            &["Brand Identity System"],
        ),
    ]
}

fn payroll_entry(
    id: &str,
    employee: (&str, &str),
    status: PayrollStatus,
    amount: i64,
    hours: f64,
    overtime: Option<f64>,
    bonus: f64,
) -> PayrollEntry {
    PayrollEntry {
        id: s(id),
        employee_id: s(employee.0),
        employee_name: s(employee.1),
        month: s("March 2024"),
        status,
        amount: Some(amount),
        due_date: Some(s("2024-03-31")),
        hours_worked: Some(hours),
        overtime_hours: overtime,
        bonus: Some(bonus),
    }
}

pub fn payroll() -> Vec<PayrollEntry> {
    vec![
        payroll_entry("1", ("1", "John Smith"), PayrollStatus::Paid, 7500, 160.0, None, 500.0),
        payroll_entry("2", ("2", "Sarah Brown"), PayrollStatus::Unpaid, 5000, 160.0, None, 0.0),
        payroll_entry(
            "3",
            ("3", "Michael Lee"),
            PayrollStatus::Processing,
            6500,
            170.0,
            Some(10.0),
            200.0,
        ),
        payroll_entry("4", ("4", "Emily Davis"), PayrollStatus::Paid, 4800, 160.0, None, 0.0),
    ]
}

fn step(
    id: &str,
    name: &str,
    description: &str,
    assignee: &str,
    status: StepStatus,
    due_date: &str,
    deps: &[&str],
) -> WorkflowStep {
    WorkflowStep {
        id: s(id),
        name: s(name),
        description: s(description),
        assignee_id: s(assignee),
        status,
        due_date: s(due_date),
        dependencies: tags(deps),
        estimated_hours: None,
        actual_hours: None,
        blocked_reason: None,
        completed_date: None,
    }
}

pub fn workflows() -> Vec<Workflow> {
    use StepStatus::*;
    vec![
        Workflow {
            id: s("1"),
            name: s("Website Development Workflow"),
            description: s("Complete workflow for developing a new website"),
            steps: vec![
                step("1", "Requirements Gathering", "Collect and document project requirements", "1", Completed, "2024-03-15", &[]),
                step("2", "Design Mockups", "Create visual designs and wireframes", "2", InProgress, "2024-03-25", &[]),
                step("3", "Development", "Build the website based on approved designs", "3", Pending, "2024-04-10", &["2"]),
                step("4", "Testing & QA", "Test functionality and fix any issues", "1", Pending, "2024-04-20", &["3"]),
            ],
            project_id: Some(s("1")),
            status: WorkflowStatus::Active,
            priority: None,
            created_date: s("2024-03-01"),
            due_date: None,
            template_id: None,
            tags: Vec::new(),
        },
        Workflow {
            id: s("2"),
            name: s("Marketing Campaign Launch"),
            description: s("End-to-end marketing campaign workflow"),
            steps: vec![
                step("5", "Campaign Strategy", "Define campaign goals and target audience", "4", Completed, "2024-03-10", &[]),
                step("6", "Content Creation", "Create marketing materials and content", "2", InProgress, "2024-03-20", &[]),
                step("7", "Campaign Launch", "Execute the marketing campaign", "4", Pending, "2024-03-30", &["6"]),
            ],
            project_id: Some(s("2")),
            status: WorkflowStatus::Active,
            priority: None,
            created_date: s("2024-03-05"),
            due_date: None,
            template_id: None,
            tags: Vec::new(),
        },
    ]
}

/// Timestamps are relative to 09:00 UTC of `today`.
pub fn notifications(today: NaiveDate) -> Vec<Notification> {
    let base = today.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()).and_utc();
    let n = |id: &str, kind, title: &str, message: &str, read, ago: TimeDelta, related: &str| {
        Notification {
            id: s(id),
            kind,
            title: s(title),
            message: s(message),
            read,
            created_date: base - ago,
            user_id: None,
            related_id: Some(s(related)),
        }
    };
    vec![
        n("1", NotificationKind::Overdue, "Task Overdue", "Design mockups task is overdue by 2 days", false, TimeDelta::days(2), "1"),
        n("2", NotificationKind::DueSoon, "Task Due Soon", "Fix bugs task is due in 2 hours", false, TimeDelta::minutes(30), "3"),
        n("3", NotificationKind::Completed, "Task Completed", "Write blog post has been completed by Sarah Brown", true, TimeDelta::hours(1), "2"),
        n("4", NotificationKind::Assigned, "New Task Assigned", "You have been assigned to Update documentation", false, TimeDelta::minutes(15), "5"),
    ]
}

fn blueprint(name: &str, priority: Priority, description: &str) -> TaskBlueprint {
    TaskBlueprint {
        name: s(name),
        priority,
        description: s(description),
    }
}

pub fn templates() -> Vec<ProjectTemplate> {
    use Priority::*;
    vec![
        ProjectTemplate {
            id: s("1"),
            name: s("Website Development"),
            description: s("Standard website development workflow"),
            category: s("Development"),
            estimated_duration: 60,
            tasks: vec![
                blueprint("Requirements Gathering", High, "Collect project requirements"),
                blueprint("Design Mockups", High, "Create visual designs"),
                blueprint("Frontend Development", Medium, "Build user interface"),
                blueprint("Backend Development", Medium, "Develop server-side logic"),
                blueprint("Testing & QA", High, "Test and fix issues"),
            ],
        },
        ProjectTemplate {
            id: s("2"),
            name: s("Marketing Campaign"),
            description: s("Complete marketing campaign setup"),
            category: s("Marketing"),
            estimated_duration: 30,
            tasks: vec![
                blueprint("Market Research", High, "Research target market"),
                blueprint("Content Creation", Medium, "Create marketing content"),
                blueprint("Campaign Launch", High, "Execute campaign"),
                blueprint("Performance Analysis", Medium, "Analyze results"),
            ],
        },
    ]
}
