/// ANSI color helper utilities for terminal output.
use crate::models::{PayrollStatus, Priority, StepStatus, WorkStatus, WorkflowStatus};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

pub fn color_for_work_status(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::Completed => GREEN,
        WorkStatus::InProgress => BLUE,
        WorkStatus::NotStarted => GREY,
    }
}

pub fn color_for_priority(priority: Priority) -> &'static str {
    match priority {
        Priority::High => RED,
        Priority::Medium => YELLOW,
        Priority::Low => GREEN,
    }
}

pub fn color_for_payroll(status: PayrollStatus) -> &'static str {
    match status {
        PayrollStatus::Paid => GREEN,
        PayrollStatus::Processing => BLUE,
        PayrollStatus::Unpaid => RED,
    }
}

pub fn color_for_step(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => GREEN,
        StepStatus::InProgress => BLUE,
        StepStatus::Blocked => RED,
        StepStatus::Pending => GREY,
    }
}

pub fn color_for_workflow(status: WorkflowStatus) -> &'static str {
    match status {
        WorkflowStatus::Active => GREEN,
        WorkflowStatus::Completed => BLUE,
        WorkflowStatus::Paused | WorkflowStatus::Cancelled => GREY,
    }
}

/// Greys out empty placeholders ("", "-", "--").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Overdue dates in red, everything else untouched.
pub fn colorize_due(value: &str, overdue: bool) -> String {
    if overdue {
        format!("{RED}{value}{RESET}")
    } else {
        value.to_string()
    }
}
