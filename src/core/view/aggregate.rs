//! Pure reductions over record slices.
//!
//! Nothing here caches: callers pass the current collection and get a fresh
//! answer, so results never lag behind a mutation.

use super::sort::{SortKey, sort_records};
use crate::models::{
    PayrollEntry, PayrollStatus, Project, Record, StepStatus, Task, TeamMember, WorkStatus,
    Workflow,
};
use chrono::NaiveDate;
use serde::Serialize;

pub fn sum_by<R, F>(records: &[R], field: F) -> i64
where
    F: Fn(&R) -> i64,
{
    records.iter().map(field).sum()
}

pub fn count_where<R, P>(records: &[R], pred: P) -> usize
where
    P: Fn(&R) -> bool,
{
    records.iter().filter(|&r| pred(r)).count()
}

pub fn count_by_status<R: Record>(records: &[R], status: R::Status) -> usize {
    count_where(records, |r| r.status() == status)
}

/// One `(status, count)` pair per requested status, in the given order.
pub fn status_histogram<R: Record>(
    records: &[R],
    statuses: &[R::Status],
) -> Vec<(R::Status, usize)> {
    statuses
        .iter()
        .map(|s| (*s, count_by_status(records, *s)))
        .collect()
}

/// Every tag in use, in first-seen order.
pub fn distinct_tags<R: Record>(records: &[R]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in records.iter().flat_map(|r| r.tags()) {
        if !out.contains(tag) {
            out.push(tag.clone());
        }
    }
    out
}

/// The `n` earliest-due records. Sorts a copy; the source order is kept.
pub fn upcoming_deadlines<R: Record + Clone>(records: &[R], n: usize) -> Vec<R> {
    let mut sorted = records.to_vec();
    sort_records(&mut sorted, SortKey::DueDate);
    sorted.truncate(n);
    sorted
}

/// Figures shown on top of the payroll page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PayrollSummary {
    pub total_payroll: i64,
    pub unpaid_amount: i64,
    pub processing_count: usize,
    pub active_employees: usize,
}

impl PayrollSummary {
    pub fn compute(entries: &[PayrollEntry], team: &[TeamMember]) -> Self {
        Self {
            total_payroll: sum_by(entries, PayrollEntry::amount_or_zero),
            unpaid_amount: entries
                .iter()
                .filter(|e| e.status == PayrollStatus::Unpaid)
                .map(PayrollEntry::amount_or_zero)
                .sum(),
            processing_count: count_by_status(entries, PayrollStatus::Processing),
            active_employees: count_where(team, TeamMember::is_active),
        }
    }
}

/// Dashboard overview cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_tasks: usize,
    pub team_members: usize,
    pub overdue_projects: usize,
    pub average_progress: u8,
    pub task_status: Vec<(WorkStatus, usize)>,
}

impl DashboardStats {
    pub fn compute(
        projects: &[Project],
        tasks: &[Task],
        team: &[TeamMember],
        today: NaiveDate,
    ) -> Self {
        let average_progress = if projects.is_empty() {
            0
        } else {
            let sum: u32 = projects.iter().map(|p| p.progress as u32).sum();
            (sum as f64 / projects.len() as f64).round() as u8
        };
        Self {
            total_projects: projects.len(),
            total_tasks: tasks.len(),
            team_members: team.len(),
            overdue_projects: count_where(projects, |p| p.is_overdue(today)),
            average_progress,
            task_status: status_histogram(tasks, &WorkStatus::ALL),
        }
    }
}

/// `(completed, total)` steps of a workflow.
pub fn workflow_completion(workflow: &Workflow) -> (usize, usize) {
    (
        count_by_status(&workflow.steps, StepStatus::Completed),
        workflow.steps.len(),
    )
}
