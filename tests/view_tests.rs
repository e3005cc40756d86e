mod common;
use common::today;

use pmdash::core::view::aggregate::{
    count_by_status, distinct_tags, status_histogram, upcoming_deadlines, workflow_completion,
};
use pmdash::core::view::{
    DashboardStats, FilterCriteria, PayrollSummary, SortKey, apply_view, filter_records,
    sort_records,
};
use pmdash::models::{Priority, Task, WorkStatus};
use pmdash::store::seed;

fn ids<T: pmdash::models::Identified>(records: &[T]) -> Vec<&str> {
    records.iter().map(|r| r.id()).collect()
}

#[test]
fn default_criteria_pass_everything_through() {
    let tasks = seed::tasks();
    let criteria = FilterCriteria::<WorkStatus>::default();
    assert!(criteria.is_default());

    let view = filter_records(&tasks, &criteria);
    assert_eq!(ids(&view), ids(&tasks));
}

#[test]
fn filters_are_a_conjunction() {
    let tasks = seed::tasks();
    let criteria = FilterCriteria::new()
        .status(WorkStatus::InProgress)
        .priority(Priority::High);

    let view = filter_records(&tasks, &criteria);
    assert_eq!(ids(&view), vec!["1", "3"]);
    for t in &view {
        assert_eq!(t.status, WorkStatus::InProgress);
        assert_eq!(t.priority, Priority::High);
    }

    let narrower = criteria.search("bugs");
    assert_eq!(ids(&filter_records(&tasks, &narrower)), vec!["3"]);
}

#[test]
fn search_is_case_insensitive_over_searchable_fields() {
    let tasks = seed::tasks();
    let by_assignee = filter_records(&tasks, &FilterCriteria::new().search("JOHN"));
    assert_eq!(ids(&by_assignee), vec!["1", "3"]);

    let projects = seed::projects();
    let by_client = filter_records(&projects, &FilterCriteria::new().search("corp"));
    assert_eq!(ids(&by_client), vec!["1"]);
}

#[test]
fn every_tag_must_be_present() {
    let projects = seed::projects();
    let one = filter_records(&projects, &FilterCriteria::new().tag("web"));
    assert_eq!(ids(&one), vec!["1"]);

    let none = filter_records(&projects, &FilterCriteria::new().tag("web").tag("mobile"));
    assert!(none.is_empty());
}

#[test]
fn month_filter_is_exact() {
    let payroll = seed::payroll();
    assert_eq!(
        filter_records(&payroll, &FilterCriteria::new().month("March 2024")).len(),
        4
    );
    assert!(filter_records(&payroll, &FilterCriteria::new().month("April 2024")).is_empty());
}

#[test]
fn assignee_filter_rejects_kinds_without_assignee() {
    let projects = seed::projects();
    let view = filter_records(&projects, &FilterCriteria::new().assignee("John Smith"));
    assert!(view.is_empty());
}

#[test]
fn sort_by_due_date_ascending() {
    let mut tasks = seed::tasks();
    sort_records(&mut tasks, SortKey::DueDate);
    assert_eq!(ids(&tasks), vec!["2", "3", "5", "1", "4"]);
}

#[test]
fn sort_by_priority_is_stable() {
    let mut tasks = seed::tasks();
    sort_records(&mut tasks, SortKey::Priority);
    // High (1, 3), Medium (2, 5), Low (4): input order kept inside each rank
    assert_eq!(ids(&tasks), vec!["1", "3", "2", "5", "4"]);
}

#[test]
fn sort_by_name_and_progress() {
    let mut projects = seed::projects();
    sort_records(&mut projects, SortKey::Name);
    assert_eq!(ids(&projects), vec!["2", "3", "1"]);

    sort_records(&mut projects, SortKey::Progress);
    assert_eq!(ids(&projects), vec!["1", "3", "2"]);
}

#[test]
fn unparsable_due_dates_sort_last() {
    let mut tasks: Vec<Task> = seed::tasks();
    tasks[0].due_date = "someday".to_string();
    tasks[3].due_date = String::new();

    sort_records(&mut tasks, SortKey::DueDate);
    assert_eq!(ids(&tasks), vec!["2", "3", "5", "1", "4"]);
    assert_eq!(tasks[3].due_date, "someday");
    assert_eq!(tasks[4].due_date, "");
}

#[test]
fn applying_a_view_twice_is_idempotent() {
    let tasks = seed::tasks();
    let criteria = FilterCriteria::new().status(WorkStatus::InProgress);
    let once = apply_view(&tasks, &criteria, SortKey::Priority);
    let twice = apply_view(&once, &criteria, SortKey::Priority);
    assert_eq!(once, twice);
}

#[test]
fn views_leave_the_source_untouched() {
    let tasks = seed::tasks();
    let before = tasks.clone();
    let _ = apply_view(&tasks, &FilterCriteria::new().search("a"), SortKey::Name);
    let _ = upcoming_deadlines(&tasks, 3);
    assert_eq!(tasks, before);
}

#[test]
fn sort_key_accepts_several_spellings() {
    for s in ["due-date", "due_date", "dueDate"] {
        assert_eq!(s.parse::<SortKey>().ok(), Some(SortKey::DueDate));
    }
    assert!("size".parse::<SortKey>().is_err());
}

#[test]
fn upcoming_deadlines_take_the_earliest() {
    let tasks = seed::tasks();
    let next = upcoming_deadlines(&tasks, 3);
    assert_eq!(ids(&next), vec!["2", "3", "5"]);
}

#[test]
fn status_counts_and_tags() {
    let tasks = seed::tasks();
    assert_eq!(count_by_status(&tasks, WorkStatus::InProgress), 3);
    assert_eq!(
        status_histogram(&tasks, &WorkStatus::ALL),
        vec![
            (WorkStatus::NotStarted, 1),
            (WorkStatus::InProgress, 3),
            (WorkStatus::Completed, 1)
        ]
    );

    let tags = distinct_tags(&seed::projects());
    assert_eq!(&tags[..3], &["web", "design", "frontend"]);
    assert_eq!(tags.len(), 8);
}

#[test]
fn payroll_summary_over_seed_data() {
    let s = PayrollSummary::compute(&seed::payroll(), &seed::team());
    assert_eq!(s.total_payroll, 23_800);
    assert_eq!(s.unpaid_amount, 5_000);
    assert_eq!(s.processing_count, 1);
    assert_eq!(s.active_employees, 4);
}

#[test]
fn dashboard_stats_over_seed_data() {
    let stats = DashboardStats::compute(
        &seed::projects(),
        &seed::tasks(),
        &seed::team(),
        today(),
    );
    assert_eq!(stats.total_projects, 3);
    assert_eq!(stats.total_tasks, 5);
    assert_eq!(stats.team_members, 4);
    assert_eq!(stats.overdue_projects, 1);
    assert_eq!(stats.average_progress, 45);
}

#[test]
fn workflow_step_completion() {
    let workflows = seed::workflows();
    assert_eq!(workflow_completion(&workflows[0]), (1, 4));
    assert_eq!(workflow_completion(&workflows[1]), (1, 3));
}

#[test]
fn empty_input_gives_empty_view() {
    let criteria = FilterCriteria::new().search("x").tag("t");
    let view = apply_view::<Task>(&[], &criteria, SortKey::Priority);
    assert!(view.is_empty());
}
