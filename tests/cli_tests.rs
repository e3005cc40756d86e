mod common;
use common::{pm, pm_bin, temp_config};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn projects_sorted_by_name() {
    let out = pm("projects_by_name")
        .args(["projects", "--sort", "name"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    let marketing = text.find("Marketing Campaign").expect("listed");
    let website = text.find("Website Redesign").expect("listed");
    assert!(marketing < website);
}

#[test]
fn tasks_filtered_by_status_and_priority() {
    pm("tasks_filtered")
        .args(["tasks", "--status", "in-progress", "--priority", "high"])
        .assert()
        .success()
        .stdout(contains("Design mockups"))
        .stdout(contains("Fix bugs"))
        .stdout(contains("Update documentation").not())
        .stdout(contains("Write blog post").not());
}

#[test]
fn all_selector_clears_status_and_priority() {
    pm("tasks_all_selectors")
        .args(["tasks", "--status", "All", "--priority", "all", "--assignee", "ALL"])
        .assert()
        .success()
        .stdout(contains("Tasks (5 of 5)"));
}

#[test]
fn unknown_status_lists_the_choices() {
    pm("tasks_bad_status")
        .args(["tasks", "--status", "finished"])
        .assert()
        .failure()
        .stderr(contains("expected one of: not-started, in-progress, completed, all"));
}

#[test]
fn empty_view_warns() {
    pm("tasks_empty")
        .args(["tasks", "--search", "no such thing"])
        .assert()
        .success()
        .stdout(contains("No tasks match"));
}

#[test]
fn bad_sort_key_is_rejected() {
    pm("bad_sort")
        .args(["tasks", "--sort", "size"])
        .assert()
        .failure()
        .stderr(contains("Invalid sort key"));
}

#[test]
fn payroll_summary_totals() {
    pm("payroll_summary")
        .args(["payroll", "--summary", "--month", "March 2024"])
        .assert()
        .success()
        .stdout(contains("$23,800"))
        .stdout(contains("$5,000"))
        .stdout(contains("Michael Lee"));
}

#[test]
fn workflows_with_steps() {
    pm("workflows_steps")
        .args(["workflows", "--steps"])
        .assert()
        .success()
        .stdout(contains("Website Development Workflow"))
        .stdout(contains("Requirements Gathering"))
        .stdout(contains("1/4"));
}

#[test]
fn team_search() {
    pm("team_search")
        .args(["team", "--search", "design"])
        .assert()
        .success()
        .stdout(contains("Sarah Brown"))
        .stdout(contains("John Smith").not());
}

#[test]
fn pay_for_employee() {
    pm("pay_employee")
        .args([
            "pay",
            "--employee",
            "3",
            "--hours",
            "170",
            "--overtime",
            "10",
            "--bonus",
            "200",
        ])
        .assert()
        .success()
        .stdout(contains("Michael Lee"))
        .stdout(contains("$7,716"));
}

#[test]
fn pay_needs_a_salary_source() {
    pm("pay_missing").args(["pay", "--hours", "10"]).assert().failure();

    pm("pay_unknown")
        .args(["pay", "--employee", "42", "--hours", "10"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn dashboard_overview() {
    pm("dashboard")
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("Overdue projects"))
        .stdout(contains("Upcoming deadlines"))
        .stdout(contains("Write blog post"));
}

#[test]
fn invalid_today_is_an_error() {
    pm_bin()
        .args(["--config", &temp_config("bad_today"), "--today", "2024-13-01", "dashboard"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn log_time_prints_entry_and_total() {
    pm("log_time")
        .args(["log-time", "--task", "1", "--hours", "1", "--minutes", "30"])
        .assert()
        .success()
        .stdout(contains("Logged 01:30"))
        .stdout(contains("Total for 2024-05-25: 01:30"));
}

#[test]
fn log_time_zero_duration_is_ignored() {
    pm("log_time_zero")
        .args(["log-time", "--task", "1"])
        .assert()
        .success()
        .stdout(contains("Nothing logged"));
}

#[test]
fn log_time_unknown_task_fails() {
    pm("log_time_unknown")
        .args(["log-time", "--task", "99", "--hours", "1"])
        .assert()
        .failure()
        .stderr(contains("task '99' not found"));
}

#[test]
fn track_for_zero_seconds() {
    pm("track_zero")
        .args(["track", "--task", "3", "--for", "0"])
        .assert()
        .success()
        .stdout(contains("Tracking 'Fix bugs'"))
        .stdout(contains("Logged 00:00"));
}

#[test]
fn unread_notifications_only() {
    pm("notif_unread")
        .args(["notifications", "--unread"])
        .assert()
        .success()
        .stdout(contains("3 unread"))
        .stdout(contains("Task Overdue"))
        .stdout(contains("Task Completed").not());
}

#[test]
fn init_writes_config_and_print_reads_it() {
    let cfg = temp_config("init_print");
    pm_bin()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Configuration written"));

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("standard_monthly_hours"));

    pm_bin()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    pm_bin()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("currency_symbol"));
}

#[test]
fn custom_config_changes_pay_policy() {
    let cfg = temp_config("custom_policy");
    fs::write(
        &cfg,
        "currency_symbol: \"€\"\nstandard_monthly_hours: 100\novertime_multiplier: 2\n",
    )
    .expect("write config");

    pm_bin()
        .args([
            "--config",
            &cfg,
            "pay",
            "--salary",
            "5000",
            "--hours",
            "100",
            "--overtime",
            "5",
        ])
        .assert()
        .success()
        .stdout(contains("€5,500"));
}

#[test]
fn invalid_config_is_reported() {
    let cfg = temp_config("invalid_config");
    fs::write(&cfg, "standard_monthly_hours: 0\n").expect("write config");

    pm_bin()
        .args(["--config", &cfg, "dashboard"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn nan_monthly_hours_is_rejected() {
    let cfg = temp_config("nan_hours");
    fs::write(&cfg, "standard_monthly_hours: .nan\n").expect("write config");

    pm_bin()
        .args(["--config", &cfg, "pay", "--salary", "5000", "--hours", "160"])
        .assert()
        .failure()
        .stderr(contains("standard_monthly_hours must be a positive number"));
}
