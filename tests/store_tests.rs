mod common;
use common::today;

use pmdash::core::forms::{
    NewPayrollEntry, NewProject, NewTask, NewTeamMember, NewWorkflow, NewWorkflowStep,
};
use pmdash::core::payroll::PayPolicy;
use pmdash::errors::{AppError, ValidationError};
use pmdash::models::{PayrollStatus, StepStatus, WorkStatus};
use pmdash::store::{Collection, EntityStore, seed};

fn store() -> EntityStore {
    EntityStore::seeded(today()).expect("seed data has unique ids")
}

fn project_form(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        due_date: "2024-08-01".to_string(),
        ..NewProject::default()
    }
}

#[test]
fn seeded_store_counts() {
    let s = store();
    assert_eq!(s.projects.len(), 3);
    assert_eq!(s.tasks.len(), 5);
    assert_eq!(s.team.len(), 4);
    assert_eq!(s.payroll.len(), 4);
    assert_eq!(s.workflows.len(), 2);
    assert_eq!(s.notifications.items().len(), 4);
    assert_eq!(s.templates.len(), 2);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut tasks = seed::tasks();
    tasks.push(tasks[0].clone());
    let err = Collection::from_vec(tasks).unwrap_err();
    assert!(matches!(err, AppError::DuplicateId { kind: "task", ref id } if id == "1"));
}

#[test]
fn new_ids_never_collide_with_seed_data() {
    let mut s = store();
    let id = s.add_project(project_form("Data Platform")).expect("created");
    assert_eq!(id, "6");
    let next = s.add_project(project_form("Second")).expect("created");
    assert_eq!(next, "7");
    assert_eq!(s.projects.len(), 5);
}

#[test]
fn validation_failure_creates_nothing() {
    let mut s = store();
    let err = s.add_project(project_form("  ")).unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::MissingField("name"))
    ));
    assert_eq!(s.projects.len(), 3);

    let err = s.add_task(NewTask::default()).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(s.tasks.len(), 5);
}

#[test]
fn project_tags_are_unique_and_non_empty() {
    let mut form = project_form("Tagged");
    assert!(form.add_tag("web"));
    assert!(!form.add_tag("web"));
    assert!(!form.add_tag("   "));
    assert!(form.add_tag("api"));
    assert!(form.remove_tag("web"));
    assert!(!form.remove_tag("web"));
    assert_eq!(form.tags, vec!["api"]);
}

#[test]
fn project_from_template() {
    let mut s = store();
    let id = s
        .add_project_from_template("1", "2024-09-30")
        .expect("created");
    let p = s.projects.require(&id).expect("present");
    assert_eq!(p.name, "Website Development");
    assert_eq!(p.estimated_hours, Some(480));

    let err = s.add_project_from_template("9", "2024-09-30").unwrap_err();
    assert!(matches!(err, AppError::NotFound { kind: "template", .. }));
}

#[test]
fn task_must_reference_an_existing_project() {
    let mut s = store();
    let form = NewTask {
        name: "Wire up API".to_string(),
        assignee: "Michael Lee".to_string(),
        due_date: "2024-06-10".to_string(),
        project_id: Some("99".to_string()),
        ..NewTask::default()
    };
    assert!(matches!(
        s.add_task(form.clone()).unwrap_err(),
        AppError::NotFound { kind: "project", .. }
    ));

    let ok = NewTask {
        project_id: Some("3".to_string()),
        ..form
    };
    let id = s.add_task(ok).expect("created");
    assert_eq!(s.tasks.require(&id).expect("present").status, WorkStatus::NotStarted);
}

#[test]
fn payroll_entry_is_computed_from_salary() {
    let mut s = store();
    let form = NewPayrollEntry {
        employee_id: "3".to_string(),
        month: "April 2024".to_string(),
        hours_worked: Some(170.0),
        overtime_hours: 10.0,
        bonus: 200.0,
    };
    let id = s
        .add_payroll_entry(form, &PayPolicy::default())
        .expect("created");
    let e = s.payroll.require(&id).expect("present");
    assert_eq!(e.amount, Some(7716));
    assert_eq!(e.employee_name, "Michael Lee");
    assert_eq!(e.status, PayrollStatus::Processing);
    assert_eq!(e.due_date.as_deref(), Some("2024-05-25"));
}

#[test]
fn payroll_entry_validation() {
    let mut s = store();
    let unknown = NewPayrollEntry {
        employee_id: "42".to_string(),
        month: "April 2024".to_string(),
        hours_worked: Some(160.0),
        ..NewPayrollEntry::default()
    };
    assert!(matches!(
        s.add_payroll_entry(unknown.clone(), &PayPolicy::default()).unwrap_err(),
        AppError::Validation(ValidationError::UnknownEmployee(_))
    ));

    let no_hours = NewPayrollEntry {
        employee_id: "1".to_string(),
        hours_worked: None,
        ..unknown
    };
    assert!(matches!(
        s.add_payroll_entry(no_hours, &PayPolicy::default()).unwrap_err(),
        AppError::Validation(ValidationError::MissingField("hours worked"))
    ));
    assert_eq!(s.payroll.len(), 4);
}

#[test]
fn workflow_steps_get_derived_ids() {
    let mut s = store();
    let mut form = NewWorkflow {
        name: "Release".to_string(),
        ..NewWorkflow::default()
    };
    for name in ["Freeze", "Tag", "Publish"] {
        form.add_step(NewWorkflowStep {
            name: name.to_string(),
            ..NewWorkflowStep::default()
        });
    }
    assert!(form.remove_step(1).is_some());
    assert!(form.remove_step(5).is_none());

    let id = s.add_workflow(form).expect("created");
    let wf = s.workflows.require(&id).expect("present");
    let step_ids: Vec<&str> = wf.steps.iter().map(|st| st.id.as_str()).collect();
    assert_eq!(step_ids, vec![format!("{id}-0"), format!("{id}-1")]);
}

#[test]
fn workflow_step_needs_a_name() {
    let mut form = NewWorkflow {
        name: "Broken".to_string(),
        ..NewWorkflow::default()
    };
    form.add_step(NewWorkflowStep {
        name: "ok".to_string(),
        ..NewWorkflowStep::default()
    });
    form.add_step(NewWorkflowStep::default());
    assert_eq!(form.validate(), Err(ValidationError::UnnamedStep(2)));
}

#[test]
fn team_member_initials_and_defaults() {
    let mut s = store();
    let id = s
        .add_team_member(NewTeamMember {
            name: "ada king lovelace".to_string(),
            email: "ada@example.com".to_string(),
            ..NewTeamMember::default()
        })
        .expect("created");
    let m = s.team.require(&id).expect("present");
    assert_eq!(m.initials, "AKL");
    assert_eq!(m.pay_period.as_deref(), Some("Biweekly"));
    assert!(m.is_active());

    let err = s.add_team_member(NewTeamMember::default()).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn status_changes() {
    let mut s = store();

    s.set_project_status("2", WorkStatus::Completed).expect("ok");
    assert_eq!(s.projects.require("2").expect("present").progress, 100);

    s.set_task_status("4", WorkStatus::Completed).expect("ok");
    assert_eq!(
        s.tasks.require("4").expect("present").completed_date.as_deref(),
        Some("2024-05-25")
    );

    s.set_step_status("1", "3", StepStatus::InProgress).expect("ok");
    let wf = s.workflows.require("1").expect("present");
    assert_eq!(wf.step("3").map(|st| st.status), Some(StepStatus::InProgress));

    assert!(matches!(
        s.set_step_status("1", "99", StepStatus::Completed).unwrap_err(),
        AppError::NotFound { kind: "workflow step", .. }
    ));
    assert!(matches!(
        s.set_payroll_status("42", PayrollStatus::Paid).unwrap_err(),
        AppError::NotFound { .. }
    ));
    assert!(s.set_project_progress("1", 101).is_err());
}

#[test]
fn notification_feed_operations() {
    let mut s = store();
    assert_eq!(s.notifications.unread_count(), 3);

    assert!(s.mark_notification_read("1"));
    assert_eq!(s.notifications.unread_count(), 2);

    assert!(!s.mark_notification_read("nope"));
    assert!(!s.dismiss_notification("nope"));
    assert_eq!(s.notifications.items().len(), 4);

    assert!(s.dismiss_notification("2"));
    assert_eq!(s.notifications.items().len(), 3);
    assert_eq!(s.notifications.unread_count(), 1);

    s.mark_all_notifications_read();
    assert_eq!(s.notifications.unread_count(), 0);
}

#[test]
fn mutations_are_logged() {
    let mut s = store();
    let before = s.log.entries().len();
    s.add_project(project_form("Logged")).expect("created");
    s.set_task_status("1", WorkStatus::Completed).expect("ok");
    assert_eq!(s.log.entries().len(), before + 2);
    assert!(s.log.render().contains("Project 'Logged' created"));
}
