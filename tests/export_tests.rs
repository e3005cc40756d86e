mod common;
use common::{pm, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn export_projects_csv() {
    let out = temp_out("export_projects_csv", "csv");

    pm("export_projects_csv")
        .args(["export", "--what", "projects", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("3 rows written"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,name,status,priority,due_date"));
    assert!(content.contains("Website Redesign"));
    assert!(content.contains("web;design;frontend"));
}

#[test]
fn export_team_json() {
    let out = temp_out("export_team_json", "json");

    pm("export_team_json")
        .args(["export", "--what", "team", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(4));
    assert_eq!(rows[2]["name"], "Michael Lee");
    assert_eq!(rows[2]["salary"], 6500);
}

#[test]
fn export_steps_carry_their_workflow() {
    let out = temp_out("export_steps_csv", "csv");

    pm("export_steps_csv")
        .args(["export", "--what", "steps", "--file", &out])
        .assert()
        .success()
        .stdout(contains("7 rows written"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Marketing Campaign Launch"));
    assert_eq!(content.lines().count(), 8);
}

#[test]
fn export_existing_file_needs_confirmation() {
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").expect("prepare file");

    pm("export_overwrite")
        .args(["export", "--what", "tasks", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    pm("export_overwrite_force")
        .args(["export", "--what", "tasks", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("Design mockups"));
}
