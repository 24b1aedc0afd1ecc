//! End-to-end tests of the hotelcheck binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hotelcheck(workspace: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hotelcheck").unwrap();
    cmd.args(["--path", workspace.path().to_str().unwrap()]);
    cmd
}

fn init_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    hotelcheck(&dir).arg("init").assert().success();
    dir
}

#[test]
fn init_creates_workspace() {
    let dir = TempDir::new().unwrap();

    hotelcheck(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized HotelCheck"));

    assert!(dir.path().join(".hotelcheck/hotelcheck.db").exists());
    assert!(dir.path().join(".hotelcheck/config.toml").exists());

    // A second init without --force refuses to run.
    hotelcheck(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn catalog_lists_categories() {
    let dir = TempDir::new().unwrap();

    hotelcheck(&dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Front Desk and Reception"))
        .stdout(predicate::str::contains("Safety and Security Measures"));
}

#[test]
fn show_prints_item_context() {
    let dir = TempDir::new().unwrap();

    hotelcheck(&dir)
        .args(["show", "1019"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bathrooms are spotless"))
        .stdout(predicate::str::contains("Guest Rooms and Suites"));

    hotelcheck(&dir)
        .args(["show", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No checklist item with id 9999"));
}

#[test]
fn report_and_resolve_issue() {
    let dir = init_workspace();

    let output = hotelcheck(&dir)
        .args([
            "--format",
            "json",
            "report",
            "1019",
            "--title",
            "Bathroom sink leaking",
            "--severity",
            "high",
            "--reporter",
            "Housekeeping Staff",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let issue: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(issue["status"], "open");
    assert_eq!(issue["itemId"], 1019);
    assert!(issue["resolvedAt"].is_null());
    let id = issue["id"].as_str().unwrap().to_string();

    hotelcheck(&dir)
        .args(["--format", "json", "set-status", id.as_str(), "resolved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"resolved\""));

    // The resolved bucket also covers closed issues; our issue is there.
    hotelcheck(&dir)
        .args(["issues", "--group", "resolved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bathroom sink leaking"));

    hotelcheck(&dir)
        .args(["issues", "--group", "in-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn report_rejects_unknown_item() {
    let dir = init_workspace();

    hotelcheck(&dir)
        .args(["report", "9999", "--title", "Ghost issue", "--reporter", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No checklist item with id 9999"));
}

#[test]
fn report_requires_reporter() {
    let dir = init_workspace();

    hotelcheck(&dir)
        .args(["report", "1001", "--title", "Scratched counter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No reporter given"));
}

#[test]
fn set_status_unknown_id_fails_cleanly() {
    let dir = init_workspace();

    hotelcheck(&dir)
        .args(["set-status", "nonexistent-id", "closed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Issue not found"));
}

#[test]
fn stats_reports_counts() {
    let dir = init_workspace();

    hotelcheck(&dir)
        .args([
            "report",
            "1001",
            "--title",
            "Clutter behind reception desk",
            "--reporter",
            "Maria Johnson",
        ])
        .assert()
        .success();

    let output = hotelcheck(&dir)
        .args(["--format", "json", "stats"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["catalog"]["items"], 46);
    assert_eq!(stats["issues"]["total"], 1);
    assert_eq!(stats["issues"]["open"], 1);
}
