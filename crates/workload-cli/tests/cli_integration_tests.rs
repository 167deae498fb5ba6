//! CLI integration tests
//!
//! Drive the built binary against a scratch database with the assistant
//! disabled.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(temp_dir: &TempDir, db: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_workload-cli");

    Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .env_remove("GROQ_API_KEY")
        .env_remove("WORKLOAD_PASSWORD")
        .args(["--no-assistant", "--db", db.to_str().unwrap()])
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("data").join("workload.db");
    (temp_dir, db_path)
}

#[test]
fn test_order_lifecycle_through_cli() {
    let (temp_dir, db) = setup();

    let out = run(
        &temp_dir,
        &db,
        &["admin", "add", "--name", "alice", "--password", "pw1", "--groups", "Veg Pizza"],
    );
    assert!(out.status.success(), "add failed: {}", stderr(&out));

    let out = run(
        &temp_dir,
        &db,
        &["order", "place", "--customer", "Carol", "--item", "Veg Pizza", "--item", "Sandwich"],
    );
    assert!(out.status.success(), "place failed: {}", stderr(&out));
    assert!(stdout(&out).contains("Order #1 placed for Carol"));

    let out = run(&temp_dir, &db, &["order", "assign", "1", "--staff", "alice"]);
    assert!(out.status.success(), "assign failed: {}", stderr(&out));

    let out = run(
        &temp_dir,
        &db,
        &["staff", "orders", "--name", "alice", "--password", "pw1"],
    );
    assert!(out.status.success(), "orders failed: {}", stderr(&out));
    assert!(stdout(&out).contains("Veg Pizza,Sandwich"));
    assert!(stdout(&out).contains("WIP"));

    let out = run(
        &temp_dir,
        &db,
        &["staff", "complete", "--name", "alice", "--password", "pw1", "1"],
    );
    assert!(out.status.success(), "complete failed: {}", stderr(&out));

    let out = run(&temp_dir, &db, &["--json", "dashboard"]);
    assert!(out.status.success(), "dashboard failed: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["summary"]["total"], 1);
    assert_eq!(value["summary"]["completed"], 1);
    assert_eq!(value["summary"]["completed_by_staff"]["alice"], 1);
    assert_eq!(value["rows"][0]["assigned_to"], "alice");
}

#[test]
fn test_wrong_password_is_rejected() {
    let (temp_dir, db) = setup();
    run(
        &temp_dir,
        &db,
        &["admin", "add", "--name", "bob", "--password", "pw2", "--groups", "Sandwich"],
    );

    let out = run(
        &temp_dir,
        &db,
        &["staff", "login", "--name", "bob", "--password", "pw2x"],
    );

    assert!(!out.status.success());
    assert!(stderr(&out).contains("ERR_UNAUTHORISED"));
}

#[test]
fn test_missing_customer_name_is_reported() {
    let (temp_dir, db) = setup();

    let out = run(
        &temp_dir,
        &db,
        &["order", "place", "--customer", " ", "--item", "Veg Pizza"],
    );

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Missing required field: customer_name"));
}

#[test]
fn test_item_off_the_menu_is_rejected() {
    let (temp_dir, db) = setup();

    let out = run(
        &temp_dir,
        &db,
        &["order", "place", "--customer", "Carol", "--item", "Coke"],
    );

    assert!(!out.status.success());
    assert!(stderr(&out).contains("not on the menu"));
    assert!(stderr(&out).contains("the Drinks group is not taking orders"));
}

#[test]
fn test_completing_someone_elses_order_is_refused() {
    let (temp_dir, db) = setup();
    for (name, pw) in [("alice", "pw1"), ("bob", "pw2")] {
        run(
            &temp_dir,
            &db,
            &["admin", "add", "--name", name, "--password", pw, "--groups", "Sandwich"],
        );
    }
    run(
        &temp_dir,
        &db,
        &["order", "place", "--customer", "Carol", "--item", "Sandwich"],
    );
    run(&temp_dir, &db, &["order", "assign", "1", "--staff", "alice"]);

    let out = run(
        &temp_dir,
        &db,
        &["staff", "complete", "--name", "bob", "--password", "pw2", "1"],
    );

    assert!(!out.status.success());
    let out = run(&temp_dir, &db, &["--json", "dashboard"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["summary"]["in_progress"], 1);
}

#[test]
fn test_assign_without_staff_needs_assistant() {
    let (temp_dir, db) = setup();
    run(
        &temp_dir,
        &db,
        &["order", "place", "--customer", "Carol", "--item", "Sandwich"],
    );

    let out = run(&temp_dir, &db, &["order", "assign", "1"]);

    assert!(!out.status.success());
    assert!(stderr(&out).contains("--staff is required"));
}

#[test]
fn test_catalog_lists_every_item() {
    let (temp_dir, db) = setup();

    let out = run(&temp_dir, &db, &["--json", "catalog"]);

    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[4]["item"], "Coke");
    assert_eq!(entries[4]["available"], false);
}

#[test]
fn test_admin_add_reports_group_suggestions_and_list_does_not() {
    let (temp_dir, db) = setup();

    let out = run(
        &temp_dir,
        &db,
        &["--json", "admin", "add", "--name", "dana", "--password", "pw4", "--groups", "Burger"],
    );
    assert!(out.status.success(), "add failed: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["name"], "dana");
    assert_eq!(value["suggested_groups"], serde_json::json!([]));

    let out = run(&temp_dir, &db, &["--json", "admin", "list"]);
    assert!(out.status.success(), "list failed: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["staff"][0]["name"], "dana");
    assert!(value.get("suggested_groups").is_none());
}
