//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data directory and
//! verify its JSON output.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_habitforge"))
        .env("HABITFORGE_DATA_DIR", data_dir)
        .env_remove("HABITFORGE_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

fn create_habit(data_dir: &Path, name: &str, days: &str) -> String {
    let habit = run_json(
        data_dir,
        &["habit", "create", name, "--days", days, "--start", "2025-04-01"],
    );
    habit["id"].as_str().unwrap().to_string()
}

#[test]
fn test_habit_create_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_habit(dir.path(), "Read", "Monday,friday");

    let list = run_json(dir.path(), &["habit", "list"]);
    let habits = list.as_array().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0]["id"], id.as_str());
    assert_eq!(habits[0]["targetDays"], serde_json::json!(["monday", "friday"]));
}

#[test]
fn test_habit_create_rejects_bad_days() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["habit", "create", "Read", "--days", "caturday"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("caturday"));
}

#[test]
fn test_mark_builds_streak_and_unlocks_badge() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_habit(dir.path(), "Run", "daily");

    for date in ["2025-04-27", "2025-04-28"] {
        run_json(
            dir.path(),
            &["mark", &id, "completed", "--date", date, "--today", "2025-04-29"],
        );
    }
    let update = run_json(
        dir.path(),
        &["mark", &id, "completed", "--today", "2025-04-29"],
    );
    assert_eq!(update["habit"]["currentStreak"], 3);
    assert_eq!(update["habit"]["longestStreak"], 3);
    assert_eq!(update["newBadges"], serde_json::json!(["getting-started"]));
}

#[test]
fn test_mark_clear_removes_entry() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_habit(dir.path(), "Run", "daily");
    run_json(dir.path(), &["mark", &id, "missed", "--date", "2025-04-28"]);
    let update = run_json(dir.path(), &["mark", &id, "clear", "--date", "2025-04-28"]);
    assert_eq!(update["habit"]["history"], serde_json::json!({}));
}

#[test]
fn test_mark_rejects_invalid_status_and_date() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_habit(dir.path(), "Run", "daily");

    let (_, stderr, code) = run_cli(dir.path(), &["mark", &id, "done"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid status"));

    let (_, stderr, code) = run_cli(dir.path(), &["mark", &id, "completed", "--date", "2025/04/29"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid date format"));
}

#[test]
fn test_other_owner_cannot_mark() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_habit(dir.path(), "Run", "daily");
    let (_, stderr, code) = run_cli(dir.path(), &["--owner", "someone-else", "mark", &id, "completed"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not owned"));
}

#[test]
fn test_habit_today_filters_by_schedule() {
    let dir = tempfile::tempdir().unwrap();
    create_habit(dir.path(), "Hike", "saturday");
    create_habit(dir.path(), "Floss", "daily");

    let saturday = run_json(dir.path(), &["habit", "today", "--date", "2025-04-26"]);
    assert_eq!(saturday.as_array().unwrap().len(), 2);
    let monday = run_json(dir.path(), &["habit", "today", "--date", "2025-04-28"]);
    assert_eq!(monday.as_array().unwrap().len(), 1);
}

#[test]
fn test_habit_delete() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_habit(dir.path(), "Run", "daily");
    let (_, _, code) = run_cli(dir.path(), &["habit", "delete", &id]);
    assert_eq!(code, 0);
    let (_, _, code) = run_cli(dir.path(), &["habit", "show", &id]);
    assert_ne!(code, 0);
}

#[test]
fn test_badge_list() {
    let dir = tempfile::tempdir().unwrap();
    let badges = run_json(dir.path(), &["badge", "list"]);
    let ids: Vec<_> = badges
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        ids,
        vec!["getting-started", "weekly-warrior", "fortnight-focus", "monthly-master"]
    );
}

#[test]
fn test_badge_eligible_lists_highest_first() {
    let dir = tempfile::tempdir().unwrap();
    let badges = run_json(dir.path(), &["badge", "eligible", "14"]);
    let ids: Vec<_> = badges
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["fortnight-focus", "weekly-warrior", "getting-started"]);

    let none = run_json(dir.path(), &["badge", "eligible", "2"]);
    assert!(none.as_array().unwrap().is_empty());
}

#[test]
fn test_heatmap_with_huge_window_covers_history() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_habit(dir.path(), "Run", "daily");
    let cells = run_json(
        dir.path(),
        &["heatmap", &id, "--days", "4294967295", "--today", "2025-04-10"],
    );
    let cells = cells.as_array().unwrap();
    assert_eq!(cells.len(), 10);
    assert_eq!(cells[0]["date"], "2025-04-01");
}

#[test]
fn test_stats_and_heatmap() {
    let dir = tempfile::tempdir().unwrap();
    let id = create_habit(dir.path(), "Run", "daily");
    run_json(dir.path(), &["mark", &id, "completed", "--date", "2025-04-28", "--today", "2025-04-29"]);
    run_json(dir.path(), &["mark", &id, "missed", "--date", "2025-04-29", "--today", "2025-04-29"]);

    let stats = run_json(dir.path(), &["stats", "--today", "2025-04-29"]);
    assert_eq!(stats["habits"][0]["completionRate"], 50.0);
    assert_eq!(stats["activityByWeekday"].as_array().unwrap().len(), 7);

    let cells = run_json(dir.path(), &["heatmap", &id, "--days", "7", "--today", "2025-04-29"]);
    let cells = cells.as_array().unwrap();
    assert_eq!(cells.len(), 7);
    assert_eq!(cells[6]["status"], "missed");
    assert_eq!(cells[6]["today"], true);
}

#[test]
fn test_config_get_set() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "owner_id"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "local");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "owner_id", "sam"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "owner_id"]);
    assert_eq!(stdout.trim(), "sam");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "theme", "dark"]);
    assert_ne!(code, 0);
}
