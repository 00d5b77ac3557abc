use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_session, init_db, init_db_with_data, setup_test_db, sl};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    sl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    sl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}

#[test]
fn test_subject_add_list_edit() {
    let db_path = setup_test_db("subject_crud");
    init_db(&db_path);

    sl().args(["--db", &db_path, "subject", "add", "Biology", "--color", "#00AA00"])
        .assert()
        .success()
        .stdout(contains("Subject #1 'Biology' added"));

    sl().args(["--db", &db_path, "subject", "edit", "1", "--name", "Botany"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "subject", "list"])
        .assert()
        .success()
        .stdout(contains("Botany"))
        .stdout(contains("#00aa00"));
}

#[test]
fn test_subject_invalid_color_fails() {
    let db_path = setup_test_db("subject_bad_color");
    init_db(&db_path);

    sl().args(["--db", &db_path, "subject", "add", "Art", "--color", "red"])
        .assert()
        .failure()
        .stderr(contains("Invalid color"));
}

#[test]
fn test_session_list_filters_by_period() {
    let db_path = setup_test_db("session_period");
    init_db(&db_path);

    add_session(&db_path, "Math", "30", "2024-12-31");
    add_session(&db_path, "Math", "40", "2025-01-10");
    add_session(&db_path, "History", "50", "2025-05-20");

    sl().args(["--db", &db_path, "session", "list", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("2025-01-10"))
        .stdout(contains("2025-05-20"))
        .stdout(contains("2024-12-31").not());

    sl().args(["--db", &db_path, "session", "list", "--period", "2024-12:2025-01"])
        .assert()
        .success()
        .stdout(contains("2024-12-31"))
        .stdout(contains("2025-01-10"))
        .stdout(contains("2025-05-20").not());
}

#[test]
fn test_session_negative_minutes_rejected() {
    let db_path = setup_test_db("session_negative");
    init_db(&db_path);

    sl().args(["--db", &db_path, "session", "add", "Math", "-5"])
        .assert()
        .failure()
        .stderr(contains("Negative duration"));
}

#[test]
fn test_session_invalid_date_rejected() {
    let db_path = setup_test_db("session_bad_date");
    init_db(&db_path);

    sl().args([
        "--db", &db_path, "session", "add", "Math", "30", "--date", "2024/01/01",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_session_edit_and_delete() {
    let db_path = setup_test_db("session_edit_del");
    init_db(&db_path);
    add_session(&db_path, "Math", "30", "2024-03-01");

    sl().args(["--db", &db_path, "session", "edit", "1", "--minutes", "90", "--notes", "mock exam"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "session", "list"])
        .assert()
        .success()
        .stdout(contains("01h 30m"))
        .stdout(contains("mock exam"));

    // declined confirmation keeps the row
    sl().args(["--db", &db_path, "session", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    sl().args(["--db", &db_path, "session", "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Session #1 deleted"));

    sl().args(["--db", &db_path, "session", "list"])
        .assert()
        .success()
        .stdout(contains("No sessions found"));
}

#[test]
fn test_stats_json_with_reference_date() {
    let db_path = setup_test_db("stats_json");
    init_db(&db_path);
    add_session(&db_path, "Math", "30", "2024-01-01");
    add_session(&db_path, "Math", "45", "2024-01-02");

    sl().args(["--db", &db_path, "stats", "--today", "2024-01-02", "--json"])
        .assert()
        .success()
        .stdout(contains("\"totalMinutes\": 75"))
        .stdout(contains("\"bestDate\": \"2024-01-02\""))
        .stdout(contains("\"bestDateMinutes\": 45"))
        .stdout(contains("\"currentStreak\": 2"))
        .stdout(contains("\"highestStreak\": 2"));

    sl().args(["--db", &db_path, "stats", "--today", "2024-01-05", "--json"])
        .assert()
        .success()
        .stdout(contains("\"currentStreak\": 0"))
        .stdout(contains("\"highestStreak\": 2"));
}

#[test]
fn test_stats_text_on_empty_db() {
    let db_path = setup_test_db("stats_empty");
    init_db(&db_path);

    sl().args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Total time"))
        .stdout(contains("00h 00m"));
}

#[test]
fn test_task_toggle_and_progress() {
    let db_path = setup_test_db("task_progress");
    init_db(&db_path);

    sl().args(["--db", &db_path, "task", "add", "Read a chapter", "--created", "2024-01-03"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "task", "toggle", "1", "--date", "2024-01-04"])
        .assert()
        .success()
        .stdout(contains("marked as done"));

    sl().args([
        "--db", &db_path, "progress", "--tasks", "--period", "2024-01-01:2024-01-05", "--json",
    ])
    .assert()
    .success()
    .stdout(contains("\"aggregate_percentage\": 20"));

    // toggling again removes the mark
    sl().args(["--db", &db_path, "task", "toggle", "1", "--date", "2024-01-04"])
        .assert()
        .success()
        .stdout(contains("marked as not done"));

    sl().args([
        "--db", &db_path, "progress", "--tasks", "--period", "2024-01-01:2024-01-05", "--json",
    ])
    .assert()
    .success()
    .stdout(contains("\"aggregate_percentage\": 0"));
}

#[test]
fn test_progress_week_text() {
    let db_path = setup_test_db("progress_week");
    init_db(&db_path);

    sl().args(["--db", &db_path, "habit", "add", "Stretch", "--created", "2024-01-01"])
        .assert()
        .success();
    sl().args(["--db", &db_path, "habit", "toggle", "1", "--date", "2024-01-03"])
        .assert()
        .success();

    // 2024-01-03 is a Wednesday; default week starts on Sunday 2023-12-31
    sl().args(["--db", &db_path, "progress", "--habits", "--today", "2024-01-03"])
        .assert()
        .success()
        .stdout(contains("2023-12-31"))
        .stdout(contains("2024-01-06"))
        .stdout(contains("Full days"));
}

#[test]
fn test_progress_requires_target() {
    let db_path = setup_test_db("progress_target");
    init_db(&db_path);

    sl().args(["--db", &db_path, "progress", "--week"])
        .assert()
        .failure();
}

#[test]
fn test_habit_goal_validation() {
    let db_path = setup_test_db("habit_goal");
    init_db(&db_path);

    sl().args(["--db", &db_path, "habit", "add", "Piano", "--goal", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid goal"));

    sl().args(["--db", &db_path, "habit", "add", "Piano", "--goal", "45", "--emoji", "🎹"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "habit", "list"])
        .assert()
        .success()
        .stdout(contains("Piano"))
        .stdout(contains("45 min"));
}

#[test]
fn test_task_delete_with_confirmation() {
    let db_path = setup_test_db("task_delete");
    init_db(&db_path);

    sl().args(["--db", &db_path, "task", "add", "Flashcards"])
        .assert()
        .success();
    sl().args(["--db", &db_path, "task", "toggle", "1"])
        .assert()
        .success();

    sl().args(["--db", &db_path, "task", "del", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Task #1 deleted"));

    sl().args(["--db", &db_path, "task", "completions"])
        .assert()
        .success()
        .stdout(contains("No task completions found"));

    sl().args(["--db", &db_path, "task", "toggle", "1"])
        .assert()
        .failure()
        .stderr(contains("Task #1 not found"));
}

#[test]
fn test_chart_views() {
    let db_path = setup_test_db("chart_views");
    init_db_with_data(&db_path);

    sl().args(["--db", &db_path, "chart", "--view", "daily", "--today", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("Math"))
        .stdout(contains("History"));

    sl().args(["--db", &db_path, "chart", "--view", "weekly", "--today", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("01-02"));

    sl().args(["--db", &db_path, "chart", "--view", "monthly", "--today", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("Week 4"));

    sl().args(["--db", &db_path, "chart", "--view", "subjects"])
        .assert()
        .success()
        .stdout(contains("Math"));

    sl().args(["--db", &db_path, "chart", "--view", "heatmap", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("January 2024"));
}

#[test]
fn test_db_maintenance() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_data(&db_path);

    sl().args(["--db", &db_path, "db", "--migrate", "--check", "--vacuum", "--info"])
        .assert()
        .success()
        .stdout(contains("No pending migrations"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"))
        .stdout(contains("sessions"));
}

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("backup_copy");
    init_db_with_data(&db_path);

    let out = common::temp_out("backup_copy", "sqlite");

    sl().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&out).exists());

    let zip = common::temp_out("backup_zip", "zip");
    let plain = zip.replace(".zip", ".sqlite");
    std::fs::remove_file(&plain).ok();

    sl().args(["--db", &db_path, "backup", "--file", &plain, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(std::path::Path::new(&zip).exists());
    assert!(!std::path::Path::new(&plain).exists());

    sl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("backup"));
}

#[test]
fn test_huge_week_offset_fails_cleanly() {
    let db_path = setup_test_db("huge_offset");
    init_db_with_data(&db_path);

    sl().args([
        "--db", &db_path, "progress", "--tasks", "--week", "--offset", "100000000",
    ])
    .assert()
    .failure()
    .stderr(contains("out of range"))
    .stderr(contains("panicked").not());

    sl().args([
        "--db", &db_path, "chart", "--view", "weekly", "--offset", "-100000000",
    ])
    .assert()
    .failure()
    .stderr(contains("out of range"))
    .stderr(contains("panicked").not());
}

#[test]
fn test_session_longer_than_a_day_rejected() {
    let db_path = setup_test_db("session_too_long");
    init_db(&db_path);

    sl().args(["--db", &db_path, "session", "add", "Math", "1441"])
        .assert()
        .failure()
        .stderr(contains("at most 1440"));
}
