#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sl() -> Command {
    cargo_bin_cmd!("studylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studylog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create the schema of a fresh test database
pub fn init_db(db_path: &str) {
    sl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one session through the CLI
pub fn add_session(db_path: &str, subject: &str, minutes: &str, date: &str) {
    sl().args([
        "--db", db_path, "session", "add", subject, minutes, "--date", date,
    ])
    .assert()
    .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    sl().args(["--db", db_path, "subject", "add", "Math", "--color", "#3366ff"])
        .assert()
        .success();
    sl().args(["--db", db_path, "subject", "add", "History"])
        .assert()
        .success();

    add_session(db_path, "Math", "30", "2024-01-01");
    add_session(db_path, "History", "45", "2024-01-02");
    add_session(db_path, "Math", "20", "2024-01-02");
}
