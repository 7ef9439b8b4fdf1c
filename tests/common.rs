#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn acc() -> Command {
    cargo_bin_cmd!("acculog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_acculog.sqlite", name));
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

/// Initialize the DB schema through the CLI
pub fn init_db(db_path: &str) {
    acc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one event through the CLI
pub fn add_event(db_path: &str, date: &str, user: &str, kind: &str, time: &str) {
    acc()
        .args([
            "--db", db_path, "--test", "add", date, "--user", user, "--kind", kind, "--time", time,
        ])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests:
/// one late login and one overtime logout for EMP-001 on 2025-09-01.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_event(db_path, "2025-09-01", "EMP-001", "login", "08:15:00");
    add_event(db_path, "2025-09-01", "EMP-001", "logout", "17:45:30");
}
