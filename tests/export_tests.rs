use predicates::str::contains;
use std::fs;

mod common;
use common::{acc, add_event, init_db, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_contains_remark_columns() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");

    acc()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");

    // header from serde field names
    assert!(content.starts_with(
        "date,time,employee,department,status,late,overtime,undertime,halfday,invalid"
    ));

    // offsets are verbose in exports
    assert!(content.contains("2025-09-01,08:15:00,EMP-001"));
    assert!(content.contains("0h 15m 0s"));
    assert!(content.contains("0h 45m 30s"));
}

#[test]
fn test_export_json_is_valid_and_complete() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    acc()
        .args([
            "--db", &db_path, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let rows = parsed.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["employee"], "EMP-001");
    assert_eq!(rows[0]["late"], "0h 15m 0s");
    assert_eq!(rows[1]["overtime"], "0h 45m 30s");
    assert_eq!(rows[1]["status"], "Logout");
}

#[test]
fn test_export_xlsx_creates_file() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    acc()
        .args([
            "--db", &db_path, "--test", "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_respects_range_filter() {
    let db_path = setup_test_db("export_range");
    init_db(&db_path);
    add_event(&db_path, "2025-09-01", "EMP-001", "login", "08:00");
    add_event(&db_path, "2025-10-01", "EMP-001", "login", "08:00");

    let out = temp_out("export_range", "csv");

    acc()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--range",
            "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("2025-09-01"));
    assert!(!content.contains("2025-10-01"));
}

#[test]
fn test_export_empty_range_warns() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    acc()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--range",
            "2030-01",
        ])
        .assert()
        .success()
        .stdout(contains("No events found for selected range."));
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    acc()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed file");

    acc()
        .args([
            "--db", &db_path, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("EMP-001"));
}
