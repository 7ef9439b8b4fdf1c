use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{acc, add_event, init_db, init_db_with_data, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    acc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Acculog initialization completed!"));

    // schema is present: events and log tables exist
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('events','log')",
            [],
            |row| row.get(0),
        )
        .expect("query");
    assert_eq!(count, 2);
}

#[test]
fn test_add_shows_remark_immediately() {
    let db_path = setup_test_db("add_remark");
    init_db(&db_path);

    acc()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-01",
            "--user",
            "EMP-001",
            "--kind",
            "login",
            "--time",
            "08:15:00",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded Login for EMP-001"))
        .stdout(contains("Late: 15m"));
}

#[test]
fn test_add_on_time_login() {
    let db_path = setup_test_db("add_on_time");
    init_db(&db_path);

    acc()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-01",
            "--user",
            "EMP-001",
            "--kind",
            "login",
            "--time",
            "07:55",
        ])
        .assert()
        .success()
        .stdout(contains("On Time"));
}

#[test]
fn test_add_rejects_invalid_kind() {
    let db_path = setup_test_db("add_bad_kind");
    init_db(&db_path);

    acc()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-01",
            "--user",
            "EMP-001",
            "--kind",
            "break",
            "--time",
            "08:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid event kind"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let db_path = setup_test_db("add_bad_date");
    init_db(&db_path);

    acc()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-13-01",
            "--user",
            "EMP-001",
            "--kind",
            "login",
            "--time",
            "08:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_add_rejects_out_of_range_coordinates() {
    let db_path = setup_test_db("add_bad_coords");
    init_db(&db_path);

    acc()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-01",
            "--user",
            "EMP-001",
            "--kind",
            "login",
            "--time",
            "08:00",
            "--lat",
            "123.0",
            "--lon",
            "121.0",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinates"));
}

#[test]
fn test_list_shows_remarks_for_period() {
    let db_path = setup_test_db("list_remarks");
    init_db_with_data(&db_path);

    acc()
        .args(["--db", &db_path, "--test", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("📅 Attendance events for September 2025:"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("EMP-001"))
        .stdout(contains("Late: 15m"))
        .stdout(contains("Overtime: 45m 30s"));
}

#[test]
fn test_list_filters_by_year() {
    let db_path = setup_test_db("list_year");
    init_db(&db_path);
    add_event(&db_path, "2025-01-10", "EMP-001", "login", "08:00");
    add_event(&db_path, "2024-12-31", "EMP-001", "login", "08:00");

    acc()
        .args(["--db", &db_path, "--test", "list", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("📅 Attendance events for year 2025:"))
        .stdout(contains("2025-01-10"))
        .stdout(contains("2024-12-31").not());
}

#[test]
fn test_list_filters_by_range() {
    let db_path = setup_test_db("list_range");
    init_db(&db_path);
    add_event(&db_path, "2025-08-31", "EMP-001", "login", "08:00");
    add_event(&db_path, "2025-09-15", "EMP-001", "login", "08:00");
    add_event(&db_path, "2024-09-10", "EMP-001", "login", "08:00");

    acc()
        .args([
            "--db",
            &db_path,
            "--test",
            "list",
            "--period",
            "2024-09:2025-09",
        ])
        .assert()
        .success()
        .stdout(contains("2025-08-31"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("2024-09-10"));
}

#[test]
fn test_list_filters_by_user_and_kind() {
    let db_path = setup_test_db("list_user_kind");
    init_db(&db_path);
    add_event(&db_path, "2025-09-01", "EMP-001", "login", "08:00");
    add_event(&db_path, "2025-09-01", "EMP-002", "login", "08:20");
    add_event(&db_path, "2025-09-01", "EMP-002", "logout", "17:10");

    // user filter
    acc()
        .args([
            "--db", &db_path, "--test", "list", "--period", "2025-09", "--user", "EMP-002",
        ])
        .assert()
        .success()
        .stdout(contains("EMP-002"))
        .stdout(contains("EMP-001").not());

    // kind filter, case-insensitive
    acc()
        .args([
            "--db", &db_path, "--test", "list", "--period", "2025-09", "--kind", "Logout",
        ])
        .assert()
        .success()
        .stdout(contains("17:10:00"))
        .stdout(contains("08:20:00").not());
}

#[test]
fn test_list_invalid_period() {
    let db_path = setup_test_db("list_bad_period");
    init_db(&db_path);

    acc()
        .args(["--db", &db_path, "--test", "list", "--period", "2025-9"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_list_details_shows_location() {
    let db_path = setup_test_db("list_details");
    init_db(&db_path);

    acc()
        .args([
            "--db",
            &db_path,
            "--test",
            "add",
            "2025-09-01",
            "--user",
            "EMP-001",
            "--kind",
            "login",
            "--time",
            "08:00",
            "--lat",
            "14.5995",
            "--lon",
            "120.9842",
            "--address",
            "Manila HQ",
            "--photo",
            "captures/emp-001.jpg",
        ])
        .assert()
        .success();

    acc()
        .args([
            "--db", &db_path, "--test", "list", "--period", "2025-09-01", "--details",
        ])
        .assert()
        .success()
        .stdout(contains("Manila HQ"))
        .stdout(contains("captures/emp-001.jpg"));
}

#[test]
fn test_del_whole_day_with_confirmation() {
    let db_path = setup_test_db("del_day");
    init_db_with_data(&db_path);

    acc()
        .args(["--db", &db_path, "--test", "del", "2025-09-01"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted").or(contains("deleted")));

    acc()
        .args(["--db", &db_path, "--test", "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-09-01").not());
}

#[test]
fn test_del_single_event_by_id() {
    let db_path = setup_test_db("del_by_id");
    init_db_with_data(&db_path);

    // the first inserted event gets id 1
    acc()
        .args(["--db", &db_path, "--test", "del", "2025-09-01", "--id", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted event 1"));

    acc()
        .args(["--db", &db_path, "--test", "list", "--period", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("17:45:30"))
        .stdout(contains("08:15:00").not());
}

#[test]
fn test_del_nonexistent_date() {
    let db_path = setup_test_db("del_nonexistent");
    init_db(&db_path);

    acc()
        .args(["--db", &db_path, "--test", "del", "--yes", "2099-01-01"])
        .assert()
        .failure()
        .stderr(contains("No events found for date"));
}

#[test]
fn test_audit_log_records_operations() {
    let db_path = setup_test_db("audit_log");
    init_db_with_data(&db_path);

    acc()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    acc()
        .args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total events:"))
        .stdout(contains("Employees:"));

    acc()
        .args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("backup_copy");
    init_db_with_data(&db_path);

    let dest = common::temp_out("backup_copy", "sqlite");

    acc()
        .args(["--db", &db_path, "--test", "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}
