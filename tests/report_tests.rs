use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{acc, add_event, init_db, setup_test_db};

#[test]
fn test_report_totals_per_employee() {
    let db_path = setup_test_db("report_totals");
    init_db(&db_path);

    // EMP-001: late twice on distinct days, one overtime logout
    add_event(&db_path, "2025-09-01", "EMP-001", "login", "08:15:00");
    add_event(&db_path, "2025-09-01", "EMP-001", "logout", "17:45:30");
    add_event(&db_path, "2025-09-02", "EMP-001", "login", "08:10:00");

    // EMP-002: on time, then an undertime logout
    add_event(&db_path, "2025-09-01", "EMP-002", "login", "07:58:00");
    add_event(&db_path, "2025-09-01", "EMP-002", "logout", "16:00:00");

    acc()
        .args(["--db", &db_path, "--test", "report", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Timekeeping report"))
        .stdout(contains("EMP-001"))
        .stdout(contains("EMP-002"))
        // 15m + 10m of lateness over two distinct days
        .stdout(contains("25m"))
        .stdout(contains("45m 30s"))
        // EMP-002 left one hour early
        .stdout(contains("1h"));
}

#[test]
fn test_report_counts_late_days_not_late_events() {
    let db_path = setup_test_db("report_late_days");
    init_db(&db_path);

    // two late logins on the SAME day → one late day
    add_event(&db_path, "2025-09-01", "EMP-001", "login", "08:05:00");
    add_event(&db_path, "2025-09-01", "EMP-001", "login", "09:00:00");

    acc()
        .args(["--db", &db_path, "--test", "report", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Days (Late)"))
        // 2 events, 1 late day
        .stdout(contains("  1  "));
}

#[test]
fn test_report_filters_by_user() {
    let db_path = setup_test_db("report_filter_user");
    init_db(&db_path);

    add_event(&db_path, "2025-09-01", "EMP-001", "login", "08:15:00");
    add_event(&db_path, "2025-09-01", "EMP-002", "login", "08:30:00");

    acc()
        .args([
            "--db", &db_path, "--test", "report", "--period", "2025-09", "--user", "EMP-001",
        ])
        .assert()
        .success()
        .stdout(contains("EMP-001"))
        .stdout(contains("EMP-002").not());
}

#[test]
fn test_report_halfday_count() {
    let db_path = setup_test_db("report_halfday");
    init_db(&db_path);

    add_event(&db_path, "2025-09-01", "EMP-001", "login", "13:05:00");
    add_event(&db_path, "2025-09-02", "EMP-001", "login", "14:30:00");

    acc()
        .args(["--db", &db_path, "--test", "report", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Halfday"))
        .stdout(contains("2"));
}

#[test]
fn test_report_empty_period() {
    let db_path = setup_test_db("report_empty");
    init_db(&db_path);

    acc()
        .args(["--db", &db_path, "--test", "report", "--period", "2030-01"])
        .assert()
        .success()
        .stdout(contains("No events for the selected period."));
}
