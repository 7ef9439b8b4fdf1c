use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) EVENT COUNTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    let logins: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM events WHERE kind = 'login'",
        [],
        |row| row.get(0),
    )?;
    let logouts: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM events WHERE kind = 'logout'",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Total events:{} {}{}{} ({} login / {} logout)",
        CYAN, RESET, GREEN, count, RESET, logins, logouts
    );

    //
    // 3) EMPLOYEES
    //
    let employees: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT reference_id) FROM events",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Employees:{} {}{}{}",
        CYAN, RESET, GREEN, employees, RESET
    );

    //
    // 4) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM events ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM events ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 5) AUDIT LOG
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Audit entries:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
