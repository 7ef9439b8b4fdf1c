//! Date utilities: period parsing for `list`, `report` and `export`.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Inclusive date bounds of the current month.
pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    let t = today();
    // the first of a valid month always exists
    let first = NaiveDate::from_ymd_opt(t.year(), t.month(), 1).unwrap();
    let last = NaiveDate::from_ymd_opt(t.year(), t.month(), month_last_day(t.year(), t.month()))
        .unwrap();
    (first, last)
}

/// Parse a period expression into inclusive date bounds.
///
/// Supported:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `A:B` where A and B share one of the formats above
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{} (start and end must share the same format)",
                p
            )));
        }

        let (s, _) = parse_single(start)?;
        let (_, e) = parse_single(end)?;

        if e < s {
            return Err(AppError::InvalidPeriod(format!("{} (end before start)", p)));
        }

        return Ok((s, e));
    }

    parse_single(p)
}

/// Parse one period token into the bounds it covers.
fn parse_single(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let last = NaiveDate::from_ymd_opt(
                first.year(),
                first.month(),
                month_last_day(first.year(), first.month()),
            )
            .ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidPeriod(p.to_string())),
    }
}

pub fn month_last_day(y: i32, m: u32) -> u32 {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

pub fn month_name(m: &str) -> &'static str {
    match m {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "Unknown",
    }
}
