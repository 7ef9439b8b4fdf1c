use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::summarize;
use crate::core::shift::{DurationStyle, ShiftBoundaries, format_duration};
use crate::db::pool::DbPool;
use crate::db::queries::{EventFilter, load_events_in_range};
use crate::errors::AppResult;
use crate::utils::date::{current_month_bounds, parse_period};
use crate::utils::table::Table;
use chrono::{Duration, NaiveDate};

/// Per-employee timekeeping totals over a period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { period, user, dept } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let bounds = resolve_period(period)?;

        let filter = EventFilter {
            reference_id: user.clone(),
            department: dept.clone(),
            kind: None,
        };

        let events = load_events_in_range(&mut pool, bounds, &filter)?;

        if events.is_empty() {
            println!("No events for the selected period.");
            return Ok(());
        }

        let boundaries = ShiftBoundaries::from_config(cfg)?;
        let style = DurationStyle::from_config_str(&cfg.duration_style).unwrap_or_default();

        let summaries = summarize(&events, &boundaries);

        let label = period
            .clone()
            .unwrap_or_else(|| "current month".to_string());
        println!("📊 Timekeeping report ({})\n", label);

        let sep = cfg.separator_char.chars().next().unwrap_or('-');
        let mut table = Table::new(
            vec![
                "Employee",
                "Department",
                "Events",
                "On Time",
                "Late",
                "Days (Late)",
                "Overtime",
                "Undertime",
                "Halfday",
                "Invalid",
            ],
            sep,
        );

        for s in &summaries {
            table.add_row(vec![
                s.reference_id.clone(),
                s.department.clone(),
                s.events.to_string(),
                s.on_time.to_string(),
                dur_cell(s.total_late, style),
                s.late_days.to_string(),
                dur_cell(s.total_overtime, style),
                dur_cell(s.total_undertime, style),
                count_cell(s.halfdays),
                count_cell(s.invalid),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} employee(s), {} event(s).", summaries.len(), events.len());
    }
    Ok(())
}

/// "-" for zero totals, formatted duration otherwise.
fn dur_cell(d: Duration, style: DurationStyle) -> String {
    if d.is_zero() {
        "-".to_string()
    } else {
        format_duration(d, style)
    }
}

fn count_cell(n: usize) -> String {
    if n == 0 { "-".to_string() } else { n.to_string() }
}

fn resolve_period(period: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => Ok(Some(parse_period(p)?)),
        None => Ok(Some(current_month_bounds())),
    }
}
