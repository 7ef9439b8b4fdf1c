use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::shift::{DurationStyle, ShiftBoundaries, classify_event, render_remark};
use crate::db::pool::DbPool;
use crate::db::queries::{EventFilter, load_events_in_range};
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::utils::colors::RESET;
use crate::utils::date::{current_month_bounds, month_name, parse_period};
use crate::utils::formatting::{describe_kind, remark_color};
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        user,
        dept,
        kind,
        details,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let bounds = resolve_period(period)?;

        let filter = EventFilter {
            reference_id: user.clone(),
            department: dept.clone(),
            kind: parse_kind_filter(kind)?,
        };

        let events = load_events_in_range(&mut pool, bounds, &filter)?;

        if events.is_empty() {
            println!("No events for the selected period.");
            return Ok(());
        }

        let boundaries = ShiftBoundaries::from_config(cfg)?;
        let style = DurationStyle::from_config_str(&cfg.duration_style).unwrap_or_default();

        println!("📅 {}\n", period_heading(period));

        let sep = cfg.separator_char.chars().next().unwrap_or('-');

        let mut headers = vec!["Date", "Time", "Employee", "Department", "Kind", "Remark"];
        if *details {
            headers.push("Location");
            headers.push("Photo");
        }

        let mut table = Table::new(headers, sep);

        for ev in &events {
            let res = classify_event(ev, &boundaries);
            let (kind_label, kind_color) = describe_kind(ev.kind.to_db_str());

            let mut row = vec![
                ev.date_str(),
                ev.time_str(),
                ev.reference_id.clone(),
                ev.department.clone(),
                format!("{}{}{}", kind_color, kind_label, RESET),
                format!(
                    "{}{}{}",
                    remark_color(res.remark),
                    render_remark(&res, style),
                    RESET
                ),
            ];

            if *details {
                row.push(
                    ev.geo
                        .as_ref()
                        .map(|g| g.display())
                        .unwrap_or_else(|| "-".to_string()),
                );
                row.push(ev.photo.clone().unwrap_or_else(|| "-".to_string()));
            }

            table.add_row(row);
        }

        print!("{}", table.render());
        println!("\n{} event(s).", events.len());
    }
    Ok(())
}

/// Resolve --period into date bounds. `all` means no bounds;
/// no period means the current month.
fn resolve_period(period: &Option<String>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => Ok(Some(parse_period(p)?)),
        None => Ok(Some(current_month_bounds())),
    }
}

fn parse_kind_filter(kind: &Option<String>) -> AppResult<Option<EventKind>> {
    match kind {
        Some(k) => EventKind::from_status(k)
            .map(Some)
            .ok_or_else(|| AppError::InvalidKind(k.to_string())),
        None => Ok(None),
    }
}

/// Human heading for the selected period.
fn period_heading(period: &Option<String>) -> String {
    let Some(p) = period else {
        return "Attendance events for the current month:".to_string();
    };

    if p.eq_ignore_ascii_case("all") {
        return "All attendance events:".to_string();
    }

    if let Some((start, end)) = p.split_once(':') {
        return format!("Attendance events from {} to {}:", start, end);
    }

    match p.len() {
        // YYYY
        4 => format!("Attendance events for year {}:", p),
        // YYYY-MM
        7 => {
            let parts: Vec<&str> = p.split('-').collect();
            if parts.len() == 2 {
                format!("Attendance events for {} {}:", month_name(parts[1]), parts[0])
            } else {
                "Attendance events:".to_string()
            }
        }
        // YYYY-MM-DD
        10 => format!("Attendance events for date {}:", p),
        _ => "Attendance events:".to_string(),
    }
}
