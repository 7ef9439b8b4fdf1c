use crate::core::report::summarize;
use crate::core::shift::{DurationStyle, ShiftBoundaries, classify_event, format_duration};
use crate::models::event::Event;
use crate::models::remark::Remark;
use chrono::Duration;
use serde::Serialize;

/// Flat export row: one column per remark band, mirroring the
/// timekeeping spreadsheet layout. Offsets are always verbose
/// ("0h 15m 0s") in exports.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub date: String,
    pub time: String,
    pub employee: String,
    pub department: String,
    pub status: String,
    pub late: String,
    pub overtime: String,
    pub undertime: String,
    pub halfday: String,
    pub invalid: String,
}

/// Header row for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "time",
        "employee",
        "department",
        "status",
        "late",
        "overtime",
        "undertime",
        "halfday",
        "invalid",
    ]
}

impl EventExport {
    pub fn from_event(ev: &Event, b: &ShiftBoundaries) -> Self {
        let res = classify_event(ev, b);
        let offset = res
            .offset
            .map(|d| format_duration(d, DurationStyle::Verbose))
            .unwrap_or_default();

        let mut row = Self {
            date: ev.date_str(),
            time: ev.time_str(),
            employee: ev.reference_id.clone(),
            department: ev.department.clone(),
            status: ev.kind.label().to_string(),
            late: String::new(),
            overtime: String::new(),
            undertime: String::new(),
            halfday: String::new(),
            invalid: String::new(),
        };

        match res.remark {
            Remark::Late => row.late = offset,
            Remark::Overtime => row.overtime = offset,
            Remark::Undertime => row.undertime = offset,
            Remark::Halfday => row.halfday = "Yes".to_string(),
            Remark::Invalid => row.invalid = offset,
            Remark::OnTime | Remark::Unknown => {}
        }

        row
    }
}

pub(crate) fn event_to_row(e: &EventExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.time.clone(),
        e.employee.clone(),
        e.department.clone(),
        e.status.clone(),
        e.late.clone(),
        e.overtime.clone(),
        e.undertime.clone(),
        e.halfday.clone(),
        e.invalid.clone(),
    ]
}

/// Grand totals appended at the bottom of the XLSX sheet.
#[derive(Debug, Clone)]
pub struct ExportTotals {
    pub late: Duration,
    pub overtime: Duration,
    pub undertime: Duration,
    pub invalid: Duration,
    pub halfdays: usize,
}

impl ExportTotals {
    pub fn from_events(events: &[Event], b: &ShiftBoundaries) -> Self {
        let mut totals = Self {
            late: Duration::zero(),
            overtime: Duration::zero(),
            undertime: Duration::zero(),
            invalid: Duration::zero(),
            halfdays: 0,
        };

        for summary in summarize(events, b) {
            totals.late += summary.total_late;
            totals.overtime += summary.total_overtime;
            totals.undertime += summary.total_undertime;
            totals.invalid += summary.total_invalid;
            totals.halfdays += summary.halfdays;
        }

        totals
    }
}
