use super::boundaries::ShiftBoundaries;
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::models::remark::{Remark, RemarkResult};
use chrono::NaiveDateTime;

/// Classify a single event instant against the shift boundaries.
///
/// Boundaries are anchored to the event's own calendar date, so each event
/// is classified in isolation. Pure and deterministic: same input, same
/// result.
pub fn classify(ts: NaiveDateTime, kind: EventKind, b: &ShiftBoundaries) -> RemarkResult {
    let day = ts.date();

    let work_start = day.and_time(b.work_start);
    let morning_cutoff = day.and_time(b.morning_cutoff());
    let afternoon_start = day.and_time(b.afternoon_start);
    let work_end = day.and_time(b.work_end);
    let undertime_end = day.and_time(b.undertime_window_end());

    match kind {
        EventKind::Login => {
            // Invalid capture window, strict profile only
            if let Some((win_start, win_end)) = b.invalid_window {
                let invalid_start = day.and_time(win_start);
                let invalid_end = day.and_time(win_end);

                if ts >= invalid_start && ts <= invalid_end {
                    return RemarkResult::with_offset(Remark::Invalid, ts - invalid_start);
                }
            }

            // Halfday if login is at the afternoon start or later
            if ts >= afternoon_start {
                return RemarkResult::plain(Remark::Halfday);
            }

            // Late only in the morning band
            if ts > work_start && ts <= morning_cutoff {
                return RemarkResult::with_offset(Remark::Late, ts - work_start);
            }

            // At or before work start
            RemarkResult::plain(Remark::OnTime)
        }
        EventKind::Logout => {
            // Undertime window: afternoon start up to just before work end
            if ts >= afternoon_start && ts <= undertime_end {
                return RemarkResult::with_offset(Remark::Undertime, work_end - ts);
            }

            if ts > work_end {
                return RemarkResult::with_offset(Remark::Overtime, ts - work_end);
            }

            // Exactly at work end, or a morning logout
            RemarkResult::plain(Remark::OnTime)
        }
    }
}

/// Classify from a raw status string. Unrecognized statuses are not an
/// error: they yield the "-" remark, keeping the classifier total over
/// whatever the feed contains.
pub fn classify_status(ts: NaiveDateTime, status: &str, b: &ShiftBoundaries) -> RemarkResult {
    match EventKind::from_status(status) {
        Some(kind) => classify(ts, kind, b),
        None => RemarkResult::unknown(),
    }
}

/// Convenience wrapper for stored events.
pub fn classify_event(ev: &Event, b: &ShiftBoundaries) -> RemarkResult {
    classify(ev.timestamp(), ev.kind, b)
}
