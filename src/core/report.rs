use crate::core::shift::{ShiftBoundaries, classify_event};
use crate::models::event::Event;
use crate::models::remark::Remark;
use crate::models::summary::EmployeeSummary;
use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashSet};

/// Aggregate classified events into per-employee timekeeping totals.
///
/// Events are grouped by reference id; remark offsets accumulate into the
/// matching duration bucket. Late days counts distinct calendar dates with
/// at least one Late login. Output is sorted by reference id.
pub fn summarize(events: &[Event], b: &ShiftBoundaries) -> Vec<EmployeeSummary> {
    struct Acc {
        summary: EmployeeSummary,
        late_dates: HashSet<NaiveDate>,
    }

    let mut by_employee: BTreeMap<String, Acc> = BTreeMap::new();

    for ev in events {
        let acc = by_employee
            .entry(ev.reference_id.clone())
            .or_insert_with(|| Acc {
                summary: EmployeeSummary::new(ev.reference_id.clone(), ev.department.clone()),
                late_dates: HashSet::new(),
            });

        let res = classify_event(ev, b);
        let offset = res.offset.unwrap_or_else(Duration::zero);

        acc.summary.events += 1;

        match res.remark {
            Remark::OnTime => acc.summary.on_time += 1,
            Remark::Late => {
                acc.summary.total_late += offset;
                acc.late_dates.insert(ev.date);
            }
            Remark::Halfday => acc.summary.halfdays += 1,
            Remark::Undertime => acc.summary.total_undertime += offset,
            Remark::Overtime => acc.summary.total_overtime += offset,
            Remark::Invalid => {
                acc.summary.invalid += 1;
                acc.summary.total_invalid += offset;
            }
            Remark::Unknown => {}
        }
    }

    by_employee
        .into_values()
        .map(|mut acc| {
            acc.summary.late_days = acc.late_dates.len();
            acc.summary
        })
        .collect()
}
