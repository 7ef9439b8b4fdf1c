use chrono::Duration;

/// Per-employee timekeeping totals over a reporting period.
/// Built by `core::report::summarize`; durations accumulate the remark
/// offsets of the matching band.
#[derive(Debug, Clone)]
pub struct EmployeeSummary {
    pub reference_id: String,
    pub department: String,
    pub events: usize,
    pub on_time: usize,
    pub total_late: Duration,
    pub late_days: usize,
    pub total_overtime: Duration,
    pub total_undertime: Duration,
    pub halfdays: usize,
    pub invalid: usize,
    pub total_invalid: Duration,
}

impl EmployeeSummary {
    pub fn new(reference_id: String, department: String) -> Self {
        Self {
            reference_id,
            department,
            events: 0,
            on_time: 0,
            total_late: Duration::zero(),
            late_days: 0,
            total_overtime: Duration::zero(),
            total_undertime: Duration::zero(),
            halfdays: 0,
            invalid: 0,
            total_invalid: Duration::zero(),
        }
    }
}
