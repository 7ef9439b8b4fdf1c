use chrono::Duration;

/// Classification bands relative to the configured shift boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remark {
    OnTime,
    Late,
    Halfday,
    Undertime,
    Overtime,
    Invalid,
    /// Event kind was neither login nor logout. Rendered as "-".
    Unknown,
}

impl Remark {
    pub fn label(&self) -> &'static str {
        match self {
            Remark::OnTime => "On Time",
            Remark::Late => "Late",
            Remark::Halfday => "Halfday",
            Remark::Undertime => "Undertime",
            Remark::Overtime => "Overtime",
            Remark::Invalid => "Invalid (Needs Verification)",
            Remark::Unknown => "-",
        }
    }
}

/// Result of classifying a single event.
/// The offset is the magnitude of lateness/earliness where one applies;
/// OnTime, Halfday and Unknown carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemarkResult {
    pub remark: Remark,
    pub offset: Option<Duration>,
}

impl RemarkResult {
    pub fn plain(remark: Remark) -> Self {
        Self {
            remark,
            offset: None,
        }
    }

    pub fn with_offset(remark: Remark, offset: Duration) -> Self {
        Self {
            remark,
            offset: Some(offset),
        }
    }

    pub fn unknown() -> Self {
        Self::plain(Remark::Unknown)
    }
}
