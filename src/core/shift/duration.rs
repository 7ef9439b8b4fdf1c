use crate::models::remark::RemarkResult;
use chrono::Duration;

/// Rendering style for remark offsets.
/// Compact drops zero-valued components ("15m"); verbose always prints all
/// three ("0h 15m 0s"), which is what the spreadsheet exports use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationStyle {
    #[default]
    Compact,
    Verbose,
}

impl DurationStyle {
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s {
            "compact" => Some(DurationStyle::Compact),
            "verbose" => Some(DurationStyle::Verbose),
            _ => None,
        }
    }
}

/// Format a duration as hours/minutes/seconds components.
/// Truncates to whole seconds; no rounding, no fractional seconds.
pub fn format_duration(d: Duration, style: DurationStyle) -> String {
    let total_seconds = d.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    match style {
        DurationStyle::Verbose => format!("{}h {}m {}s", hours, minutes, seconds),
        DurationStyle::Compact => {
            let mut parts = Vec::new();
            if hours > 0 {
                parts.push(format!("{}h", hours));
            }
            if minutes > 0 {
                parts.push(format!("{}m", minutes));
            }
            if seconds > 0 {
                parts.push(format!("{}s", seconds));
            }

            if parts.is_empty() {
                "0s".to_string()
            } else {
                parts.join(" ")
            }
        }
    }
}

/// Render a remark with its offset, e.g. "Late: 15m" or "On Time".
pub fn render_remark(res: &RemarkResult, style: DurationStyle) -> String {
    match res.offset {
        Some(offset) => format!("{}: {}", res.remark.label(), format_duration(offset, style)),
        None => res.remark.label().to_string(),
    }
}
