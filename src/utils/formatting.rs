//! Formatting helpers for CLI outputs.

use crate::models::remark::Remark;

/// Label and ANSI color for an event kind code.
/// Login renders green, logout red, mirroring the capture badges.
pub fn describe_kind(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "login" => ("Login".into(), "\x1b[32m"),
        "logout" => ("Logout".into(), "\x1b[31m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}

/// ANSI color for a remark band.
pub fn remark_color(remark: Remark) -> &'static str {
    match remark {
        Remark::OnTime => "\x1b[32m",    // green
        Remark::Late => "\x1b[33m",      // yellow
        Remark::Overtime => "\x1b[34m",  // blue
        Remark::Undertime => "\x1b[36m", // cyan
        Remark::Halfday => "\x1b[35m",   // magenta
        Remark::Invalid => "\x1b[31m",   // red
        Remark::Unknown => "\x1b[90m",   // grey
    }
}
