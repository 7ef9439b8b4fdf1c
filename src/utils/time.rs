//! Time utilities.

use chrono::NaiveTime;

/// Parse "HH:MM:SS" or "HH:MM" (seconds default to 0).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}
