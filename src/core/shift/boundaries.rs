use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::{Duration, NaiveTime};

/// Fixed shift boundary times, expressed as time-of-day and overlaid on the
/// event's calendar date at classification time.
///
/// The morning cutoff and undertime window end are derived (afternoon start
/// minus 1 ms, work end minus 1 ms) so the inclusive upper bounds of the
/// Late and Undertime windows sit just below the next band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftBoundaries {
    pub work_start: NaiveTime,
    pub afternoon_start: NaiveTime,
    pub work_end: NaiveTime,
    /// Login window treated as invalid capture (needs verification).
    /// Only present in the `strict` profile.
    pub invalid_window: Option<(NaiveTime, NaiveTime)>,
}

fn hm(h: u32, m: u32) -> NaiveTime {
    // constants only, always in range
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

impl Default for ShiftBoundaries {
    fn default() -> Self {
        Self::standard()
    }
}

impl ShiftBoundaries {
    /// Canonical rule set: 08:00 start, 13:00 afternoon, 17:00 end,
    /// no invalid window.
    pub fn standard() -> Self {
        Self {
            work_start: hm(8, 0),
            afternoon_start: hm(13, 0),
            work_end: hm(17, 0),
            invalid_window: None,
        }
    }

    /// Strict profile: same bands plus the 14:00-23:00 invalid login window.
    pub fn strict() -> Self {
        Self {
            invalid_window: Some((hm(14, 0), hm(23, 0))),
            ..Self::standard()
        }
    }

    /// End of the Late window, inclusive.
    pub fn morning_cutoff(&self) -> NaiveTime {
        self.afternoon_start - Duration::milliseconds(1)
    }

    /// End of the Undertime window, inclusive.
    pub fn undertime_window_end(&self) -> NaiveTime {
        self.work_end - Duration::milliseconds(1)
    }

    /// Build boundaries from configuration. Profile selects whether the
    /// invalid window applies; malformed times are configuration errors.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let work_start = parse_cfg_time("work_start", &cfg.work_start)?;
        let afternoon_start = parse_cfg_time("afternoon_start", &cfg.afternoon_start)?;
        let work_end = parse_cfg_time("work_end", &cfg.work_end)?;

        let invalid_window = match cfg.remark_profile.as_str() {
            "standard" => None,
            "strict" => Some(parse_window(&cfg.invalid_window)?),
            other => {
                return Err(AppError::Config(format!(
                    "Unknown remark_profile '{}' (expected 'standard' or 'strict')",
                    other
                )));
            }
        };

        Ok(Self {
            work_start,
            afternoon_start,
            work_end,
            invalid_window,
        })
    }
}

fn parse_cfg_time(key: &str, value: &str) -> AppResult<NaiveTime> {
    parse_time(value)
        .ok_or_else(|| AppError::Config(format!("Invalid time '{}' for {}", value, key)))
}

/// Parse "HH:MM-HH:MM" into an (start, end) pair.
fn parse_window(value: &str) -> AppResult<(NaiveTime, NaiveTime)> {
    let (start_raw, end_raw) = value
        .split_once('-')
        .ok_or_else(|| AppError::Config(format!("Invalid invalid_window '{}'", value)))?;

    let start = parse_cfg_time("invalid_window start", start_raw.trim())?;
    let end = parse_cfg_time("invalid_window end", end_raw.trim())?;

    if end <= start {
        return Err(AppError::Config(format!(
            "invalid_window end must be after start: '{}'",
            value
        )));
    }

    Ok((start, end))
}
