//! Library-level tests for the shift remark classifier and the
//! duration formatting helpers.

use acculog::core::shift::{
    DurationStyle, ShiftBoundaries, classify, classify_status, format_duration, render_remark,
};
use acculog::models::event_kind::EventKind;
use acculog::models::remark::Remark;
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

// ---------------------------------------------------------------
// Login band boundaries
// ---------------------------------------------------------------

#[test]
fn login_before_work_start_is_on_time() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(7, 45, 0), EventKind::Login, &b);
    assert_eq!(res.remark, Remark::OnTime);
    assert!(res.offset.is_none());
}

#[test]
fn login_exactly_at_work_start_is_on_time() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(8, 0, 0), EventKind::Login, &b);
    assert_eq!(res.remark, Remark::OnTime);
}

#[test]
fn login_in_morning_band_is_late_with_offset() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(8, 15, 0), EventKind::Login, &b);
    assert_eq!(res.remark, Remark::Late);
    assert_eq!(res.offset, Some(Duration::minutes(15)));
}

#[test]
fn late_offset_is_timestamp_minus_work_start() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(12, 59, 59), EventKind::Login, &b);
    assert_eq!(res.remark, Remark::Late);
    assert_eq!(
        res.offset,
        Some(Duration::hours(4) + Duration::minutes(59) + Duration::seconds(59))
    );
}

#[test]
fn login_at_afternoon_start_is_halfday() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(13, 0, 0), EventKind::Login, &b);
    assert_eq!(res.remark, Remark::Halfday);
    assert!(res.offset.is_none());
}

#[test]
fn login_after_afternoon_start_is_halfday() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(13, 5, 0), EventKind::Login, &b);
    assert_eq!(res.remark, Remark::Halfday);
}

// ---------------------------------------------------------------
// Logout band boundaries
// ---------------------------------------------------------------

#[test]
fn morning_logout_is_on_time() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(12, 0, 0), EventKind::Logout, &b);
    assert_eq!(res.remark, Remark::OnTime);
}

#[test]
fn logout_in_undertime_window_has_work_end_offset() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(14, 0, 0), EventKind::Logout, &b);
    assert_eq!(res.remark, Remark::Undertime);
    assert_eq!(res.offset, Some(Duration::hours(3)));
}

#[test]
fn logout_at_sixteen_is_still_undertime() {
    // inclusive upper bound: window ends just before work end
    let b = ShiftBoundaries::standard();
    let res = classify(at(16, 0, 0), EventKind::Logout, &b);
    assert_eq!(res.remark, Remark::Undertime);
    assert_eq!(res.offset, Some(Duration::hours(1)));
}

#[test]
fn logout_one_second_before_work_end_is_undertime() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(16, 59, 59), EventKind::Logout, &b);
    assert_eq!(res.remark, Remark::Undertime);
    assert_eq!(res.offset, Some(Duration::seconds(1)));
}

#[test]
fn logout_exactly_at_work_end_is_on_time() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(17, 0, 0), EventKind::Logout, &b);
    assert_eq!(res.remark, Remark::OnTime);
    assert!(res.offset.is_none());
}

#[test]
fn logout_after_work_end_is_overtime() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(17, 45, 30), EventKind::Logout, &b);
    assert_eq!(res.remark, Remark::Overtime);
    assert_eq!(res.offset, Some(Duration::minutes(45) + Duration::seconds(30)));
}

// ---------------------------------------------------------------
// Strict profile: invalid login window
// ---------------------------------------------------------------

#[test]
fn strict_login_in_invalid_window() {
    let b = ShiftBoundaries::strict();
    let res = classify(at(14, 30, 0), EventKind::Login, &b);
    assert_eq!(res.remark, Remark::Invalid);
    assert_eq!(res.offset, Some(Duration::minutes(30)));
}

#[test]
fn standard_login_at_same_instant_is_halfday() {
    let b = ShiftBoundaries::standard();
    let res = classify(at(14, 30, 0), EventKind::Login, &b);
    assert_eq!(res.remark, Remark::Halfday);
}

#[test]
fn strict_login_after_invalid_window_falls_back_to_halfday() {
    let b = ShiftBoundaries::strict();
    let res = classify(at(23, 30, 0), EventKind::Login, &b);
    assert_eq!(res.remark, Remark::Halfday);
}

#[test]
fn strict_logout_rules_are_unchanged() {
    let b = ShiftBoundaries::strict();
    let res = classify(at(17, 45, 30), EventKind::Logout, &b);
    assert_eq!(res.remark, Remark::Overtime);
}

// ---------------------------------------------------------------
// Raw status strings / purity
// ---------------------------------------------------------------

#[test]
fn classify_status_is_case_insensitive() {
    let b = ShiftBoundaries::standard();
    let res = classify_status(at(8, 15, 0), "LogIn", &b);
    assert_eq!(res.remark, Remark::Late);
}

#[test]
fn unrecognized_status_yields_unknown_dash() {
    let b = ShiftBoundaries::standard();
    let res = classify_status(at(8, 15, 0), "break", &b);
    assert_eq!(res.remark, Remark::Unknown);
    assert!(res.offset.is_none());
    assert_eq!(res.remark.label(), "-");
}

#[test]
fn classification_is_idempotent() {
    let b = ShiftBoundaries::standard();
    let first = classify(at(8, 15, 0), EventKind::Login, &b);
    let second = classify(at(8, 15, 0), EventKind::Login, &b);
    assert_eq!(first, second);
}

#[test]
fn boundaries_anchor_to_the_event_date() {
    // same wall-clock time on different days classifies identically
    let b = ShiftBoundaries::standard();
    let d1 = NaiveDate::from_ymd_opt(2025, 1, 6)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap();
    let d2 = NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap()
        .and_hms_opt(8, 15, 0)
        .unwrap();

    let r1 = classify(d1, EventKind::Login, &b);
    let r2 = classify(d2, EventKind::Login, &b);
    assert_eq!(r1, r2);
    assert_eq!(r1.offset, Some(Duration::minutes(15)));
}

// ---------------------------------------------------------------
// Duration formatting
// ---------------------------------------------------------------

#[test]
fn verbose_format_always_prints_three_components() {
    let d = Duration::minutes(15);
    assert_eq!(format_duration(d, DurationStyle::Verbose), "0h 15m 0s");

    let d = Duration::minutes(45) + Duration::seconds(30);
    assert_eq!(format_duration(d, DurationStyle::Verbose), "0h 45m 30s");

    let d = Duration::hours(3);
    assert_eq!(format_duration(d, DurationStyle::Verbose), "3h 0m 0s");
}

#[test]
fn compact_format_drops_zero_components() {
    assert_eq!(format_duration(Duration::minutes(15), DurationStyle::Compact), "15m");
    assert_eq!(
        format_duration(Duration::hours(1) + Duration::seconds(2), DurationStyle::Compact),
        "1h 2s"
    );
    assert_eq!(format_duration(Duration::zero(), DurationStyle::Compact), "0s");
}

#[test]
fn format_truncates_to_whole_seconds() {
    let d = Duration::seconds(59) + Duration::milliseconds(900);
    assert_eq!(format_duration(d, DurationStyle::Verbose), "0h 0m 59s");
}

#[test]
fn render_remark_joins_label_and_offset() {
    let b = ShiftBoundaries::standard();

    let late = classify(at(8, 15, 0), EventKind::Login, &b);
    assert_eq!(render_remark(&late, DurationStyle::Verbose), "Late: 0h 15m 0s");
    assert_eq!(render_remark(&late, DurationStyle::Compact), "Late: 15m");

    let on_time = classify(at(7, 0, 0), EventKind::Login, &b);
    assert_eq!(render_remark(&on_time, DurationStyle::Compact), "On Time");

    let halfday = classify(at(13, 5, 0), EventKind::Login, &b);
    assert_eq!(render_remark(&halfday, DurationStyle::Compact), "Halfday");
}

#[test]
fn render_invalid_uses_verification_label() {
    let b = ShiftBoundaries::strict();
    let res = classify(at(14, 30, 0), EventKind::Login, &b);
    assert_eq!(
        render_remark(&res, DurationStyle::Verbose),
        "Invalid (Needs Verification): 0h 30m 0s"
    );
}
