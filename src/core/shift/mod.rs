//! Shift remark classification.
//!
//! A single event (timestamp + kind) is classified against fixed shift
//! boundaries into one of the remark bands: On Time, Late, Halfday,
//! Undertime, Overtime, Invalid. Pure calendar arithmetic, no shared
//! state; boundaries are re-anchored to each event's own date, so
//! classification never depends on adjacent events.

pub mod boundaries;
pub mod classify;
pub mod duration;

pub use boundaries::ShiftBoundaries;
pub use classify::{classify, classify_event, classify_status};
pub use duration::{DurationStyle, format_duration, render_remark};
