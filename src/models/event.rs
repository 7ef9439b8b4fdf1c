use super::{event_kind::EventKind, geo::GeoPoint};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One attendance capture.
///
/// Employee data is denormalized on the row (reference id + department),
/// matching the shape of the upstream activity log feed. Events are
/// classified one by one: there is no cross-event state and no
/// login/logout pairing.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub reference_id: String, // employee reference
    pub department: String,
    pub date: NaiveDate,        // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,        // ⇔ events.time (TEXT "HH:MM:SS")
    pub kind: EventKind,        // ⇔ events.kind ('login' | 'logout')
    pub geo: Option<GeoPoint>,  // ⇔ events.latitude/longitude/address
    pub photo: Option<String>,  // ⇔ events.photo (stored path or URL)
    pub source: String,         // ⇔ events.source (TEXT, default 'cli')
    pub created_at: String,     // ⇔ events.created_at (TEXT, ISO8601)
}

impl Event {
    /// High-level constructor for events created from the CLI.
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(
        id: i64,
        reference_id: String,
        department: String,
        date: NaiveDate,
        time: NaiveTime,
        kind: EventKind,
        geo: Option<GeoPoint>,
        photo: Option<String>,
    ) -> Self {
        Self {
            id,
            reference_id,
            department,
            date,
            time,
            kind,
            geo,
            photo,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }

    /// Wall-clock instant of the capture. Time-zone naive: shift boundaries
    /// are re-anchored onto this same calendar date when classifying.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
