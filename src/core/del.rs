use crate::db::log::aclog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, load_events_by_date};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single event by id, or every event of the given date.
    /// Confirmation happens in the CLI layer; this only mutates.
    pub fn apply(pool: &mut DbPool, date: NaiveDate, id: Option<i64>) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let events = load_events_by_date(pool, &date)?;

        if events.is_empty() {
            return Err(AppError::NoEventsForDate(date_str));
        }

        if let Some(event_id) = id {
            let ev = events
                .iter()
                .find(|ev| ev.id == event_id)
                .ok_or(AppError::EventNotFound(event_id))?;

            delete_event(&pool.conn, ev.id)?;
            aclog(
                &pool.conn,
                "del",
                &ev.reference_id,
                &format!("Deleted event {} on {}", ev.id, date_str),
            )?;

            info(format!("Deleted event {} for {}", event_id, date_str));
            return Ok(());
        }

        let count = events.len();
        for ev in &events {
            delete_event(&pool.conn, ev.id)?;
        }

        aclog(
            &pool.conn,
            "del",
            &date_str,
            &format!("Deleted {} event(s)", count),
        )?;

        info(format!("Deleted {} event(s) for {}", count, date_str));
        Ok(())
    }
}
