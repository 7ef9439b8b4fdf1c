use crate::config::Config;
use crate::core::shift::{DurationStyle, ShiftBoundaries, classify_event, render_remark};
use crate::db::log::aclog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::models::geo::GeoPoint;
use crate::ui::messages::success;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        date: NaiveDate,
        time: NaiveTime,
        kind: EventKind,
        reference_id: String,
        department: Option<String>,
        geo: Option<GeoPoint>,
        photo: Option<String>,
    ) -> AppResult<()> {
        // ------------------------------------------------
        // Coordinates are optional, but when present they must be sane.
        // ------------------------------------------------
        if let Some(g) = &geo
            && !g.in_range()
        {
            return Err(AppError::InvalidCoordinates(format!(
                "{}, {}",
                g.latitude, g.longitude
            )));
        }

        let department = department
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| cfg.default_department.clone());

        let ev = Event::new(
            0,
            reference_id,
            department,
            date,
            time,
            kind,
            geo,
            photo,
        );

        insert_event(&pool.conn, &ev)?;

        // Show the remark right away, like the capture form does.
        let boundaries = ShiftBoundaries::from_config(cfg)?;
        let style = DurationStyle::from_config_str(&cfg.duration_style).unwrap_or_default();
        let remark = render_remark(&classify_event(&ev, &boundaries), style);

        aclog(
            &pool.conn,
            "add",
            &ev.reference_id,
            &format!("{} {} on {} {}", ev.kind.label(), remark, ev.date_str(), ev.time_str()),
        )?;

        success(format!(
            "Recorded {} for {} on {} at {} ({})",
            ev.kind.label(),
            ev.reference_id,
            ev.date_str(),
            ev.time_str(),
            remark
        ));

        Ok(())
    }
}
