use crate::cli::parser::Commands;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::models::geo::GeoPoint;
use crate::utils::date;
use crate::utils::time::parse_time;

/// Record a single attendance event.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        user,
        kind,
        time,
        dept,
        lat,
        lon,
        address,
        photo,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse capture time (mandatory)
        //
        let t = parse_time(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;

        //
        // 3. Parse kind. The CLI rejects what the classifier would
        //    only mark as "-".
        //
        let k = EventKind::from_status(kind)
            .ok_or_else(|| AppError::InvalidKind(kind.to_string()))?;

        //
        // 4. Optional geolocation (clap guarantees lat and lon together)
        //
        let geo = match (lat, lon) {
            (Some(latitude), Some(longitude)) => {
                Some(GeoPoint::new(*latitude, *longitude, address.clone()))
            }
            _ => None,
        };

        //
        // 5. Open DB and execute
        //
        let mut pool = DbPool::new(&cfg.database)?;

        AddLogic::apply(
            &mut pool,
            cfg,
            d,
            t,
            k,
            user.clone(),
            dept.clone(),
            geo,
            photo.clone(),
        )?;
    }

    Ok(())
}
