use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::models::geo::GeoPoint;
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params, params_from_iter};

/// Optional filters applied by `list`, `report` and `export`.
#[derive(Debug, Default, Clone)]
pub struct EventFilter {
    pub reference_id: Option<String>,
    pub department: Option<String>,
    pub kind: Option<EventKind>,
}

pub fn load_events_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<Event>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM events
         WHERE date = ?1
         ORDER BY time ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map([date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load events for an optional date range, applying the given filters.
/// `bounds = None` means the full table.
pub fn load_events_in_range(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
    filter: &EventFilter,
) -> AppResult<Vec<Event>> {
    let mut conditions: Vec<&str> = Vec::new();
    let mut args: Vec<String> = Vec::new();

    if let Some((start, end)) = bounds {
        conditions.push("date BETWEEN ? AND ?");
        args.push(start.format("%Y-%m-%d").to_string());
        args.push(end.format("%Y-%m-%d").to_string());
    }

    if let Some(reference_id) = &filter.reference_id {
        conditions.push("reference_id = ?");
        args.push(reference_id.clone());
    }

    if let Some(department) = &filter.department {
        conditions.push("department = ?");
        args.push(department.clone());
    }

    if let Some(kind) = filter.kind {
        conditions.push("kind = ?");
        args.push(kind.to_db_str().to_string());
    }

    let mut sql = String::from("SELECT * FROM events");
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY date ASC, time ASC");

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(args.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Event> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = parse_time(&time_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = EventKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidKind(kind_str.clone())),
        )
    })?;

    let latitude: Option<f64> = row.get("latitude")?;
    let longitude: Option<f64> = row.get("longitude")?;
    let address: Option<String> = row.get("address")?;

    let geo = match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon, address)),
        _ => None,
    };

    Ok(Event {
        id: row.get("id")?,
        reference_id: row.get("reference_id")?,
        department: row.get("department")?,
        date,
        time,
        kind,
        geo,
        photo: row.get("photo")?,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &Event) -> AppResult<()> {
    let (latitude, longitude, address) = match &ev.geo {
        Some(g) => (Some(g.latitude), Some(g.longitude), g.address.clone()),
        None => (None, None, None),
    };

    conn.execute(
        "INSERT INTO events (reference_id, department, date, time, kind, latitude, longitude, address, photo, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            ev.reference_id,
            ev.department,
            ev.date.format("%Y-%m-%d").to_string(),
            ev.time.format("%H:%M:%S").to_string(),
            ev.kind.to_db_str(),
            latitude,
            longitude,
            address,
            ev.photo,
            ev.source,
            ev.created_at,
        ],
    )?;
    Ok(())
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM events WHERE id = ?", [id])?;
    Ok(())
}
