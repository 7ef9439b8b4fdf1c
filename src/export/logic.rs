use crate::config::Config;
use crate::core::shift::ShiftBoundaries;
use crate::db::log::aclog;
use crate::db::pool::DbPool;
use crate::db::queries::{EventFilter, load_events_in_range};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{EventExport, ExportTotals};
use crate::export::xlsx::export_xlsx;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export events with their classified remarks.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a period expression
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `A:B`)
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let events = load_events_in_range(pool, date_bounds, &EventFilter::default())?;

        if events.is_empty() {
            warning("⚠️  No events found for selected range.");
            return Ok(());
        }

        let boundaries = ShiftBoundaries::from_config(cfg)?;

        let rows: Vec<EventExport> = events
            .iter()
            .map(|ev| EventExport::from_event(ev, &boundaries))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => {
                let totals = ExportTotals::from_events(&events, &boundaries);
                export_xlsx(&rows, &totals, path)?
            }
        }

        aclog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} event(s) as {}", rows.len(), format.as_str()),
        )?;

        Ok(())
    }
}
