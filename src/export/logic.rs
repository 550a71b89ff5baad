// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::store::DailyLog;
use crate::ui::messages::warning;
use crate::utils::range::parse_optional_range;
use std::path::Path;
use tracing::debug;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export stored days in ascending date order.
    ///
    /// `range` is `None`, `"all"` or any form accepted by
    /// [`crate::utils::range::parse_range`].
    pub fn export(
        log: &DailyLog,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        let bounds = parse_optional_range(range)?;

        let rows: Vec<RecordExport> = log
            .load_all()?
            .values()
            .filter(|r| bounds.is_none_or(|b| b.contains(r.date)))
            .map(RecordExport::from)
            .collect();

        if rows.is_empty() {
            warning("No records found for selected range.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        debug!(format = format.as_str(), rows = rows.len(), "exporting daily log");

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}
