// src/export/model.rs

use crate::models::DailyRecord;
use serde::Serialize;

/// Flat row for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub date: String,
    pub total_ml: i64,
    pub goal_ml: i64,
    pub met: bool,
}

impl From<&DailyRecord> for RecordExport {
    fn from(r: &DailyRecord) -> Self {
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            total_ml: r.total_ml,
            goal_ml: r.goal_ml,
            met: r.goal_met(),
        }
    }
}
