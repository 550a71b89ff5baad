use chrono::NaiveDate;
use serde::Serialize;

/// One persisted day: `(date, total, goal)`.
///
/// Values are kept exactly as stored, including a non-positive goal, so a
/// rewrite of the file never loses a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub total_ml: i64,
    pub goal_ml: i64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, total_ml: i64, goal_ml: i64) -> Self {
        Self {
            date,
            total_ml,
            goal_ml,
        }
    }

    /// Goal met iff total >= goal for that day. A day without a positive
    /// goal is never met.
    pub fn goal_met(&self) -> bool {
        self.goal_ml > 0 && self.total_ml >= self.goal_ml
    }

    /// Serialized line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{}",
            self.date.format("%Y-%m-%d"),
            self.total_ml,
            self.goal_ml
        )
    }
}
