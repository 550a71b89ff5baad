//! Line-oriented daily log: one `YYYY-MM-DD,<total>,<goal>` record per day.
//!
//! Reads are lenient: blank lines, lines without exactly three fields and
//! lines whose fields do not parse are skipped. Every save rewrites the
//! whole file in ascending date order, so skipped lines disappear on the
//! next write.

use crate::errors::AppResult;
use crate::models::DailyRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_LOG_FILE: &str = "water_log.txt";

/// Today's entry as restored at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodayEntry {
    pub total_ml: u32,
    /// `None` when the stored goal is not a positive integer.
    pub goal_ml: Option<u32>,
}

impl From<&DailyRecord> for TodayEntry {
    /// A negative stored total restores as 0; a non-positive goal is dropped.
    fn from(r: &DailyRecord) -> Self {
        Self {
            total_ml: u32::try_from(r.total_ml.max(0)).unwrap_or(u32::MAX),
            goal_ml: if r.goal_ml > 0 {
                u32::try_from(r.goal_ml).ok()
            } else {
                None
            },
        }
    }
}

fn parse_line(line: &str) -> Option<DailyRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 3 {
        return None;
    }

    // Zero-padded ISO only, so a rewrite never changes how a date is spelled.
    let raw_date = parts[0].trim();
    if raw_date.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").ok()?;
    let total_ml: i64 = parts[1].trim().parse().ok()?;
    let goal_ml: i64 = parts[2].trim().parse().ok()?;

    Some(DailyRecord::new(date, total_ml, goal_ml))
}

pub struct DailyLog {
    path: PathBuf,
}

impl DailyLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty log file (and its directory) if missing.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !self.path.exists() {
            fs::File::create(&self.path)?;
        }
        Ok(())
    }

    fn read_lines(&self) -> AppResult<Vec<DailyRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let content = String::from_utf8_lossy(&bytes);
        let mut parsed = Vec::new();
        let mut skipped = 0usize;

        for line in content.lines() {
            match parse_line(line) {
                Some(p) => parsed.push(p),
                None if line.trim().is_empty() => {}
                None => skipped += 1,
            }
        }

        debug!(
            path = %self.path.display(),
            valid = parsed.len(),
            skipped,
            "daily log read"
        );

        Ok(parsed)
    }

    /// Restore the entry for `today`.
    ///
    /// Duplicate lines for the same day are applied in file order: the last
    /// total wins, and the last positive goal wins.
    pub fn load_today(&self, today: NaiveDate) -> AppResult<Option<TodayEntry>> {
        let mut entry: Option<TodayEntry> = None;

        for line in self.read_lines()?.iter().filter(|l| l.date == today) {
            let next = TodayEntry::from(line);
            let prev_goal = entry.and_then(|e| e.goal_ml);
            entry = Some(TodayEntry {
                total_ml: next.total_ml,
                goal_ml: next.goal_ml.or(prev_goal),
            });
        }

        Ok(entry)
    }

    /// Every parseable record, keyed and ordered by date. Stored values are
    /// kept as written, so a later rewrite preserves them.
    pub fn load_all(&self) -> AppResult<BTreeMap<NaiveDate, DailyRecord>> {
        let mut history = BTreeMap::new();
        for record in self.read_lines()? {
            history.insert(record.date, record);
        }
        Ok(history)
    }

    /// Overlay `(total, goal)` for `today` on the stored history and rewrite
    /// the file.
    pub fn save_today(&self, today: NaiveDate, total_ml: u32, goal_ml: u32) -> AppResult<()> {
        let mut history = self.load_all()?;
        history.insert(
            today,
            DailyRecord::new(today, i64::from(total_ml), i64::from(goal_ml)),
        );
        self.write_all(&history)
    }

    fn write_all(&self, history: &BTreeMap<NaiveDate, DailyRecord>) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = io::BufWriter::new(fs::File::create(&self.path)?);
        for record in history.values() {
            writeln!(file, "{}", record.to_line())?;
        }
        file.flush()?;

        debug!(
            path = %self.path.display(),
            records = history.len(),
            "daily log rewritten"
        );
        Ok(())
    }
}
