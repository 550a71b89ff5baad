//! Read-only views computed from engine outputs.

use crate::core::progress::Progress;
use crate::core::session::Session;
use crate::models::{DailyRecord, MascotState};
use crate::utils::colors::Palette;
use crate::utils::formatting::{bar_cells, ml, pad_right};
use crate::utils::table::Table;
use chrono::NaiveDate;
use serde::Serialize;

/// Flat snapshot used by `status --json`.
#[derive(Debug, Serialize)]
pub struct StatusView {
    pub date: String,
    pub age_group: String,
    pub goal_ml: u32,
    pub total_ml: u32,
    pub remaining_ml: u32,
    pub percent: f64,
    pub display_percent: f64,
    pub mascot: MascotState,
    pub message: &'static str,
    pub goal_met: bool,
}

impl StatusView {
    pub fn new(date: NaiveDate, session: &Session) -> Self {
        let p = session.progress();
        Self {
            date: date.to_string(),
            age_group: session.age_group.label().to_string(),
            goal_ml: p.goal_ml,
            total_ml: p.total_ml,
            remaining_ml: p.remaining_ml,
            percent: p.percent,
            display_percent: p.display_percent(),
            mascot: p.mascot(),
            message: p.message(),
            goal_met: p.goal_met(),
        }
    }
}

pub fn progress_bar(progress: &Progress, palette: &Palette) -> String {
    let (filled, empty) = bar_cells(progress.bar_fraction());
    format!(
        "[{}{}] {:.1}%",
        palette.bar_fill.paint("█".repeat(filled)),
        palette.bar_empty.paint("░".repeat(empty)),
        progress.display_percent()
    )
}

pub fn render_status(date: NaiveDate, session: &Session, palette: &Palette) -> String {
    let p = session.progress();
    let mascot = p.mascot();
    let metric = |label: &str, value: u32| {
        format!(
            "  {} {}",
            pad_right(&palette.label.paint(label).to_string(), 13),
            palette.value.paint(ml(value))
        )
    };

    [
        palette
            .title
            .paint(format!("💧 WaterBuddy · {} · {}", date, session.age_group.label()))
            .to_string(),
        String::new(),
        metric("Daily Goal", p.goal_ml),
        metric("Total Drank", p.total_ml),
        metric("Remaining", p.remaining_ml),
        String::new(),
        format!("  {}", progress_bar(&p, palette)),
        String::new(),
        format!("  {} {}", mascot.emoji(), mascot.caption()),
        format!("  {}", palette.muted.paint(p.message())),
    ]
    .join("\n")
}

pub fn render_history<'a, I>(records: I, palette: &Palette) -> String
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    let mut table = Table::new(vec!["Date", "Total / Goal", "Status"]);
    for r in records {
        let status = if r.goal_met() {
            palette.met.paint("✅ Goal Met").to_string()
        } else {
            palette.not_met.paint("⚠️ Goal Not Met").to_string()
        };
        table.add_row(vec![
            r.date.to_string(),
            format!("{} / {} ml", r.total_ml, r.goal_ml),
            status,
        ]);
    }
    table.render()
}
