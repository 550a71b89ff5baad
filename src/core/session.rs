//! Per-run session state and its transitions.

use crate::core::progress::{self, Progress};
use crate::errors::AppResult;
use crate::models::AgeGroup;
use crate::store::TodayEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub age_group: AgeGroup,
    pub goal_ml: u32,
    pub total_ml: u32,
    pub dark_mode: bool,
}

impl Session {
    /// Fresh session: goal from the age table, nothing logged yet.
    pub fn new(age_group: AgeGroup, dark_mode: bool) -> Self {
        Self {
            age_group,
            goal_ml: age_group.default_goal_ml(),
            total_ml: 0,
            dark_mode,
        }
    }

    /// Apply today's stored entry. The total is always adopted; the goal
    /// only when one was stored.
    pub fn restore(&mut self, entry: Option<TodayEntry>) {
        if let Some(e) = entry {
            self.total_ml = e.total_ml;
            if let Some(goal) = e.goal_ml {
                self.goal_ml = goal;
            }
        }
    }

    /// Switch bracket and recompute the goal. Returns `false` and leaves the
    /// session untouched for an unknown bracket.
    pub fn set_age_group(&mut self, code: &str) -> bool {
        match AgeGroup::from_code(code) {
            Some(group) => {
                self.age_group = group;
                self.goal_ml = progress::recalc_goal_from_age(code, self.goal_ml);
                true
            }
            None => false,
        }
    }

    pub fn set_manual_goal(&mut self, text: &str) -> AppResult<u32> {
        let goal = progress::validate_manual_goal(text)?;
        self.goal_ml = goal;
        Ok(goal)
    }

    /// Quick-log path: a non-positive amount is ignored. Returns whether the
    /// total changed.
    pub fn add_water(&mut self, amount_ml: i64) -> bool {
        if amount_ml <= 0 {
            return false;
        }
        let amount = u32::try_from(amount_ml).unwrap_or(u32::MAX);
        self.total_ml = self.total_ml.saturating_add(amount);
        true
    }

    pub fn add_custom(&mut self, text: &str) -> AppResult<u32> {
        let amount = progress::validate_amount(text)?;
        self.add_water(i64::from(amount));
        Ok(amount)
    }

    pub fn reset(&mut self) {
        self.total_ml = 0;
    }

    pub fn progress(&self) -> Progress {
        progress::compute_progress(self.goal_ml, self.total_ml)
    }
}
