//! Progress engine: pure functions over `(goal, total)`.

use crate::errors::{AppError, AppResult};
use crate::models::{AgeGroup, MascotState};
use serde::Serialize;

/// Upper bound for the percent shown to the user.
pub const DISPLAY_PERCENT_CAP: f64 = 200.0;

/// Snapshot of today's progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub goal_ml: u32,
    pub total_ml: u32,
    pub remaining_ml: u32,
    /// Uncapped: 300 ml over a 100 ml goal is 300.0.
    pub percent: f64,
}

impl Progress {
    /// Percent clamped to `[0, DISPLAY_PERCENT_CAP]` for labels.
    pub fn display_percent(&self) -> f64 {
        self.percent.clamp(0.0, DISPLAY_PERCENT_CAP)
    }

    /// Progress bar fill in `[0, 1]`.
    pub fn bar_fraction(&self) -> f64 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }

    pub fn goal_met(&self) -> bool {
        self.total_ml >= self.goal_ml
    }

    pub fn message(&self) -> &'static str {
        motivational_message(self.percent)
    }

    pub fn mascot(&self) -> MascotState {
        mascot_state(self.percent)
    }
}

/// Compute remaining and percent. A zero goal is floored at 1 ml.
pub fn compute_progress(goal_ml: u32, total_ml: u32) -> Progress {
    let goal = goal_ml.max(1);
    Progress {
        goal_ml: goal,
        total_ml,
        remaining_ml: goal.saturating_sub(total_ml),
        percent: f64::from(total_ml) / f64::from(goal) * 100.0,
    }
}

pub fn motivational_message(percent: f64) -> &'static str {
    if percent <= 0.0 {
        "Start with one glass of water!"
    } else if percent < 50.0 {
        "Good start! Keep sipping through the day."
    } else if percent < 75.0 {
        "Nice! You're more than halfway there."
    } else if percent < 100.0 {
        "Almost there! A few more sips to reach your goal."
    } else if percent < 150.0 {
        "Goal completed! Great job staying hydrated!"
    } else {
        "Wow, you crossed your goal! Stay balanced."
    }
}

pub fn mascot_state(percent: f64) -> MascotState {
    if percent < 50.0 {
        MascotState::Neutral
    } else if percent < 75.0 {
        MascotState::Smile
    } else if percent < 100.0 {
        MascotState::Wave
    } else {
        MascotState::Celebrate
    }
}

/// Goal for the given bracket code; an unknown code keeps `prior_goal`.
pub fn recalc_goal_from_age(age_group: &str, prior_goal: u32) -> u32 {
    AgeGroup::from_code(age_group)
        .map(|g| g.default_goal_ml())
        .unwrap_or(prior_goal)
}

pub fn validate_manual_goal(text: &str) -> AppResult<u32> {
    parse_positive_ml(text).ok_or_else(|| AppError::InvalidGoal(text.to_string()))
}

pub fn validate_amount(text: &str) -> AppResult<u32> {
    parse_positive_ml(text).ok_or_else(|| AppError::InvalidAmount(text.to_string()))
}

fn parse_positive_ml(text: &str) -> Option<u32> {
    let value: i64 = text.trim().parse().ok()?;
    if value <= 0 {
        return None;
    }
    u32::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn remaining_and_percent_follow_goal_and_total() {
        for (goal, total) in [(1, 0), (2200, 0), (2200, 1250), (2200, 2200), (1200, 5000)] {
            let p = compute_progress(goal, total);
            assert_eq!(p.remaining_ml, goal.saturating_sub(total));
            assert!(approx(p.percent, total as f64 / goal as f64 * 100.0));
        }
    }

    #[test]
    fn zero_goal_is_floored_at_one() {
        let p = compute_progress(0, 3);
        assert_eq!(p.goal_ml, 1);
        assert_eq!(p.remaining_ml, 0);
        assert!(approx(p.percent, 300.0));
    }

    #[test]
    fn percent_is_uncapped_but_display_is_clamped() {
        let p = compute_progress(100, 500);
        assert!(approx(p.percent, 500.0));
        assert!(approx(p.display_percent(), DISPLAY_PERCENT_CAP));
        assert!(approx(p.bar_fraction(), 1.0));

        let half = compute_progress(200, 100);
        assert!(approx(half.bar_fraction(), 0.5));
    }

    #[test]
    fn message_thresholds_are_half_open() {
        assert_eq!(motivational_message(-1.0), "Start with one glass of water!");
        assert_eq!(motivational_message(0.0), "Start with one glass of water!");
        assert_eq!(
            motivational_message(0.1),
            "Good start! Keep sipping through the day."
        );
        assert_eq!(
            motivational_message(49.99),
            "Good start! Keep sipping through the day."
        );
        assert_eq!(
            motivational_message(50.0),
            "Nice! You're more than halfway there."
        );
        assert_eq!(
            motivational_message(75.0),
            "Almost there! A few more sips to reach your goal."
        );
        assert_eq!(
            motivational_message(100.0),
            "Goal completed! Great job staying hydrated!"
        );
        assert_eq!(
            motivational_message(149.9),
            "Goal completed! Great job staying hydrated!"
        );
        assert_eq!(
            motivational_message(150.0),
            "Wow, you crossed your goal! Stay balanced."
        );
    }

    #[test]
    fn mascot_thresholds() {
        assert_eq!(mascot_state(0.0), MascotState::Neutral);
        assert_eq!(mascot_state(49.9), MascotState::Neutral);
        assert_eq!(mascot_state(50.0), MascotState::Smile);
        assert_eq!(mascot_state(74.9), MascotState::Smile);
        assert_eq!(mascot_state(75.0), MascotState::Wave);
        assert_eq!(mascot_state(99.9), MascotState::Wave);
        assert_eq!(mascot_state(100.0), MascotState::Celebrate);
        assert_eq!(mascot_state(420.0), MascotState::Celebrate);
    }

    #[test]
    fn age_lookup_is_exact_and_unknown_keeps_goal() {
        assert_eq!(recalc_goal_from_age("child", 999), 1200);
        assert_eq!(recalc_goal_from_age("teen", 999), 1700);
        assert_eq!(recalc_goal_from_age("Adult (14-64)", 999), 2200);
        assert_eq!(recalc_goal_from_age("senior", 999), 1800);
        assert_eq!(recalc_goal_from_age("infant", 999), 999);
    }

    #[test]
    fn manual_goal_validation() {
        assert_eq!(validate_manual_goal("2000").unwrap(), 2000);
        assert_eq!(validate_manual_goal(" 1500 ").unwrap(), 1500);
        assert!(matches!(
            validate_manual_goal("-5"),
            Err(AppError::InvalidGoal(_))
        ));
        assert!(matches!(
            validate_manual_goal("abc"),
            Err(AppError::InvalidGoal(_))
        ));
        assert!(matches!(
            validate_manual_goal("0"),
            Err(AppError::InvalidGoal(_))
        ));
        assert!(matches!(
            validate_manual_goal("12.5"),
            Err(AppError::InvalidGoal(_))
        ));
    }

    #[test]
    fn amount_validation() {
        assert_eq!(validate_amount("330").unwrap(), 330);
        assert!(matches!(validate_amount("0"), Err(AppError::InvalidAmount(_))));
        assert!(matches!(
            validate_amount("lots"),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            validate_amount("99999999999"),
            Err(AppError::InvalidAmount(_))
        ));
    }

    #[test]
    fn five_quick_adds_on_adult_goal_is_a_smile() {
        let p = compute_progress(2200, 250 * 5);
        assert_eq!(p.total_ml, 1250);
        assert!((p.percent - 56.818).abs() < 0.01);
        assert_eq!(p.mascot(), MascotState::Smile);
        assert_eq!(p.message(), "Nice! You're more than halfway there.");
    }

    #[test]
    fn reaching_the_goal_celebrates() {
        let p = compute_progress(2200, 2200);
        assert!(approx(p.percent, 100.0));
        assert!(p.goal_met());
        assert_eq!(p.mascot(), MascotState::Celebrate);
        assert_eq!(p.message(), "Goal completed! Great job staying hydrated!");
    }
}
