//! Goal Rows
//!
//! Progress bar models for savings goals.

use crate::state::global::Goal;
use crate::view::currency::format_inr_whole;

/// Placeholder text shown when there are no goals
pub const EMPTY_GOALS_TEXT: &str = "No active goals";

/// One rendered goal row
#[derive(Clone, Debug, PartialEq)]
pub struct GoalRow {
    pub name: String,
    /// Current vs target, e.g. `₹12,000 / ₹50,000`
    pub progress_text: String,
    /// Fill width in percent, clamped to [0, 100]
    pub fill_percent: f64,
}

/// Map goals to row models
pub fn rows(goals: &[Goal]) -> Vec<GoalRow> {
    goals
        .iter()
        .map(|goal| GoalRow {
            name: goal.name.clone(),
            progress_text: format!(
                "{} / {}",
                format_inr_whole(goal.current_amount),
                format_inr_whole(goal.target_amount)
            ),
            fill_percent: goal.percentage.clamp(0.0, 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(current: f64, target: f64, percentage: f64) -> Goal {
        Goal {
            name: "Emergency Fund".to_string(),
            current_amount: current,
            target_amount: target,
            percentage,
            deadline: None,
        }
    }

    #[test]
    fn test_fill_is_clamped_to_hundred() {
        let rows = rows(&[goal(120.0, 100.0, 120.0)]);
        assert_eq!(rows[0].fill_percent, 100.0);
    }

    #[test]
    fn test_fill_is_clamped_to_zero() {
        let rows = rows(&[goal(0.0, 100.0, -5.0)]);
        assert_eq!(rows[0].fill_percent, 0.0);
    }

    #[test]
    fn test_progress_text_uses_whole_rupees() {
        let rows = rows(&[goal(12000.0, 50000.0, 24.0)]);
        assert_eq!(rows[0].progress_text, "₹12,000 / ₹50,000");
    }
}
