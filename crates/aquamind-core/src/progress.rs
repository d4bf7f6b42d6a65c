//! Pure derivation of progress toward the daily goal.

use serde::Serialize;

/// Derived progress values. No side effects; the `daily_goal_ml > 0`
/// invariant from the settings store guards the division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub total_intake_ml: f64,
    pub daily_goal_ml: f64,
    /// Percent of goal, unbounded above 100. Callers clamp for display.
    pub percentage: f64,
    /// Milliliters still to drink, floored at zero.
    pub remaining_ml: f64,
}

impl Progress {
    pub fn compute(total_intake_ml: f64, daily_goal_ml: f64) -> Self {
        Self {
            total_intake_ml,
            daily_goal_ml,
            percentage: total_intake_ml / daily_goal_ml * 100.0,
            remaining_ml: (daily_goal_ml - total_intake_ml).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_progress() {
        let p = Progress::compute(500.0, 2000.0);
        assert_eq!(p.percentage, 25.0);
        assert_eq!(p.remaining_ml, 1500.0);
    }

    #[test]
    fn overshoot_is_unbounded_and_remaining_floored() {
        let p = Progress::compute(2500.0, 2000.0);
        assert_eq!(p.percentage, 125.0);
        assert_eq!(p.remaining_ml, 0.0);
    }

    #[test]
    fn zero_intake() {
        let p = Progress::compute(0.0, 2450.0);
        assert_eq!(p.percentage, 0.0);
        assert_eq!(p.remaining_ml, 2450.0);
    }
}
