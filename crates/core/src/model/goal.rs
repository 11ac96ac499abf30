use std::fmt;

use thiserror::Error;

/// Default targets used whenever a day's record carries no override.
pub const DEFAULT_WATER_GOAL: u32 = 8;
pub const DEFAULT_SLEEP_GOAL: f64 = 8.0;
pub const DEFAULT_EXERCISE_GOAL: u32 = 30;

/// The three tracked metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Water,
    Sleep,
    Exercise,
}

impl Metric {
    /// Inclusive bounds a custom goal for this metric must fall within.
    #[must_use]
    pub fn goal_range(self) -> (f64, f64) {
        match self {
            Metric::Water => (1.0, 20.0),
            Metric::Sleep => (1.0, 16.0),
            Metric::Exercise => (1.0, 300.0),
        }
    }

    /// Unit label for user-facing messages.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Water => "cups",
            Metric::Sleep => "hours",
            Metric::Exercise => "minutes",
        }
    }

    /// Validate a candidate goal value against this metric's range.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::OutOfRange` when the candidate falls outside the
    /// metric's bounds; the stored goal must then be left unchanged.
    pub fn validate_goal(self, candidate: f64) -> Result<(), GoalError> {
        let (min, max) = self.goal_range();
        if !candidate.is_finite() || candidate < min || candidate > max {
            return Err(GoalError::OutOfRange {
                metric: self,
                min,
                max,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Metric::Water => "water",
            Metric::Sleep => "sleep",
            Metric::Exercise => "exercise",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum GoalError {
    #[error("{metric} goal must be between {min} and {max} {unit}", unit = .metric.unit())]
    OutOfRange { metric: Metric, min: f64, max: f64 },
}
