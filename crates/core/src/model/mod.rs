mod date_key;
mod exercise;
mod goal;
mod record;

pub use date_key::{DateKey, DateKeyError};
pub use exercise::{EXERCISE_SUGGESTIONS, ExerciseDraft, ExerciseEntry, ExerciseError};
pub use goal::{
    DEFAULT_EXERCISE_GOAL, DEFAULT_SLEEP_GOAL, DEFAULT_WATER_GOAL, GoalError, Metric,
};
pub use record::DailyRecord;
