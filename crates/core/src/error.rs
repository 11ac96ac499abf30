use thiserror::Error;

use crate::model::{DateKeyError, ExerciseError, GoalError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    DateKey(#[from] DateKeyError),
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    Goal(#[from] GoalError),
}
