//! Shared error types for the services crate.

use thiserror::Error;

use habit_core::model::{ExerciseError, GoalError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `DailyRecordStore`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordStoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `WaterService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WaterServiceError {
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

/// Errors emitted by `SleepService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SleepServiceError {
    #[error("sleep hours must be between 0 and 24")]
    InvalidHours,
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

/// Errors emitted by `ExerciseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExerciseServiceError {
    #[error(transparent)]
    Entry(#[from] ExerciseError),
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

/// Errors emitted by `SummaryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SummaryServiceError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
