use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Fixed suggestions the presentation layer can offer alongside freeform
/// exercise names.
pub const EXERCISE_SUGGESTIONS: &[&str] = &[
    "Running",
    "Walking",
    "Cycling",
    "Swimming",
    "Yoga",
    "Weight training",
    "Stretching",
];

/// One logged exercise for a day. Entries are immutable once created;
/// removal replaces the day's whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    id: String,
    name: String,
    duration: u32,
    time: String,
}

impl ExerciseEntry {
    /// Stable identity used for removal, derived from the creation timestamp.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration in minutes, always positive.
    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Clock time at creation (`HH:MM`), display only.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }
}

/// Unvalidated exercise input as entered on the screen.
#[derive(Debug, Clone, Default)]
pub struct ExerciseDraft {
    pub name: String,
    pub duration: u32,
}

impl ExerciseDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: u32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }

    /// Validate the draft into an entry created at `now`.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::EmptyName` if the name is blank after
    /// trimming, or `ExerciseError::InvalidDuration` if the duration is zero.
    pub fn validate(self, now: DateTime<Utc>) -> Result<ExerciseEntry, ExerciseError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ExerciseError::EmptyName);
        }
        if self.duration == 0 {
            return Err(ExerciseError::InvalidDuration);
        }
        // Timestamp prefix keeps ids debuggable; the random suffix keeps
        // them unique even under a fixed test clock.
        let id = format!("{}-{}", now.timestamp_millis(), Uuid::new_v4().simple());
        Ok(ExerciseEntry {
            id,
            name,
            duration: self.duration,
            time: now.format("%H:%M").to_string(),
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("exercise name cannot be empty")]
    EmptyName,
    #[error("exercise duration must be a positive number of minutes")]
    InvalidDuration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn validates_and_stamps_entry() {
        let entry = ExerciseDraft::new("  Running ", 25).validate(fixed_now()).unwrap();
        assert_eq!(entry.name(), "Running");
        assert_eq!(entry.duration(), 25);
        let millis = fixed_now().timestamp_millis().to_string();
        assert!(entry.id().starts_with(&format!("{millis}-")));
        assert_eq!(entry.time(), "08:30");
    }

    #[test]
    fn entries_created_at_the_same_instant_get_distinct_ids() {
        let a = ExerciseDraft::new("Running", 20).validate(fixed_now()).unwrap();
        let b = ExerciseDraft::new("Running", 20).validate(fixed_now()).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn rejects_blank_name() {
        let err = ExerciseDraft::new("   ", 20).validate(fixed_now()).unwrap_err();
        assert_eq!(err, ExerciseError::EmptyName);
    }

    #[test]
    fn rejects_zero_duration() {
        let err = ExerciseDraft::new("Yoga", 0).validate(fixed_now()).unwrap_err();
        assert_eq!(err, ExerciseError::InvalidDuration);
    }
}
