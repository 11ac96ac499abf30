use std::sync::Arc;

use habit_core::MetricProgress;
use habit_core::model::{ExerciseDraft, ExerciseEntry, Metric};

use crate::error::ExerciseServiceError;
use crate::record_store::DailyRecordStore;

/// Snapshot of the exercise screen's state for a day.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseView {
    pub entries: Vec<ExerciseEntry>,
    pub total_minutes: u32,
    pub goal: u32,
    pub progress: MetricProgress,
}

/// Result of logging an exercise, carrying the one-time goal-reached signal.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseUpdate {
    pub entry: ExerciseEntry,
    pub total_minutes: u32,
    pub goal_reached: bool,
}

/// Tracks the day's logged exercises against the daily minute goal.
#[derive(Clone)]
pub struct ExerciseService {
    store: Arc<DailyRecordStore>,
}

impl ExerciseService {
    #[must_use]
    pub fn new(store: Arc<DailyRecordStore>) -> Self {
        Self { store }
    }

    /// Today's entries, their total, and progress toward the minute goal.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseServiceError::Store` if the record cannot be loaded.
    pub async fn view(&self) -> Result<ExerciseView, ExerciseServiceError> {
        let record = self.store.load(&self.store.today_key()).await?;
        let total = record.total_exercise_minutes();
        let goal = record.exercise_goal();
        Ok(ExerciseView {
            entries: record.exercises().to_vec(),
            total_minutes: total,
            goal,
            progress: MetricProgress::new(f64::from(total), f64::from(goal)),
        })
    }

    /// Validate and log a new exercise. `goal_reached` is true only when this
    /// entry pushes the day's total across the minute goal.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseServiceError::Entry` for a blank name or zero
    /// duration; nothing is persisted. Returns `ExerciseServiceError::Store`
    /// if persistence fails.
    pub async fn add(
        &self,
        name: impl Into<String>,
        duration_minutes: u32,
    ) -> Result<ExerciseUpdate, ExerciseServiceError> {
        let entry = ExerciseDraft::new(name, duration_minutes).validate(self.store.clock().now())?;
        let today = self.store.today_key();
        let update = self
            .store
            .modify(&today, move |record| {
                let previous = f64::from(record.total_exercise_minutes());
                record.add_exercise(entry.clone());
                let total = record.total_exercise_minutes();
                let progress =
                    MetricProgress::new(f64::from(total), f64::from(record.exercise_goal()));
                ExerciseUpdate {
                    entry,
                    total_minutes: total,
                    goal_reached: progress.crossed_from(previous),
                }
            })
            .await?;
        Ok(update)
    }

    /// Remove one entry by id, leaving the others in order. Returns false if
    /// no entry matched. Destructive; callers confirm first.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseServiceError::Store` if persistence fails.
    pub async fn remove(&self, id: &str) -> Result<bool, ExerciseServiceError> {
        let today = self.store.today_key();
        let removed = self
            .store
            .modify(&today, |record| record.remove_exercise(id))
            .await?;
        Ok(removed)
    }

    /// Clear today's entire entry list. Destructive; callers confirm first.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseServiceError::Store` if persistence fails.
    pub async fn reset(&self) -> Result<(), ExerciseServiceError> {
        let today = self.store.today_key();
        self.store
            .modify(&today, |record| record.reset_exercises())
            .await?;
        Ok(())
    }

    /// Validate and persist a custom daily goal (1 to 300 minutes).
    ///
    /// # Errors
    ///
    /// Returns `ExerciseServiceError::Goal` for an out-of-range candidate;
    /// the stored goal stays unchanged. Returns
    /// `ExerciseServiceError::Store` if persistence fails.
    pub async fn set_goal(&self, minutes: u32) -> Result<(), ExerciseServiceError> {
        Metric::Exercise.validate_goal(f64::from(minutes))?;
        let today = self.store.today_key();
        self.store
            .modify(&today, |record| record.set_exercise_goal(minutes))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use habit_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    fn service() -> ExerciseService {
        let store = DailyRecordStore::new(fixed_clock(), Arc::new(InMemoryRepository::new()));
        ExerciseService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn totals_sum_logged_durations() {
        let service = service();
        service.add("Running", 20).await.unwrap();
        service.add("Yoga", 15).await.unwrap();
        let update = service.add("Walking", 10).await.unwrap();
        assert_eq!(update.total_minutes, 45);

        let view = service.view().await.unwrap();
        assert_eq!(view.entries.len(), 3);
        assert_eq!(view.total_minutes, 45);
    }

    #[tokio::test]
    async fn removal_keeps_the_other_entries_in_order() {
        let service = service();
        service.add("Running", 20).await.unwrap();
        let yoga = service.add("Yoga", 15).await.unwrap();
        service.add("Walking", 10).await.unwrap();

        assert!(service.remove(yoga.entry.id()).await.unwrap());

        let view = service.view().await.unwrap();
        assert_eq!(view.total_minutes, 30);
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].name(), "Running");
        assert_eq!(view.entries[1].name(), "Walking");

        assert!(!service.remove("no-such-id").await.unwrap());
        assert_eq!(service.view().await.unwrap().entries.len(), 2);
    }

    #[tokio::test]
    async fn invalid_drafts_persist_nothing() {
        let service = service();
        assert!(service.add("   ", 20).await.is_err());
        assert!(service.add("Running", 0).await.is_err());
        assert!(service.view().await.unwrap().entries.is_empty());
    }

    #[tokio::test]
    async fn goal_crossing_fires_once() {
        let service = service();
        assert!(!service.add("Running", 20).await.unwrap().goal_reached);
        assert!(service.add("Yoga", 10).await.unwrap().goal_reached);
        assert!(!service.add("Walking", 10).await.unwrap().goal_reached);
    }

    #[tokio::test]
    async fn goal_range_is_one_to_three_hundred() {
        let service = service();
        assert!(service.set_goal(0).await.is_err());
        assert!(service.set_goal(301).await.is_err());
        service.set_goal(60).await.unwrap();
        assert_eq!(service.view().await.unwrap().goal, 60);
    }

    #[tokio::test]
    async fn reset_clears_and_persists_the_empty_list() {
        let service = service();
        service.add("Running", 20).await.unwrap();
        service.add("Yoga", 15).await.unwrap();
        service.reset().await.unwrap();

        let view = service.view().await.unwrap();
        assert!(view.entries.is_empty());
        assert_eq!(view.total_minutes, 0);
    }
}
