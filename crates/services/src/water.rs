use std::sync::Arc;

use habit_core::MetricProgress;
use habit_core::model::Metric;

use crate::error::WaterServiceError;
use crate::record_store::DailyRecordStore;

/// Snapshot of the water screen's state for a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterView {
    pub count: u32,
    pub goal: u32,
    pub progress: MetricProgress,
}

/// Result of an increment, carrying the one-time goal-reached signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterUpdate {
    pub count: u32,
    pub goal_reached: bool,
}

/// Tracks cups of water against the daily goal.
#[derive(Clone)]
pub struct WaterService {
    store: Arc<DailyRecordStore>,
}

impl WaterService {
    #[must_use]
    pub fn new(store: Arc<DailyRecordStore>) -> Self {
        Self { store }
    }

    /// Current count, goal, and progress for today.
    ///
    /// # Errors
    ///
    /// Returns `WaterServiceError::Store` if the record cannot be loaded.
    pub async fn view(&self) -> Result<WaterView, WaterServiceError> {
        let record = self.store.load(&self.store.today_key()).await?;
        Ok(WaterView {
            count: record.water(),
            goal: record.water_goal(),
            progress: MetricProgress::new(f64::from(record.water()), f64::from(record.water_goal())),
        })
    }

    /// Log one more cup. `goal_reached` is true only for the increment that
    /// crosses the goal, so the congratulation fires exactly once.
    ///
    /// # Errors
    ///
    /// Returns `WaterServiceError::Store` if persistence fails.
    pub async fn add(&self) -> Result<WaterUpdate, WaterServiceError> {
        let today = self.store.today_key();
        let update = self
            .store
            .modify(&today, |record| {
                let previous = f64::from(record.water());
                record.add_water();
                let progress = MetricProgress::new(
                    f64::from(record.water()),
                    f64::from(record.water_goal()),
                );
                WaterUpdate {
                    count: record.water(),
                    goal_reached: progress.crossed_from(previous),
                }
            })
            .await?;
        Ok(update)
    }

    /// Remove one cup; a count of zero stays at zero.
    ///
    /// # Errors
    ///
    /// Returns `WaterServiceError::Store` if persistence fails.
    pub async fn remove(&self) -> Result<u32, WaterServiceError> {
        let today = self.store.today_key();
        let count = self
            .store
            .modify(&today, |record| {
                record.remove_water();
                record.water()
            })
            .await?;
        Ok(count)
    }

    /// Set today's count back to zero. Destructive; callers confirm first.
    ///
    /// # Errors
    ///
    /// Returns `WaterServiceError::Store` if persistence fails.
    pub async fn reset(&self) -> Result<(), WaterServiceError> {
        let today = self.store.today_key();
        self.store.modify(&today, |record| record.reset_water()).await?;
        Ok(())
    }

    /// Validate and persist a custom daily goal (1 to 20 cups).
    ///
    /// # Errors
    ///
    /// Returns `WaterServiceError::Goal` for an out-of-range candidate; the
    /// stored goal stays unchanged. Returns `WaterServiceError::Store` if
    /// persistence fails.
    pub async fn set_goal(&self, cups: u32) -> Result<(), WaterServiceError> {
        Metric::Water.validate_goal(f64::from(cups))?;
        let today = self.store.today_key();
        self.store
            .modify(&today, |record| record.set_water_goal(cups))
            .await?;
        Ok(())
    }
}
