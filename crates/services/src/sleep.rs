use std::sync::Arc;

use habit_core::MetricProgress;
use habit_core::model::Metric;

use crate::error::SleepServiceError;
use crate::record_store::DailyRecordStore;

/// Half-hour step used by the quick +/- buttons.
const HALF_HOUR: f64 = 0.5;

/// Coarse rating of last night's sleep, shown as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepQuality {
    Excellent,
    Good,
    Fair,
    Insufficient,
}

impl SleepQuality {
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        if hours >= 8.0 {
            Self::Excellent
        } else if hours >= 7.0 {
            Self::Good
        } else if hours >= 6.0 {
            Self::Fair
        } else {
            Self::Insufficient
        }
    }
}

/// Snapshot of the sleep screen's state for a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepView {
    pub hours: f64,
    pub goal: f64,
    pub progress: MetricProgress,
    pub quality: SleepQuality,
}

/// Result of a sleep update, carrying the one-time goal-reached signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepUpdate {
    pub hours: f64,
    pub goal_reached: bool,
}

/// Tracks hours slept against the daily goal. Sleep is reported, not
/// accumulated: each update overwrites the day's value.
#[derive(Clone)]
pub struct SleepService {
    store: Arc<DailyRecordStore>,
}

impl SleepService {
    #[must_use]
    pub fn new(store: Arc<DailyRecordStore>) -> Self {
        Self { store }
    }

    /// Current hours, goal, progress, and quality badge for today.
    ///
    /// # Errors
    ///
    /// Returns `SleepServiceError::Store` if the record cannot be loaded.
    pub async fn view(&self) -> Result<SleepView, SleepServiceError> {
        let record = self.store.load(&self.store.today_key()).await?;
        Ok(SleepView {
            hours: record.sleep(),
            goal: record.sleep_goal(),
            progress: MetricProgress::new(record.sleep(), record.sleep_goal()),
            quality: SleepQuality::from_hours(record.sleep()),
        })
    }

    /// Overwrite today's reported hours.
    ///
    /// # Errors
    ///
    /// Returns `SleepServiceError::InvalidHours` unless `0 <= hours <= 24`;
    /// the stored value is untouched. Returns `SleepServiceError::Store` if
    /// persistence fails.
    pub async fn set_hours(&self, hours: f64) -> Result<SleepUpdate, SleepServiceError> {
        if !hours.is_finite() || !(0.0..=24.0).contains(&hours) {
            return Err(SleepServiceError::InvalidHours);
        }
        self.apply(hours).await
    }

    /// Quick +30 minutes, capped at 24 hours.
    ///
    /// # Errors
    ///
    /// Returns `SleepServiceError::Store` if persistence fails.
    pub async fn add_half_hour(&self) -> Result<SleepUpdate, SleepServiceError> {
        self.step(HALF_HOUR).await
    }

    /// Quick -30 minutes, floored at zero.
    ///
    /// # Errors
    ///
    /// Returns `SleepServiceError::Store` if persistence fails.
    pub async fn remove_half_hour(&self) -> Result<SleepUpdate, SleepServiceError> {
        self.step(-HALF_HOUR).await
    }

    /// Set today's hours back to zero. Destructive; callers confirm first.
    ///
    /// # Errors
    ///
    /// Returns `SleepServiceError::Store` if persistence fails.
    pub async fn reset(&self) -> Result<(), SleepServiceError> {
        let today = self.store.today_key();
        self.store.modify(&today, |record| record.reset_sleep()).await?;
        Ok(())
    }

    /// Validate and persist a custom daily goal (1 to 16 hours).
    ///
    /// # Errors
    ///
    /// Returns `SleepServiceError::Goal` for an out-of-range candidate; the
    /// stored goal stays unchanged. Returns `SleepServiceError::Store` if
    /// persistence fails.
    pub async fn set_goal(&self, hours: f64) -> Result<(), SleepServiceError> {
        Metric::Sleep.validate_goal(hours)?;
        let today = self.store.today_key();
        self.store
            .modify(&today, |record| record.set_sleep_goal(hours))
            .await?;
        Ok(())
    }

    async fn apply(&self, hours: f64) -> Result<SleepUpdate, SleepServiceError> {
        self.update_hours(move |_| hours).await
    }

    /// Current hours are read inside the store's write lock so two
    /// interleaved steppers cannot base themselves on the same stale value.
    async fn step(&self, delta: f64) -> Result<SleepUpdate, SleepServiceError> {
        self.update_hours(move |current| (current + delta).clamp(0.0, 24.0))
            .await
    }

    async fn update_hours<F>(&self, next: F) -> Result<SleepUpdate, SleepServiceError>
    where
        F: FnOnce(f64) -> f64 + Send,
    {
        let today = self.store.today_key();
        let update = self
            .store
            .modify(&today, |record| {
                let previous = record.sleep();
                record.set_sleep(next(previous));
                let progress = MetricProgress::new(record.sleep(), record.sleep_goal());
                SleepUpdate {
                    hours: record.sleep(),
                    goal_reached: progress.crossed_from(previous),
                }
            })
            .await?;
        Ok(update)
    }
}
