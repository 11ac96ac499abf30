use std::sync::Arc;

use habit_core::MetricProgress;
use habit_core::model::DateKey;

use crate::error::SummaryServiceError;
use crate::record_store::DailyRecordStore;

/// One metric's slice of the home screen: current value, effective goal,
/// and the fill fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub current: f64,
    pub goal: f64,
    pub progress: MetricProgress,
}

impl MetricSummary {
    fn new(current: f64, goal: f64) -> Self {
        Self {
            current,
            goal,
            progress: MetricProgress::new(current, goal),
        }
    }
}

/// All three metrics for one day, loaded in a single read.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: DateKey,
    pub water: MetricSummary,
    pub sleep: MetricSummary,
    pub exercise: MetricSummary,
    pub exercise_count: usize,
}

/// Read-only aggregation backing the home screen.
#[derive(Clone)]
pub struct SummaryService {
    store: Arc<DailyRecordStore>,
}

impl SummaryService {
    #[must_use]
    pub fn new(store: Arc<DailyRecordStore>) -> Self {
        Self { store }
    }

    /// Summarize today's record.
    ///
    /// # Errors
    ///
    /// Returns `SummaryServiceError::Store` if the record cannot be loaded.
    pub async fn today(&self) -> Result<DailySummary, SummaryServiceError> {
        self.for_date(self.store.today_key()).await
    }

    /// Summarize the record for an arbitrary day.
    ///
    /// # Errors
    ///
    /// Returns `SummaryServiceError::Store` if the record cannot be loaded.
    pub async fn for_date(&self, date: DateKey) -> Result<DailySummary, SummaryServiceError> {
        let record = self.store.load(&date).await?;
        let total_minutes = record.total_exercise_minutes();
        Ok(DailySummary {
            water: MetricSummary::new(
                f64::from(record.water()),
                f64::from(record.water_goal()),
            ),
            sleep: MetricSummary::new(record.sleep(), record.sleep_goal()),
            exercise: MetricSummary::new(
                f64::from(total_minutes),
                f64::from(record.exercise_goal()),
            ),
            exercise_count: record.exercises().len(),
            date,
        })
    }
}
