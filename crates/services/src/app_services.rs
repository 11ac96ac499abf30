use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::exercise::ExerciseService;
use crate::record_store::DailyRecordStore;
use crate::sleep::SleepService;
use crate::summary::SummaryService;
use crate::water::WaterService;

/// Assembles the screen-facing services over one shared record store.
#[derive(Clone)]
pub struct AppServices {
    record_store: Arc<DailyRecordStore>,
    water: Arc<WaterService>,
    sleep: Arc<SleepService>,
    exercise: Arc<ExerciseService>,
    summary: Arc<SummaryService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(storage, clock))
    }

    /// Build services over in-memory storage, for tests and prototyping.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(Storage::in_memory(), clock)
    }

    fn from_storage(storage: Storage, clock: Clock) -> Self {
        let record_store = Arc::new(DailyRecordStore::new(clock, storage.records));
        Self {
            water: Arc::new(WaterService::new(Arc::clone(&record_store))),
            sleep: Arc::new(SleepService::new(Arc::clone(&record_store))),
            exercise: Arc::new(ExerciseService::new(Arc::clone(&record_store))),
            summary: Arc::new(SummaryService::new(Arc::clone(&record_store))),
            record_store,
        }
    }

    #[must_use]
    pub fn record_store(&self) -> Arc<DailyRecordStore> {
        Arc::clone(&self.record_store)
    }

    #[must_use]
    pub fn water(&self) -> Arc<WaterService> {
        Arc::clone(&self.water)
    }

    #[must_use]
    pub fn sleep(&self) -> Arc<SleepService> {
        Arc::clone(&self.sleep)
    }

    #[must_use]
    pub fn exercise(&self) -> Arc<ExerciseService> {
        Arc::clone(&self.exercise)
    }

    #[must_use]
    pub fn summary(&self) -> Arc<SummaryService> {
        Arc::clone(&self.summary)
    }
}
