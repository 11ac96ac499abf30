use std::sync::Arc;

use habit_core::Clock;
use habit_core::model::{DailyRecord, DateKey};
use storage::repository::{DailyRecordRepository, StorageError};
use tokio::sync::Mutex;

use crate::error::RecordStoreError;

/// Owns access to the per-day records.
///
/// Every mutation goes through [`DailyRecordStore::modify`], which funnels
/// the load-mutate-save cycle of all screens through one lock so concurrent
/// edits of the same day cannot lose each other's fields.
#[derive(Clone)]
pub struct DailyRecordStore {
    clock: Clock,
    records: Arc<dyn DailyRecordRepository>,
    write_lock: Arc<Mutex<()>>,
}

impl DailyRecordStore {
    #[must_use]
    pub fn new(clock: Clock, records: Arc<dyn DailyRecordRepository>) -> Self {
        Self {
            clock,
            records,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// The date key for the current calendar day, per the injected clock.
    #[must_use]
    pub fn today_key(&self) -> DateKey {
        self.clock.today_key()
    }

    /// Load the record for a day.
    ///
    /// A day that was never saved yields the default (zeroed) record. A
    /// stored payload that fails to decode is logged and also degrades to
    /// the default record, matching the store's historical behavior of
    /// treating corruption as absence.
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError` for backend failures other than a corrupt
    /// payload.
    pub async fn load(&self, key: &DateKey) -> Result<DailyRecord, RecordStoreError> {
        match self.records.get_record(key).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Ok(DailyRecord::default()),
            Err(StorageError::Serialization(reason)) => {
                tracing::warn!(%key, %reason, "stored record is corrupt, falling back to defaults");
                Ok(DailyRecord::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Persist the full record for a day, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError` if the write fails; callers decide whether
    /// to surface a retry.
    pub async fn save(&self, key: &DateKey, record: &DailyRecord) -> Result<(), RecordStoreError> {
        self.records.save_record(key, record).await?;
        Ok(())
    }

    /// Read-modify-write a day's record under the store's write lock.
    ///
    /// The closure mutates only the fields its caller owns; the whole record
    /// is saved back, so sibling fields written by other screens survive.
    ///
    /// # Errors
    ///
    /// Returns `RecordStoreError` if the load or the save fails.
    pub async fn modify<T, F>(&self, key: &DateKey, f: F) -> Result<T, RecordStoreError>
    where
        F: FnOnce(&mut DailyRecord) -> T + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut record = self.load(key).await?;
        let out = f(&mut record);
        self.save(key, &record).await?;
        Ok(out)
    }
}
