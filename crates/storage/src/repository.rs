use async_trait::async_trait;
use habit_core::model::{DailyRecord, DateKey};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for daily records: one whole-record value per date
/// key, replaced atomically on save.
#[async_trait]
pub trait DailyRecordRepository: Send + Sync {
    /// Fetch the record stored under a date key.
    ///
    /// Returns `Ok(None)` when no record was ever saved for that day.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if a stored payload cannot be
    /// decoded, or `StorageError::Connection` for backend failures.
    async fn get_record(&self, key: &DateKey) -> Result<Option<DailyRecord>, StorageError>;

    /// Persist the full record under a date key, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_record(&self, key: &DateKey, record: &DailyRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<HashMap<DateKey, DailyRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl DailyRecordRepository for InMemoryRepository {
    async fn get_record(&self, key: &DateKey) -> Result<Option<DailyRecord>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn save_record(&self, key: &DateKey, record: &DailyRecord) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.clone(), record.clone());
        Ok(())
    }
}

/// Aggregates the record repository behind a trait object for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub records: Arc<dyn DailyRecordRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        Self {
            records: Arc::new(repo),
        }
    }
}
