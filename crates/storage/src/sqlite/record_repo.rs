use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{DailyRecordRepository, StorageError};
use habit_core::model::{DailyRecord, DateKey};

use super::SqliteRepository;

#[async_trait]
impl DailyRecordRepository for SqliteRepository {
    async fn get_record(&self, key: &DateKey) -> Result<Option<DailyRecord>, StorageError> {
        let row = sqlx::query("SELECT payload FROM daily_records WHERE date_key = ?1")
            .bind(key.as_str())
            .fetch_optional(self.pool())
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let payload: String = row
            .try_get("payload")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let record: DailyRecord = serde_json::from_str(&payload)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(record))
    }

    async fn save_record(&self, key: &DateKey, record: &DailyRecord) -> Result<(), StorageError> {
        let payload = serde_json::to_string(record)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO daily_records (date_key, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(date_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key.as_str())
        .bind(payload)
        .bind(Utc::now())
        .execute(self.pool())
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
