#![forbid(unsafe_code)]

//! Screen-facing services for the daily habit tracker. Each service owns one
//! screen's slice of the day's record and goes through [`DailyRecordStore`]
//! for every read-modify-write.

pub mod app_services;
pub mod error;
pub mod exercise;
pub mod record_store;
pub mod sleep;
pub mod summary;
pub mod water;

pub use habit_core::Clock;

pub use app_services::AppServices;
pub use error::{
    AppServicesError, ExerciseServiceError, RecordStoreError, SleepServiceError,
    SummaryServiceError, WaterServiceError,
};
pub use exercise::{ExerciseService, ExerciseUpdate, ExerciseView};
pub use record_store::DailyRecordStore;
pub use sleep::{SleepQuality, SleepService, SleepUpdate, SleepView};
pub use summary::{DailySummary, MetricSummary, SummaryService};
pub use water::{WaterService, WaterUpdate, WaterView};
