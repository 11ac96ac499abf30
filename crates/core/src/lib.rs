#![forbid(unsafe_code)]

//! Domain types for the daily habit tracker: the per-day record, exercise
//! entries, goal defaults and validation, progress computation, and an
//! injectable clock.

pub mod error;
pub mod model;
pub mod progress;
pub mod time;

pub use error::Error;
pub use progress::MetricProgress;
pub use time::Clock;
