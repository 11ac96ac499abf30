use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validated `YYYY-MM-DD` key identifying one day's record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Builds the key for a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// Parses and validates a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DateKeyError::InvalidFormat` if the string is not a valid
    /// calendar date in exactly that form (zero-padded, four-digit year).
    pub fn parse(value: &str) -> Result<Self, DateKeyError> {
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| DateKeyError::InvalidFormat(value.to_string()))?;
        let key = Self::from_date(date);
        // chrono accepts non-padded components; only the canonical
        // rendering is a valid key.
        if key.0 != value {
            return Err(DateKeyError::InvalidFormat(value.to_string()));
        }
        Ok(key)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the calendar date the key names.
    ///
    /// # Panics
    ///
    /// Never panics: keys are only constructed from valid dates.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").expect("key holds a valid date")
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateKeyError {
    #[error("not a YYYY-MM-DD date: {0:?}")]
    InvalidFormat(String),
}
