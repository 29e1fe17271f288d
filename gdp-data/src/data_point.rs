use chrono::NaiveDate;
use gdp_utils::dates::{format_date, parse_date};
use serde::Serialize;

use crate::error::LoadError;

/// One quarter of the GDP series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    date: NaiveDate,
    value: f64,
}

impl DataPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Build a point from one `[dateString, value]` pair of the source document.
    /// The value is passed through unchanged.
    pub fn from_pair(date: &str, value: f64) -> Result<Self, LoadError> {
        let parsed = parse_date(date).map_err(|source| LoadError::Date {
            value: date.to_string(),
            source,
        })?;
        Ok(Self::new(parsed, value))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// The date as "YYYY-MM-DD".
    pub fn formatted_date(&self) -> String {
        format_date(&self.date)
    }
}
