//! Contains the `HourlyFrame` structure, the validated hourly bike-sharing table.

use crate::error::BikeShareError;
use crate::types::frames::{date_bounds, i64_values, workday_values};
use crate::types::traits::types::DateRange;
use crate::types::workday::WorkdayKind;
use polars::prelude::{DataFrame, IntoLazy, LazyFrame};

/// An hourly bike-sharing table: one row per (day, hour-of-day).
///
/// Carries the same columns as [`crate::DailyFrame`] plus `hr` (0 to 23) and
/// `weekday` (0 to 6, 0 being Sunday). The dashboard never filters this table;
/// the hourly views always describe the full period.
#[derive(Debug, Clone)]
pub struct HourlyFrame {
    frame: DataFrame,
}

impl HourlyFrame {
    pub(crate) fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn date_bounds(&self) -> Result<Option<DateRange>, BikeShareError> {
        date_bounds(&self.frame)
    }

    pub fn hours(&self) -> Result<Vec<i64>, BikeShareError> {
        i64_values(&self.frame, "hr")
    }

    pub fn weekdays(&self) -> Result<Vec<i64>, BikeShareError> {
        i64_values(&self.frame, "weekday")
    }

    pub fn workdays(&self) -> Result<Vec<WorkdayKind>, BikeShareError> {
        workday_values(&self.frame)
    }

    pub fn rentals(&self) -> Result<Vec<i64>, BikeShareError> {
        i64_values(&self.frame, "cnt")
    }
}
