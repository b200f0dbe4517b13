// daily_frame.rs

//! Contains the `DailyFrame` structure, the validated daily bike-sharing table
//! and every filtered subset of it.

use crate::error::BikeShareError;
use crate::filtering::{resolve_range, BikeFrameFilterExt};
use crate::types::frames::{
    date_bounds, date_values, f64_values, i64_values, season_values, workday_values,
};
use crate::types::season::Season;
use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::types::DateRange;
use crate::types::workday::WorkdayKind;
use chrono::NaiveDate;
use log::debug;
use polars::prelude::{DataFrame, Expr, IntoLazy, LazyFrame};
use std::collections::BTreeSet;

/// A daily bike-sharing table: one row per calendar day.
///
/// The wrapped `DataFrame` always carries a `Date`-typed `dteday` column, the
/// integer columns `season`, `yr`, `mnth`, `workingday` and `cnt`, the float
/// covariates `temp`, `hum` and `windspeed`, and the derived `season_name`
/// column. Instances come out of the loader already validated, and every
/// filter returns a new `DailyFrame` holding a row subset with the same columns.
///
/// Cloning is cheap; polars shares the column buffers.
#[derive(Debug, Clone)]
pub struct DailyFrame {
    frame: DataFrame,
}

impl DailyFrame {
    pub(crate) fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    /// The underlying polars `DataFrame`.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// A lazy view over the table, for custom polars queries.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    /// Number of days in the table.
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Filters the table with an arbitrary polars predicate.
    ///
    /// Row order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::Polars`] if the predicate cannot be evaluated.
    pub fn filter(&self, predicate: Expr) -> Result<DailyFrame, BikeShareError> {
        Ok(DailyFrame::new(self.lazy().filter(predicate).collect()?))
    }

    /// Keeps the days that fall inside `range` and belong to one of `seasons`.
    ///
    /// This is the dashboard's filter: a row survives iff `range.start <= dteday
    /// <= range.end` and its season is in `seasons`. The result preserves the
    /// original row order and columns. An empty `seasons` slice, or a range that
    /// does not overlap the table, yields an empty table rather than an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use bikeshare::{BikeShare, BikeShareError, DateRange, Season};
    /// # use chrono::NaiveDate;
    /// # fn main() -> Result<(), BikeShareError> {
    /// let dashboard = BikeShare::builder().build();
    /// let tables = dashboard.tables()?;
    ///
    /// let range = DateRange {
    ///     start: NaiveDate::from_ymd_opt(2011, 6, 1).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2011, 8, 31).unwrap(),
    /// };
    /// let selected = tables.daily.filter_by(range, &[Season::Summer, Season::Fall])?;
    /// println!("{} days selected", selected.height());
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter_by(
        &self,
        range: DateRange,
        seasons: &[Season],
    ) -> Result<DailyFrame, BikeShareError> {
        let frame = self
            .lazy()
            .filter_date_range(range)
            .filter_seasons(seasons)
            .collect()?;
        debug!(
            "Filter {} with {} season(s) kept {} of {} days",
            range,
            seasons.len(),
            frame.height(),
            self.height()
        );
        Ok(DailyFrame::new(frame))
    }

    /// Same as [`DailyFrame::filter_by`], with endpoints given as anything
    /// implementing [`AnyDate`] (dates, `"YYYY-MM-DD"` strings, `Year`, `Month`).
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::DateParsing`] if an endpoint cannot be resolved
    /// and [`BikeShareError::InvalidRange`] if `start` resolves after `end`.
    pub fn get_range(
        &self,
        start: impl AnyDate,
        end: impl AnyDate,
        seasons: &[Season],
    ) -> Result<DailyFrame, BikeShareError> {
        self.filter_by(resolve_range(start, end)?, seasons)
    }

    /// An empty table with the same columns.
    pub fn empty(&self) -> DailyFrame {
        DailyFrame::new(self.frame.clear())
    }

    /// First and last `dteday`, or `None` for an empty table.
    pub fn date_bounds(&self) -> Result<Option<DateRange>, BikeShareError> {
        date_bounds(&self.frame)
    }

    /// Distinct seasons present in the table, sorted by name.
    pub fn available_seasons(&self) -> Result<Vec<Season>, BikeShareError> {
        let mut seasons: Vec<Season> = season_values(&self.frame)?
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        seasons.sort_by_key(|season| season.name());
        Ok(seasons)
    }

    pub fn dates(&self) -> Result<Vec<NaiveDate>, BikeShareError> {
        date_values(&self.frame, "dteday")
    }

    pub fn seasons(&self) -> Result<Vec<Season>, BikeShareError> {
        season_values(&self.frame)
    }

    pub fn workdays(&self) -> Result<Vec<WorkdayKind>, BikeShareError> {
        workday_values(&self.frame)
    }

    /// The `cnt` column.
    pub fn rentals(&self) -> Result<Vec<i64>, BikeShareError> {
        i64_values(&self.frame, "cnt")
    }

    /// A float covariate column such as `temp`, `hum` or `windspeed`.
    pub fn covariate(&self, column: &str) -> Result<Vec<f64>, BikeShareError> {
        f64_values(&self.frame, column)
    }
}
