//! This module provides the main entry point of the crate: a `BikeShare`
//! value owns the table source and the table cache, and answers filter and
//! snapshot requests against them.

use crate::error::BikeShareError;
use crate::snapshot::{DashboardSnapshot, FilterState};
use crate::table_data::data_loader::BikeTables;
use crate::table_data::source::{CsvSource, SourceKey, TableSource};
use crate::table_data::table_cache::TableCache;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::season::Season;
use crate::types::table_kind::TableKind;
use crate::types::traits::types::DateRange;
use bon::bon;
use chrono::NaiveDate;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

/// The dashboard's composition root.
///
/// Loading is lazy: the first call that needs the tables reads them through the
/// source and keeps them in the cache until [`BikeShare::invalidate`] is called.
/// Every filter or snapshot request reuses the cached tables.
///
/// # Examples
///
/// ```no_run
/// # use bikeshare::{BikeShare, BikeShareError, Season};
/// # use chrono::NaiveDate;
/// # fn main() -> Result<(), BikeShareError> {
/// let dashboard = BikeShare::builder()
///     .daily_path("data/day.csv".into())
///     .hourly_path("data/hour.csv".into())
///     .build();
///
/// let snapshot = dashboard
///     .snapshot()
///     .start(NaiveDate::from_ymd_opt(2012, 1, 1).unwrap())
///     .seasons(vec![Season::Summer, Season::Fall])
///     .call()?;
/// println!("{} rentals", snapshot.metrics.total_rentals);
/// # Ok(())
/// # }
/// ```
pub struct BikeShare {
    source: Box<dyn TableSource + Send + Sync>,
    cache: TableCache,
}

#[bon]
impl BikeShare {
    /// Creates a dashboard reading the two CSV files.
    ///
    /// # Arguments
    ///
    /// * `.daily_path(PathBuf)`: Optional. Defaults to `day.csv`.
    /// * `.hourly_path(PathBuf)`: Optional. Defaults to `hour.csv`.
    #[builder]
    pub fn new(daily_path: Option<PathBuf>, hourly_path: Option<PathBuf>) -> Self {
        let source = CsvSource::new(
            daily_path.unwrap_or_else(|| TableKind::Daily.default_file_name().into()),
            hourly_path.unwrap_or_else(|| TableKind::Hourly.default_file_name().into()),
        );
        Self::with_source(source)
    }

    /// Creates a dashboard over any [`TableSource`].
    pub fn with_source(source: impl TableSource + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: TableCache::new(),
        }
    }

    pub fn source_key(&self) -> SourceKey {
        self.source.key()
    }

    /// The loaded tables, read on first use.
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::Load`] if the source cannot be read or fails
    /// validation. Nothing is cached in that case.
    pub fn tables(&self) -> Result<Arc<BikeTables>, BikeShareError> {
        Ok(self.cache.get_or_load(self.source.as_ref())?)
    }

    /// Forgets the cached tables; the next request reads the source again.
    pub fn invalidate(&self) -> bool {
        self.cache.invalidate(&self.source.key())
    }

    /// Filters the daily table.
    ///
    /// # Arguments
    ///
    /// * `.start(NaiveDate)`: Optional. Defaults to the first day of the table, or
    ///   to `end` if that comes earlier.
    /// * `.end(NaiveDate)`: Optional. Defaults to the last day of the table, or to
    ///   `start` if that comes later.
    /// * `.seasons(Vec<Season>)`: Optional. Defaults to all four seasons. An empty
    ///   list selects nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BikeShareError::InvalidRange`] if `start` is after `end`, and
    /// [`BikeShareError::Load`] if the tables cannot be loaded.
    #[builder]
    pub fn filter(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        seasons: Option<Vec<Season>>,
    ) -> Result<DailyFrame, BikeShareError> {
        let tables = self.tables()?;
        let (filtered, _) = Self::apply_filter(&tables, start, end, seasons)?;
        Ok(filtered)
    }

    /// Computes every aggregate of the dashboard for one selection.
    ///
    /// Takes the same arguments, with the same defaults, as [`BikeShare::filter`].
    #[builder]
    pub fn snapshot(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        seasons: Option<Vec<Season>>,
    ) -> Result<DashboardSnapshot, BikeShareError> {
        let tables = self.tables()?;
        let (filtered, state) = Self::apply_filter(&tables, start, end, seasons)?;
        DashboardSnapshot::compute(&tables, &filtered, state)
    }

    fn apply_filter(
        tables: &BikeTables,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        seasons: Option<Vec<Season>>,
    ) -> Result<(DailyFrame, FilterState), BikeShareError> {
        let seasons = seasons.unwrap_or_else(|| Season::ALL.to_vec());
        let bounds = tables.daily.date_bounds()?;
        // A defaulted endpoint never crosses the given one.
        let (start, end) = match (start, end) {
            (None, None) => (bounds.map(|b| b.start), bounds.map(|b| b.end)),
            (Some(start), None) => (Some(start), bounds.map(|b| b.end.max(start))),
            (None, Some(end)) => (bounds.map(|b| b.start.min(end)), Some(end)),
            (start, end) => (start, end),
        };

        let range = match (start, end) {
            (Some(start), Some(end)) if start > end => {
                return Err(BikeShareError::InvalidRange { start, end })
            }
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            // Only reachable with an empty table and an open range.
            _ => None,
        };
        let filtered = match range {
            Some(range) => tables.daily.filter_by(range, &seasons)?,
            None => tables.daily.empty(),
        };
        debug!("Selection has {} day(s)", filtered.height());
        Ok((filtered, FilterState { range, seasons }))
    }
}
