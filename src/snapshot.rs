//! Every aggregate of the dashboard for one filter selection.

use crate::aggregation::correlation::{covariate_correlation, CorrelationMatrix};
use crate::aggregation::distribution::{
    season_distribution, workday_distribution, SeasonDistribution, WorkdayDistribution,
};
use crate::aggregation::hourly::{
    hour_weekday_heatmap, hourly_average, hourly_workday_average, HourWeekdayHeatmap,
    HourlyAverage, HourlyWorkdayAverage,
};
use crate::aggregation::monthly::{
    monthly_average, monthly_performance, MonthlyAverage, MonthlyPerformance,
};
use crate::aggregation::summary::{summary_metrics, SummaryMetrics};
use crate::aggregation::trend::{rental_trend, temperature_scatter, ScatterPoint, TrendPoint};
use crate::error::BikeShareError;
use crate::table_data::data_loader::BikeTables;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::season::Season;
use crate::types::traits::types::DateRange;
use serde::Serialize;

/// The filter a snapshot was computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    /// `None` only when the daily table is empty and no range was given.
    pub range: Option<DateRange>,
    pub seasons: Vec<Season>,
}

/// Metrics and per-view aggregates for one filter selection.
///
/// Daily aggregates describe the filtered days. The hourly aggregates always
/// describe the full hourly table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub filter: FilterState,
    pub metrics: SummaryMetrics,
    pub rental_trend: Vec<TrendPoint>,
    pub season_distribution: Vec<SeasonDistribution>,
    pub temperature_scatter: Vec<ScatterPoint>,
    pub workday_distribution: Vec<WorkdayDistribution>,
    pub correlation: CorrelationMatrix,
    pub hour_weekday_heatmap: HourWeekdayHeatmap,
    pub hourly_average: Vec<HourlyAverage>,
    pub hourly_workday_average: Vec<HourlyWorkdayAverage>,
    pub monthly_performance: Vec<MonthlyPerformance>,
    pub monthly_average: Vec<MonthlyAverage>,
}

impl DashboardSnapshot {
    /// Runs every aggregate over `filtered` days and the full hourly table.
    pub fn compute(
        tables: &BikeTables,
        filtered: &DailyFrame,
        filter: FilterState,
    ) -> Result<Self, BikeShareError> {
        Ok(Self {
            filter,
            metrics: summary_metrics(filtered)?,
            rental_trend: rental_trend(filtered)?,
            season_distribution: season_distribution(filtered)?,
            temperature_scatter: temperature_scatter(filtered)?,
            workday_distribution: workday_distribution(filtered)?,
            correlation: covariate_correlation(filtered)?,
            hour_weekday_heatmap: hour_weekday_heatmap(&tables.hourly)?,
            hourly_average: hourly_average(&tables.hourly)?,
            hourly_workday_average: hourly_workday_average(&tables.hourly)?,
            monthly_performance: monthly_performance(filtered)?,
            monthly_average: monthly_average(filtered)?,
        })
    }

    /// True when the selection matched no days.
    pub fn is_empty(&self) -> bool {
        self.metrics.day_count == 0
    }
}
