//! The six views of the dashboard and the static text attached to each.

use serde::Serialize;
use std::fmt;

/// A thematic view (tab) of the dashboard.
///
/// Each view names the aggregates it displays through [`DashboardView::aggregates`];
/// the aggregates themselves are plain functions re-exported at the crate root and
/// can be computed without any view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DashboardView {
    /// Daily rentals over time.
    Trend,
    /// Per-season distribution and the temperature scatter.
    SeasonalWeather,
    /// Working days against weekends and holidays.
    WeekdayComparison,
    /// Covariate correlation matrix.
    Correlation,
    /// Hour-of-day patterns from the hourly table.
    HourlyPattern,
    /// Month-by-month performance.
    MonthlyPerformance,
}

/// Names of the aggregates a view displays.
///
/// Strings match the field names of [`crate::DashboardSnapshot`].
pub type AggregateName = &'static str;

impl DashboardView {
    pub const ALL: [DashboardView; 6] = [
        DashboardView::Trend,
        DashboardView::SeasonalWeather,
        DashboardView::WeekdayComparison,
        DashboardView::Correlation,
        DashboardView::HourlyPattern,
        DashboardView::MonthlyPerformance,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DashboardView::Trend => "Rental Trends & Patterns",
            DashboardView::SeasonalWeather => "Seasonal & Weather Analysis",
            DashboardView::WeekdayComparison => "Day Type Comparison",
            DashboardView::Correlation => "Correlations & Insights",
            DashboardView::HourlyPattern => "Hourly Analysis",
            DashboardView::MonthlyPerformance => "Monthly Performance",
        }
    }

    pub fn aggregates(self) -> &'static [AggregateName] {
        match self {
            DashboardView::Trend => &["rental_trend"],
            DashboardView::SeasonalWeather => &["season_distribution", "temperature_scatter"],
            DashboardView::WeekdayComparison => &["workday_distribution"],
            DashboardView::Correlation => &["correlation"],
            DashboardView::HourlyPattern => &[
                "hour_weekday_heatmap",
                "hourly_average",
                "hourly_workday_average",
            ],
            DashboardView::MonthlyPerformance => &["monthly_performance", "monthly_average"],
        }
    }

    /// Whether the view reads the hourly table, which is never filtered.
    pub fn uses_hourly_table(self) -> bool {
        self == DashboardView::HourlyPattern
    }

    /// Static narrative bullet points shown under the view's charts.
    ///
    /// These describe the full 2011-2012 dataset and do not change with the
    /// filter selection.
    pub fn insights(self) -> &'static [&'static str] {
        match self {
            DashboardView::Trend => &[
                "Rentals grew by roughly 50% from 2011 to 2012",
                "Rentals peak in summer and fall",
                "The seasonal pattern repeats every year",
                "Rentals drop sharply during extreme weather",
            ],
            DashboardView::SeasonalWeather => &[
                "Summer and fall have the highest average rentals",
                "The best temperature for renting is around 20-25°C",
                "Rain lowers rentals by up to 30%",
                "Winter shows high variability in rentals",
            ],
            DashboardView::WeekdayComparison => &[
                "Working days follow a bimodal pattern (morning and evening peaks)",
                "Weekends show a more even distribution",
                "The highest rentals happen on Friday afternoons",
                "Commuting patterns are clearly visible on working days",
            ],
            DashboardView::Correlation => &[
                "Temperature has a strong positive correlation (0.8) with rentals",
                "Humidity correlates negatively (-0.3) with rentals",
                "Wind speed has minimal influence",
                "Weather and season strongly shape rental patterns",
            ],
            DashboardView::HourlyPattern => &[
                "Working days have two peaks: 8 AM and 5 PM (commuting hours)",
                "Weekends are flatter, peaking around midday",
                "Usage is lowest between 2 and 4 AM",
                "Working day and weekend patterns differ significantly",
            ],
            DashboardView::MonthlyPerformance => &[
                "Performance improved consistently from 2011 to 2012",
                "June to September are the strongest months",
                "January and February are the weakest months",
                "The seasonal trend is clearly visible month by month",
            ],
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
