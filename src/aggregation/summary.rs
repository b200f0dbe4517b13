use crate::error::BikeShareError;
use crate::types::frames::daily_frame::DailyFrame;
use serde::Serialize;

/// The four headline numbers of the dashboard.
///
/// All fields are `0` for an empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct SummaryMetrics {
    /// Sum of `cnt`.
    pub total_rentals: i64,
    /// `total_rentals / day_count`, truncated toward zero.
    pub mean_daily_rentals: i64,
    /// Largest single-day `cnt`.
    pub max_daily_rentals: i64,
    /// Number of days selected.
    pub day_count: usize,
}

pub fn summary_metrics(daily: &DailyFrame) -> Result<SummaryMetrics, BikeShareError> {
    let rentals = daily.rentals()?;
    Ok(summarize(&rentals))
}

pub(crate) fn summarize(rentals: &[i64]) -> SummaryMetrics {
    let day_count = rentals.len();
    if day_count == 0 {
        return SummaryMetrics::default();
    }
    let total_rentals: i64 = rentals.iter().sum();
    SummaryMetrics {
        total_rentals,
        mean_daily_rentals: total_rentals / day_count as i64,
        max_daily_rentals: rentals.iter().copied().max().unwrap_or(0),
        day_count,
    }
}
