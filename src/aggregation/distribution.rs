//! Box-plot style summaries of daily rentals per season and per day type.

use crate::error::BikeShareError;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::season::Season;
use crate::types::workday::WorkdayKind;
use serde::Serialize;
use std::collections::BTreeMap;

/// Five-number summary plus mean of one group's `cnt` values.
///
/// Quartiles interpolate linearly between closest ranks. `values` keeps the raw
/// counts in table order so a renderer can draw outliers or its own boxes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub count: usize,
    pub min: i64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: i64,
    pub mean: f64,
    pub values: Vec<i64>,
}

impl Distribution {
    /// `None` for an empty group.
    pub fn from_values(values: Vec<i64>) -> Option<Self> {
        let mut sorted = values.clone();
        sorted.sort_unstable();
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let count = sorted.len();
        let mean = sorted.iter().sum::<i64>() as f64 / count as f64;
        Some(Self {
            count,
            min,
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max,
            mean,
            values,
        })
    }
}

/// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[i64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] as f64 + (sorted[upper] - sorted[lower]) as f64 * fraction
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonDistribution {
    pub season: Season,
    pub distribution: Distribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkdayDistribution {
    pub workday: WorkdayKind,
    pub distribution: Distribution,
}

/// Daily rentals grouped by season, in season-code order.
///
/// Seasons without selected days are left out.
pub fn season_distribution(daily: &DailyFrame) -> Result<Vec<SeasonDistribution>, BikeShareError> {
    Ok(group_values(daily.seasons()?, daily.rentals()?)
        .into_iter()
        .filter_map(|(season, values)| {
            Distribution::from_values(values).map(|distribution| SeasonDistribution {
                season,
                distribution,
            })
        })
        .collect())
}

/// Daily rentals grouped by the `workingday` flag, non-working days first.
pub fn workday_distribution(
    daily: &DailyFrame,
) -> Result<Vec<WorkdayDistribution>, BikeShareError> {
    Ok(group_values(daily.workdays()?, daily.rentals()?)
        .into_iter()
        .filter_map(|(workday, values)| {
            Distribution::from_values(values).map(|distribution| WorkdayDistribution {
                workday,
                distribution,
            })
        })
        .collect())
}

fn group_values<K: Ord>(keys: Vec<K>, values: Vec<i64>) -> BTreeMap<K, Vec<i64>> {
    let mut groups: BTreeMap<K, Vec<i64>> = BTreeMap::new();
    for (key, value) in keys.into_iter().zip(values) {
        groups.entry(key).or_default().push(value);
    }
    groups
}
