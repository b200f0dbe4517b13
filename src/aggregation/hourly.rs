//! Hour-of-day aggregates over the full hourly table.

use crate::aggregation::grouped_mean;
use crate::error::BikeShareError;
use crate::types::frames::hourly_frame::HourlyFrame;
use crate::types::workday::WorkdayKind;
use serde::Serialize;

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub hour: u32,
    /// 0 is Sunday.
    pub weekday: u32,
    /// `None` when the table has no rows for this pair.
    pub mean_rentals: Option<f64>,
}

/// Mean rentals for every (hour, weekday) pair: always 168 cells, ordered by
/// hour, then weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourWeekdayHeatmap {
    pub cells: Vec<HeatmapCell>,
}

impl HourWeekdayHeatmap {
    pub fn get(&self, hour: u32, weekday: u32) -> Option<f64> {
        if hour as usize >= HOURS_PER_DAY || weekday as usize >= DAYS_PER_WEEK {
            return None;
        }
        self.cells[hour as usize * DAYS_PER_WEEK + weekday as usize].mean_rentals
    }

    /// Number of cells that have observations.
    pub fn observed(&self) -> usize {
        self.cells.iter().filter(|c| c.mean_rentals.is_some()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyAverage {
    pub hour: u32,
    pub mean_rentals: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyWorkdayAverage {
    pub hour: u32,
    pub workday: WorkdayKind,
    pub mean_rentals: f64,
}

pub fn hour_weekday_heatmap(hourly: &HourlyFrame) -> Result<HourWeekdayHeatmap, BikeShareError> {
    let (keys, means) = grouped_mean(hourly.lazy(), &["hr", "weekday"])?;

    let mut cells: Vec<HeatmapCell> = (0..HOURS_PER_DAY as u32)
        .flat_map(|hour| {
            (0..DAYS_PER_WEEK as u32).map(move |weekday| HeatmapCell {
                hour,
                weekday,
                mean_rentals: None,
            })
        })
        .collect();
    for (row, ((hour, weekday), mean)) in keys[0].iter().zip(&keys[1]).zip(means).enumerate() {
        let hour = to_index(*hour, HOURS_PER_DAY, "hr", row)?;
        let weekday = to_index(*weekday, DAYS_PER_WEEK, "weekday", row)?;
        cells[hour * DAYS_PER_WEEK + weekday].mean_rentals = Some(mean);
    }
    Ok(HourWeekdayHeatmap { cells })
}

/// Mean rentals per hour of day, for hours that have observations.
pub fn hourly_average(hourly: &HourlyFrame) -> Result<Vec<HourlyAverage>, BikeShareError> {
    let (keys, means) = grouped_mean(hourly.lazy(), &["hr"])?;
    keys[0]
        .iter()
        .zip(means)
        .enumerate()
        .map(|(row, (hour, mean_rentals))| {
            Ok(HourlyAverage {
                hour: to_index(*hour, HOURS_PER_DAY, "hr", row)? as u32,
                mean_rentals,
            })
        })
        .collect()
}

/// Mean rentals per (hour, day type), ordered by hour then non-working first.
pub fn hourly_workday_average(
    hourly: &HourlyFrame,
) -> Result<Vec<HourlyWorkdayAverage>, BikeShareError> {
    let (keys, means) = grouped_mean(hourly.lazy(), &["hr", "workingday"])?;
    keys[0]
        .iter()
        .zip(&keys[1])
        .zip(means)
        .enumerate()
        .map(|(row, ((hour, flag), mean_rentals))| {
            let workday = WorkdayKind::from_flag(*flag).ok_or(BikeShareError::InvalidValue {
                column: "workingday".to_string(),
                row,
                value: *flag,
            })?;
            Ok(HourlyWorkdayAverage {
                hour: to_index(*hour, HOURS_PER_DAY, "hr", row)? as u32,
                workday,
                mean_rentals,
            })
        })
        .collect()
}

fn to_index(value: i64, bound: usize, column: &str, row: usize) -> Result<usize, BikeShareError> {
    usize::try_from(value)
        .ok()
        .filter(|index| *index < bound)
        .ok_or(BikeShareError::InvalidValue {
            column: column.to_string(),
            row,
            value,
        })
}
