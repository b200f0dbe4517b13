pub mod daily_frame;
pub mod hourly_frame;

use crate::error::BikeShareError;
use crate::types::season::Season;
use crate::types::traits::types::DateRange;
use crate::types::traits::utils::date_from_epoch_days;
use crate::types::workday::WorkdayKind;
use chrono::NaiveDate;
use polars::prelude::DataFrame;

pub(crate) fn i64_values(frame: &DataFrame, column: &str) -> Result<Vec<i64>, BikeShareError> {
    frame
        .column(column)?
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| BikeShareError::MissingValue {
                column: column.to_string(),
                row,
            })
        })
        .collect()
}

pub(crate) fn f64_values(frame: &DataFrame, column: &str) -> Result<Vec<f64>, BikeShareError> {
    frame
        .column(column)?
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| BikeShareError::MissingValue {
                column: column.to_string(),
                row,
            })
        })
        .collect()
}

pub(crate) fn date_values(frame: &DataFrame, column: &str) -> Result<Vec<NaiveDate>, BikeShareError> {
    frame
        .column(column)?
        .date()?
        .into_iter()
        .enumerate()
        .map(|(row, days)| {
            days.and_then(date_from_epoch_days)
                .ok_or_else(|| BikeShareError::MissingValue {
                    column: column.to_string(),
                    row,
                })
        })
        .collect()
}

pub(crate) fn season_values(frame: &DataFrame) -> Result<Vec<Season>, BikeShareError> {
    i64_values(frame, "season")?
        .into_iter()
        .enumerate()
        .map(|(row, code)| {
            Season::from_code(code).ok_or(BikeShareError::InvalidValue {
                column: "season".to_string(),
                row,
                value: code,
            })
        })
        .collect()
}

pub(crate) fn workday_values(frame: &DataFrame) -> Result<Vec<WorkdayKind>, BikeShareError> {
    i64_values(frame, "workingday")?
        .into_iter()
        .enumerate()
        .map(|(row, flag)| {
            WorkdayKind::from_flag(flag).ok_or(BikeShareError::InvalidValue {
                column: "workingday".to_string(),
                row,
                value: flag,
            })
        })
        .collect()
}

pub(crate) fn date_bounds(frame: &DataFrame) -> Result<Option<DateRange>, BikeShareError> {
    let dates = date_values(frame, "dteday")?;
    let start = dates.iter().min().copied();
    let end = dates.iter().max().copied();
    Ok(start.zip(end).map(|(start, end)| DateRange { start, end }))
}
