use crate::table_data::error::LoadError;
use crate::types::season::UnknownSeason;
use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BikeShareError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Failed to parse date input")]
    DateParsing,

    #[error(transparent)]
    UnknownSeason(#[from] UnknownSeason),

    #[error("Missing value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    #[error("Invalid value {value} in column '{column}' at row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: i64,
    },

    #[error("Polars operation failed")]
    Polars(#[from] PolarsError),
}
