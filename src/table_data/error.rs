use crate::types::table_kind::TableKind;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Source file '{0}' does not exist")]
    SourceMissing(PathBuf),

    #[error("Failed to read CSV file '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{column}' not found in {table} table")]
    MissingColumn { table: TableKind, column: String },

    #[error("Column '{column}' of the {table} table has unsupported type {dtype}")]
    ColumnType {
        table: TableKind,
        column: String,
        dtype: String,
    },

    #[error("Failed to parse dates in column 'dteday' of the {table} table")]
    DateParse {
        table: TableKind,
        #[source]
        source: PolarsError,
    },

    #[error("Column '{column}' of the {table} table contains {count} missing value(s)")]
    NullValues {
        table: TableKind,
        column: String,
        count: usize,
    },

    #[error("Unknown season code {code} in row {row} of the {table} table")]
    UnknownSeasonCode {
        table: TableKind,
        row: usize,
        code: i64,
    },

    #[error("Negative rental count {count} in row {row} of the {table} table")]
    NegativeCount {
        table: TableKind,
        row: usize,
        count: i64,
    },

    #[error("Value {value} in column '{column}', row {row} of the {table} table is outside [{min}, {max}]")]
    ValueOutOfRange {
        table: TableKind,
        column: String,
        row: usize,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Failed processing {table} table")]
    Processing {
        table: TableKind,
        #[source]
        source: PolarsError,
    },
}
