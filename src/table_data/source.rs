//! The data-access boundary: where the two tables come from.

use crate::table_data::data_loader::{load_csv_tables, BikeTables};
use crate::table_data::error::LoadError;
use crate::types::table_kind::TableKind;
use polars::prelude::DataFrame;
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of a table source, used as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceKey {
    Csv { daily: PathBuf, hourly: PathBuf },
    Memory(String),
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKey::Csv { daily, hourly } => {
                write!(f, "csv({}, {})", daily.display(), hourly.display())
            }
            SourceKey::Memory(name) => write!(f, "memory({})", name),
        }
    }
}

/// Something that can produce the daily and hourly tables.
///
/// Implementations must return the same data for the same [`SourceKey`] for as
/// long as that key stays cached.
pub trait TableSource {
    fn key(&self) -> SourceKey;

    fn load(&self) -> Result<BikeTables, LoadError>;
}

/// The two CSV files of the public bike-sharing dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSource {
    daily_path: PathBuf,
    hourly_path: PathBuf,
}

impl CsvSource {
    pub fn new(daily_path: impl Into<PathBuf>, hourly_path: impl Into<PathBuf>) -> Self {
        Self {
            daily_path: daily_path.into(),
            hourly_path: hourly_path.into(),
        }
    }

    /// `day.csv` and `hour.csv` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(
            dir.join(TableKind::Daily.default_file_name()),
            dir.join(TableKind::Hourly.default_file_name()),
        )
    }

    pub fn daily_path(&self) -> &Path {
        &self.daily_path
    }

    pub fn hourly_path(&self) -> &Path {
        &self.hourly_path
    }
}

impl Default for CsvSource {
    /// `day.csv` and `hour.csv` in the working directory.
    fn default() -> Self {
        Self::new(
            TableKind::Daily.default_file_name(),
            TableKind::Hourly.default_file_name(),
        )
    }
}

impl TableSource for CsvSource {
    fn key(&self) -> SourceKey {
        SourceKey::Csv {
            daily: self.daily_path.clone(),
            hourly: self.hourly_path.clone(),
        }
    }

    fn load(&self) -> Result<BikeTables, LoadError> {
        load_csv_tables(&self.daily_path, &self.hourly_path)
    }
}

/// Raw in-memory frames, validated on load like CSV input.
#[derive(Debug, Clone)]
pub struct FrameSource {
    name: String,
    daily: DataFrame,
    hourly: DataFrame,
}

impl FrameSource {
    pub fn new(name: impl Into<String>, daily: DataFrame, hourly: DataFrame) -> Self {
        Self {
            name: name.into(),
            daily,
            hourly,
        }
    }
}

impl TableSource for FrameSource {
    fn key(&self) -> SourceKey {
        SourceKey::Memory(self.name.clone())
    }

    fn load(&self) -> Result<BikeTables, LoadError> {
        BikeTables::from_frames(self.daily.clone(), self.hourly.clone())
    }
}
