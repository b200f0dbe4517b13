use crate::table_data::error::LoadError;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::hourly_frame::HourlyFrame;
use crate::types::season::Season;
use crate::types::table_kind::TableKind;
use log::{info, warn};
use polars::prelude::*;
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Both bike-sharing tables, validated and annotated.
///
/// Immutable once loaded; share it through an `Arc`.
#[derive(Debug, Clone)]
pub struct BikeTables {
    pub daily: DailyFrame,
    pub hourly: HourlyFrame,
}

impl BikeTables {
    /// Validates two raw frames and wraps them.
    ///
    /// Warns (without failing) when the hourly table covers days outside the
    /// daily table's span.
    pub fn from_frames(daily: DataFrame, hourly: DataFrame) -> Result<Self, LoadError> {
        let daily = DailyFrame::new(prepare_frame(daily, TableKind::Daily)?);
        let hourly = HourlyFrame::new(prepare_frame(hourly, TableKind::Hourly)?);
        check_spans(&daily, &hourly);
        Ok(Self { daily, hourly })
    }
}

/// Reads a headered CSV file into a raw `DataFrame`.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    if !path.exists() {
        return Err(LoadError::SourceMissing(path.to_path_buf()));
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| LoadError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| LoadError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    info!("Read {} rows from {:?}", df.height(), path);
    Ok(df)
}

/// Reads and validates both CSV files.
pub fn load_csv_tables(daily_path: &Path, hourly_path: &Path) -> Result<BikeTables, LoadError> {
    BikeTables::from_frames(read_csv(daily_path)?, read_csv(hourly_path)?)
}

/// Turns a raw table into its validated form.
///
/// Steps, in order: required columns present, `dteday` parsed to `Date`,
/// integer and float columns cast, no missing values, integer domains checked,
/// `season_name` derived from `season`. Unknown season codes fail the load.
pub(crate) fn prepare_frame(df: DataFrame, table: TableKind) -> Result<DataFrame, LoadError> {
    for column in table.required_columns() {
        if df.column(column).is_err() {
            return Err(LoadError::MissingColumn {
                table,
                column: column.to_string(),
            });
        }
    }

    let df = parse_dates(df, table)?;

    let casts: Vec<Expr> = table
        .integer_columns()
        .iter()
        .map(|name| col(*name).cast(DataType::Int64))
        .chain(
            table
                .float_columns()
                .iter()
                .map(|name| col(*name).cast(DataType::Float64)),
        )
        .collect();
    let mut df = df
        .lazy()
        .with_columns(casts)
        .collect()
        .map_err(|e| LoadError::Processing { table, source: e })?;

    for column in table.required_columns() {
        let count = df
            .column(column)
            .map_err(|e| LoadError::Processing { table, source: e })?
            .null_count();
        if count > 0 {
            return Err(LoadError::NullValues {
                table,
                column: column.to_string(),
                count,
            });
        }
    }

    let codes = int_column(&df, table, "season")?;
    let mut names = Vec::with_capacity(codes.len());
    for (row, code) in codes.into_iter().enumerate() {
        let season = Season::from_code(code)
            .ok_or(LoadError::UnknownSeasonCode { table, row, code })?;
        names.push(season.name());
    }

    for (row, count) in int_column(&df, table, "cnt")?.into_iter().enumerate() {
        if count < 0 {
            return Err(LoadError::NegativeCount { table, row, count });
        }
    }

    for &(column, min, max) in table.bounded_columns() {
        for (row, value) in int_column(&df, table, column)?.into_iter().enumerate() {
            if value < min || value > max {
                return Err(LoadError::ValueOutOfRange {
                    table,
                    column: column.to_string(),
                    row,
                    value,
                    min,
                    max,
                });
            }
        }
    }

    df.with_column(Series::new("season_name".into(), names))
        .map_err(|e| LoadError::Processing { table, source: e })?;
    Ok(df)
}

fn parse_dates(df: DataFrame, table: TableKind) -> Result<DataFrame, LoadError> {
    let dtype = df
        .column("dteday")
        .map_err(|e| LoadError::Processing { table, source: e })?
        .dtype()
        .clone();
    let date_expr = match dtype {
        DataType::Date => return Ok(df),
        DataType::String => col("dteday").str().to_date(StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            strict: true,
            exact: true,
            cache: true,
        }),
        DataType::Datetime(_, _) => col("dteday").cast(DataType::Date),
        other => {
            return Err(LoadError::ColumnType {
                table,
                column: "dteday".to_string(),
                dtype: other.to_string(),
            })
        }
    };
    let df = df
        .lazy()
        .with_column(date_expr)
        .collect()
        .map_err(|e| LoadError::DateParse { table, source: e })?;

    // Non-strict parsing paths leave nulls behind instead of failing.
    let unparsed = df
        .column("dteday")
        .map_err(|e| LoadError::Processing { table, source: e })?
        .null_count();
    if unparsed > 0 {
        return Err(LoadError::NullValues {
            table,
            column: "dteday".to_string(),
            count: unparsed,
        });
    }
    Ok(df)
}

fn int_column(df: &DataFrame, table: TableKind, column: &str) -> Result<Vec<i64>, LoadError> {
    let values = df
        .column(column)
        .map_err(|_| LoadError::MissingColumn {
            table,
            column: column.to_string(),
        })?
        .i64()
        .map_err(|e| LoadError::Processing { table, source: e })?;
    Ok(values.into_no_null_iter().collect())
}

fn check_spans(daily: &DailyFrame, hourly: &HourlyFrame) {
    match (daily.date_bounds(), hourly.date_bounds()) {
        (Ok(Some(days)), Ok(Some(hours))) => {
            if hours.start < days.start || hours.end > days.end {
                warn!(
                    "Hourly table spans {} but daily table only spans {}",
                    hours, days
                );
            }
        }
        (Err(e), _) | (_, Err(e)) => warn!("Could not compare table spans: {}", e),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{
        daily_raw, date, hourly_raw, write_csv, DAILY_CSV_HEADER, HOURLY_CSV_HEADER,
    };
    use tempfile::tempdir;

    #[test]
    fn test_prepare_adds_season_name() -> Result<(), Box<dyn std::error::Error>> {
        let df = prepare_frame(daily_raw()?, TableKind::Daily)?;
        assert_eq!(df.column("dteday")?.dtype(), &DataType::Date);
        assert_eq!(df.column("cnt")?.dtype(), &DataType::Int64);
        assert_eq!(df.column("temp")?.dtype(), &DataType::Float64);

        let names: Vec<&str> = df
            .column("season_name")?
            .str()?
            .into_iter()
            .map(|name| name.unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["Spring", "Spring", "Summer"]);
        Ok(())
    }

    #[test]
    fn test_unknown_season_code_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let mut raw = daily_raw()?;
        raw.with_column(Series::new("season".into(), [1i64, 5, 2]))?;

        let result = prepare_frame(raw, TableKind::Daily);
        assert!(matches!(
            result,
            Err(LoadError::UnknownSeasonCode { row: 1, code: 5, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_zero_season_code_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let mut raw = daily_raw()?;
        raw.with_column(Series::new("season".into(), [0i64, 1, 2]))?;
        assert!(matches!(
            prepare_frame(raw, TableKind::Daily),
            Err(LoadError::UnknownSeasonCode { row: 0, code: 0, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_bad_date_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let mut raw = daily_raw()?;
        raw.with_column(Series::new(
            "dteday".into(),
            ["2011-01-01", "2011-13-45", "2011-01-03"],
        ))?;
        let result = prepare_frame(raw, TableKind::Daily);
        assert!(matches!(
            result,
            Err(LoadError::DateParse { .. }) | Err(LoadError::NullValues { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_negative_count_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let mut raw = daily_raw()?;
        raw.with_column(Series::new("cnt".into(), [10i64, -1, 30]))?;
        assert!(matches!(
            prepare_frame(raw, TableKind::Daily),
            Err(LoadError::NegativeCount { row: 1, count: -1, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_missing_column_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let raw = daily_raw()?.drop("windspeed")?;
        match prepare_frame(raw, TableKind::Daily) {
            Err(LoadError::MissingColumn { column, .. }) => assert_eq!(column, "windspeed"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_hour_out_of_range_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let mut raw = hourly_raw()?;
        let height = raw.height();
        let mut hours: Vec<i64> = (0..height as i64).map(|i| i % 24).collect();
        hours[3] = 24;
        raw.with_column(Series::new("hr".into(), hours))?;
        match prepare_frame(raw, TableKind::Hourly) {
            Err(LoadError::ValueOutOfRange {
                column, row, value, ..
            }) => {
                assert_eq!(column, "hr");
                assert_eq!(row, 3);
                assert_eq!(value, 24);
            }
            other => panic!("expected ValueOutOfRange, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_load_csv_tables() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let day = write_csv(
            dir.path(),
            "day.csv",
            DAILY_CSV_HEADER,
            &[
                "1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985",
                "2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801",
            ],
        )?;
        let hour = write_csv(
            dir.path(),
            "hour.csv",
            HOURLY_CSV_HEADER,
            &[
                "1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16",
                "2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40",
            ],
        )?;

        let tables = load_csv_tables(&day, &hour)?;
        assert_eq!(tables.daily.height(), 2);
        assert_eq!(tables.hourly.height(), 2);
        assert_eq!(tables.daily.rentals()?, vec![985, 801]);
        assert_eq!(tables.daily.dates()?[1], date(2011, 1, 2));
        assert_eq!(tables.hourly.hours()?, vec![0, 1]);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv(Path::new("/definitely/not/here/day.csv"));
        assert!(matches!(result, Err(LoadError::SourceMissing(_))));
    }
}
