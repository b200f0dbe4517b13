use crate::aggregation::grouped_mean;
use crate::error::BikeShareError;
use crate::types::frames::daily_frame::DailyFrame;
use polars::prelude::{col, DataType};
use serde::Serialize;

/// Mean daily rentals of one calendar month in one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyPerformance {
    pub month: u32,
    pub year: i32,
    pub mean_rentals: f64,
}

/// Mean daily rentals of one calendar month across all selected years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyAverage {
    pub month: u32,
    pub mean_rentals: f64,
}

/// Mean daily rentals per (month, year), ordered by month, then year.
///
/// The year is the calendar year of `dteday`.
pub fn monthly_performance(
    daily: &DailyFrame,
) -> Result<Vec<MonthlyPerformance>, BikeShareError> {
    let frame = daily
        .lazy()
        .with_column(col("dteday").dt().year().cast(DataType::Int64).alias("year"));
    let (keys, means) = grouped_mean(frame, &["mnth", "year"])?;
    Ok(keys[0]
        .iter()
        .zip(&keys[1])
        .zip(means)
        .map(|((month, year), mean_rentals)| MonthlyPerformance {
            month: *month as u32,
            year: *year as i32,
            mean_rentals,
        })
        .collect())
}

/// Mean daily rentals per month, ascending; feeds the radial chart.
pub fn monthly_average(daily: &DailyFrame) -> Result<Vec<MonthlyAverage>, BikeShareError> {
    let (keys, means) = grouped_mean(daily.lazy(), &["mnth"])?;
    Ok(keys[0]
        .iter()
        .zip(means)
        .map(|(month, mean_rentals)| MonthlyAverage {
            month: *month as u32,
            mean_rentals,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{sample_daily_frame, three_day_frame};
    use crate::types::season::Season;

    #[test]
    fn test_monthly_performance_order() -> Result<(), Box<dyn std::error::Error>> {
        let rows = monthly_performance(&sample_daily_frame()?)?;
        assert_eq!(rows.len(), 24);
        assert_eq!((rows[0].month, rows[0].year), (1, 2011));
        assert_eq!((rows[1].month, rows[1].year), (1, 2012));
        assert_eq!((rows[23].month, rows[23].year), (12, 2012));
        // The fixture grows from the first year to the second.
        assert!(rows[1].mean_rentals > rows[0].mean_rentals);
        Ok(())
    }

    #[test]
    fn test_monthly_performance_means() -> Result<(), Box<dyn std::error::Error>> {
        let rows = monthly_performance(&three_day_frame()?)?;
        assert_eq!(
            rows,
            vec![MonthlyPerformance {
                month: 1,
                year: 2011,
                mean_rentals: 20.0
            }]
        );
        Ok(())
    }

    #[test]
    fn test_monthly_average() -> Result<(), Box<dyn std::error::Error>> {
        let daily = sample_daily_frame()?;
        let rows = monthly_average(&daily)?;
        let months: Vec<u32> = rows.iter().map(|r| r.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<u32>>());

        let per_year = monthly_performance(&daily)?;
        // Both years have 31 days in January, so the pooled mean is the mean of means.
        let january = (per_year[0].mean_rentals + per_year[1].mean_rentals) / 2.0;
        assert!((rows[0].mean_rentals - january).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_empty_selection() -> Result<(), Box<dyn std::error::Error>> {
        let empty = sample_daily_frame()?.get_range("2011-01-01", "2012-12-31", &[])?;
        assert!(monthly_performance(&empty)?.is_empty());
        assert!(monthly_average(&empty)?.is_empty());

        let winter_only = three_day_frame()?.get_range("2011-01-01", "2011-01-03", &[Season::Winter])?;
        assert!(monthly_average(&winter_only)?.is_empty());
        Ok(())
    }
}
