use crate::error::BikeShareError;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::season::Season;
use chrono::NaiveDate;
use serde::Serialize;

/// One day on the rental trend line, colored by season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub season: Season,
    pub rentals: i64,
}

/// One day on the temperature scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Normalized temperature.
    pub temp: f64,
    pub rentals: i64,
    pub season: Season,
}

/// Daily rentals over time, ordered by date.
pub fn rental_trend(daily: &DailyFrame) -> Result<Vec<TrendPoint>, BikeShareError> {
    let mut points: Vec<TrendPoint> = daily
        .dates()?
        .into_iter()
        .zip(daily.seasons()?)
        .zip(daily.rentals()?)
        .map(|((date, season), rentals)| TrendPoint {
            date,
            season,
            rentals,
        })
        .collect();
    points.sort_by_key(|point| point.date);
    Ok(points)
}

/// Temperature against rentals, one point per day in table order.
pub fn temperature_scatter(daily: &DailyFrame) -> Result<Vec<ScatterPoint>, BikeShareError> {
    Ok(daily
        .covariate("temp")?
        .into_iter()
        .zip(daily.rentals()?)
        .zip(daily.seasons()?)
        .map(|((temp, rentals), season)| ScatterPoint {
            temp,
            rentals,
            season,
        })
        .collect())
}
