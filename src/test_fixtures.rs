//! Synthetic tables shared by the unit tests.

use crate::table_data::data_loader::prepare_frame;
use crate::types::frames::daily_frame::DailyFrame;
use crate::types::frames::hourly_frame::HourlyFrame;
use crate::types::table_kind::TableKind;
use chrono::{Datelike, Duration, NaiveDate};
use polars::prelude::*;
use std::error::Error;
use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

pub const DAILY_CSV_HEADER: &str = "instant,dteday,season,yr,mnth,holiday,weekday,workingday,\
weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

pub const HOURLY_CSV_HEADER: &str = "instant,dteday,season,yr,mnth,hr,holiday,weekday,\
workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 2011-01-01 to 2011-01-03 with rentals 10, 20, 30 and seasons Spring, Spring, Summer.
pub fn daily_raw() -> PolarsResult<DataFrame> {
    df!(
        "instant" => [1i64, 2, 3],
        "dteday" => ["2011-01-01", "2011-01-02", "2011-01-03"],
        "season" => [1i64, 1, 2],
        "yr" => [0i64, 0, 0],
        "mnth" => [1i64, 1, 1],
        "workingday" => [0i64, 0, 1],
        "temp" => [0.344167, 0.363478, 0.196364],
        "hum" => [0.805833, 0.696087, 0.437273],
        "windspeed" => [0.2, 0.2, 0.2],
        "cnt" => [10i64, 20, 30],
    )
}

/// Two weeks of hours from Saturday 2011-01-01.
///
/// Working days peak at 8 and 17, other days have a midday hump.
pub fn hourly_raw() -> PolarsResult<DataFrame> {
    let start = date(2011, 1, 1);
    let mut dates = Vec::new();
    let mut hours = Vec::new();
    let mut weekdays = Vec::new();
    let mut workdays = Vec::new();
    let mut temps = Vec::new();
    let mut counts = Vec::new();

    for day in 0..14i64 {
        let dteday = (start + Duration::days(day)).format("%Y-%m-%d").to_string();
        let weekday = (6 + day) % 7;
        let working = (1..=5).contains(&weekday);
        for hour in 0..24i64 {
            let count = match (working, hour) {
                (true, 8) => 320,
                (true, 17) => 370,
                (false, 10..=16) => 150,
                _ => 20,
            };
            dates.push(dteday.clone());
            hours.push(hour);
            weekdays.push(weekday);
            workdays.push(working as i64);
            temps.push(0.2 + 0.01 * hour as f64);
            counts.push(count + day);
        }
    }

    let rows = dates.len();
    df!(
        "dteday" => dates,
        "season" => vec![1i64; rows],
        "yr" => vec![0i64; rows],
        "mnth" => vec![1i64; rows],
        "hr" => hours,
        "weekday" => weekdays,
        "workingday" => workdays,
        "temp" => temps,
        "hum" => vec![0.5; rows],
        "windspeed" => vec![0.1; rows],
        "cnt" => counts,
    )
}

/// Every day of 2011 and 2012.
///
/// Temperature follows the year, rentals follow temperature, and 2012 is busier
/// than 2011.
pub fn sample_daily_raw() -> PolarsResult<DataFrame> {
    let mut dates = Vec::new();
    let mut seasons = Vec::new();
    let mut years = Vec::new();
    let mut months = Vec::new();
    let mut workdays = Vec::new();
    let mut temps = Vec::new();
    let mut hums = Vec::new();
    let mut winds = Vec::new();
    let mut counts = Vec::new();

    let mut day = date(2011, 1, 1);
    let mut index = 0.0;
    while day <= date(2012, 12, 31) {
        let month = day.month() as i64;
        let season = match month {
            12 | 1 | 2 => 1,
            3..=5 => 2,
            6..=8 => 3,
            _ => 4,
        };
        let weekday = day.weekday().num_days_from_sunday();
        let working = (1..=5).contains(&weekday);
        let temp = 0.5 + 0.35 * (2.0 * PI * (day.ordinal() as f64 - 105.0) / 365.0).sin();
        let growth = if day.year() == 2012 { 1.5 } else { 1.0 };
        let bonus = if working { 200.0 } else { 0.0 };
        let count = (1000.0 + 5000.0 * temp) * growth + bonus;

        dates.push(day.format("%Y-%m-%d").to_string());
        seasons.push(season);
        years.push(day.year() as i64 - 2011);
        months.push(month);
        workdays.push(working as i64);
        temps.push(temp);
        hums.push(0.6 + 0.2 * (index * 0.7f64).sin());
        winds.push(0.15 + 0.1 * (index * 1.3f64).cos());
        counts.push(count.round() as i64);

        day += Duration::days(1);
        index += 1.0;
    }

    df!(
        "dteday" => dates,
        "season" => seasons,
        "yr" => years,
        "mnth" => months,
        "workingday" => workdays,
        "temp" => temps,
        "hum" => hums,
        "windspeed" => winds,
        "cnt" => counts,
    )
}

pub fn three_day_frame() -> Result<DailyFrame, Box<dyn Error>> {
    Ok(DailyFrame::new(prepare_frame(daily_raw()?, TableKind::Daily)?))
}

pub fn sample_daily_frame() -> Result<DailyFrame, Box<dyn Error>> {
    Ok(DailyFrame::new(prepare_frame(
        sample_daily_raw()?,
        TableKind::Daily,
    )?))
}

pub fn sample_hourly_frame() -> Result<HourlyFrame, Box<dyn Error>> {
    Ok(HourlyFrame::new(prepare_frame(
        hourly_raw()?,
        TableKind::Hourly,
    )?))
}

/// Writes `header` and `rows` as a CSV file inside `dir`.
pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    let mut contents = String::from(header);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    fs::write(&path, contents)?;
    Ok(path)
}
