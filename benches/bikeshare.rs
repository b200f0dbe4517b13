use bikeshare::{BikeShare, FrameSource, Season};
use chrono::{Datelike, Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::prelude::*;

const DAYS: i64 = 731;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2011, 1, 1).unwrap()
}

fn season_code(month: u32) -> i64 {
    match month {
        12 | 1 | 2 => 1,
        3..=5 => 2,
        6..=8 => 3,
        _ => 4,
    }
}

fn daily_table() -> DataFrame {
    let days: Vec<NaiveDate> = (0..DAYS).map(|i| start_date() + Duration::days(i)).collect();
    df!(
        "dteday" => days.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect::<Vec<_>>(),
        "season" => days.iter().map(|d| season_code(d.month())).collect::<Vec<_>>(),
        "yr" => days.iter().map(|d| (d.year() - 2011) as i64).collect::<Vec<_>>(),
        "mnth" => days.iter().map(|d| d.month() as i64).collect::<Vec<_>>(),
        "workingday" => days.iter().map(|d| (d.weekday().num_days_from_monday() < 5) as i64).collect::<Vec<_>>(),
        "temp" => (0..DAYS).map(|i| (i % 365) as f64 / 365.0).collect::<Vec<_>>(),
        "hum" => (0..DAYS).map(|i| (i % 17) as f64 / 17.0).collect::<Vec<_>>(),
        "windspeed" => (0..DAYS).map(|i| (i % 11) as f64 / 11.0).collect::<Vec<_>>(),
        "cnt" => (0..DAYS).map(|i| 1000 + (i * 37) % 5000).collect::<Vec<_>>(),
    )
    .unwrap()
}

fn hourly_table() -> DataFrame {
    let rows = DAYS * 24;
    let day = |i: i64| start_date() + Duration::days(i / 24);
    df!(
        "dteday" => (0..rows).map(|i| day(i).format("%Y-%m-%d").to_string()).collect::<Vec<_>>(),
        "season" => (0..rows).map(|i| season_code(day(i).month())).collect::<Vec<_>>(),
        "yr" => (0..rows).map(|i| (day(i).year() - 2011) as i64).collect::<Vec<_>>(),
        "mnth" => (0..rows).map(|i| day(i).month() as i64).collect::<Vec<_>>(),
        "hr" => (0..rows).map(|i| i % 24).collect::<Vec<_>>(),
        "weekday" => (0..rows).map(|i| day(i).weekday().num_days_from_sunday() as i64).collect::<Vec<_>>(),
        "workingday" => (0..rows).map(|i| (day(i).weekday().num_days_from_monday() < 5) as i64).collect::<Vec<_>>(),
        "temp" => (0..rows).map(|i| (i % 100) as f64 / 100.0).collect::<Vec<_>>(),
        "hum" => vec![0.5; rows as usize],
        "windspeed" => vec![0.2; rows as usize],
        "cnt" => (0..rows).map(|i| (i * 13) % 900).collect::<Vec<_>>(),
    )
    .unwrap()
}

fn bench_dashboard(c: &mut Criterion) {
    let dashboard = BikeShare::with_source(FrameSource::new("bench", daily_table(), hourly_table()));
    dashboard.tables().unwrap();

    c.bench_function("filter_summer_fall", |b| {
        b.iter(|| {
            dashboard
                .filter()
                .seasons(black_box(vec![Season::Summer, Season::Fall]))
                .call()
                .unwrap()
        })
    });
    c.bench_function("snapshot_all", |b| {
        b.iter(|| dashboard.snapshot().call().unwrap())
    });
}

criterion_group!(benches, bench_dashboard);
criterion_main!(benches);
