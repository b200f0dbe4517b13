//! Print the bike-sharing dashboard for a filter selection.
//!
//! Usage examples:
//!   # Every view over the full data set
//!   cargo run --bin bikeshare -- --daily data/day.csv --hourly data/hour.csv
//!
//!   # Summer and fall of 2012, monthly view only
//!   cargo run --bin bikeshare -- --start 2012-01-01 --season summer --season fall --view monthly
//!
//!   # Full snapshot as JSON
//!   cargo run --bin bikeshare -- --format json

use bikeshare::{BikeShare, DashboardSnapshot, DashboardView, Season};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bikeshare", about = "Bike-sharing dashboard metrics and aggregates")]
struct Args {
    /// Daily table (CSV)
    #[arg(long, default_value = "day.csv")]
    daily: PathBuf,

    /// Hourly table (CSV)
    #[arg(long, default_value = "hour.csv")]
    hourly: PathBuf,

    /// First day of the selection (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last day of the selection (YYYY-MM-DD, inclusive)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Season to include; repeat for several. Defaults to all four.
    #[arg(long = "season")]
    seasons: Vec<Season>,

    /// View to print; repeat for several. Defaults to all six.
    #[arg(long = "view", value_enum)]
    views: Vec<ViewArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Trend,
    Seasonal,
    Weekday,
    Correlation,
    Hourly,
    Monthly,
}

impl From<ViewArg> for DashboardView {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Trend => DashboardView::Trend,
            ViewArg::Seasonal => DashboardView::SeasonalWeather,
            ViewArg::Weekday => DashboardView::WeekdayComparison,
            ViewArg::Correlation => DashboardView::Correlation,
            ViewArg::Hourly => DashboardView::HourlyPattern,
            ViewArg::Monthly => DashboardView::MonthlyPerformance,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = BikeShare::builder()
        .daily_path(args.daily)
        .hourly_path(args.hourly)
        .build();

    let seasons = (!args.seasons.is_empty()).then_some(args.seasons);
    let snapshot = dashboard
        .snapshot()
        .maybe_start(args.start)
        .maybe_end(args.end)
        .maybe_seasons(seasons)
        .call()?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Text => {
            let views: Vec<DashboardView> = if args.views.is_empty() {
                DashboardView::ALL.to_vec()
            } else {
                args.views.into_iter().map(DashboardView::from).collect()
            };
            print_report(&snapshot, &views);
        }
    }
    Ok(())
}

fn print_report(snapshot: &DashboardSnapshot, views: &[DashboardView]) {
    match snapshot.filter.range {
        Some(range) => println!("Selection: {range}"),
        None => println!("Selection: no data"),
    }
    let seasons: Vec<&str> = snapshot.filter.seasons.iter().map(|s| s.name()).collect();
    println!("Seasons:   {}", seasons.join(", "));
    println!();

    let metrics = &snapshot.metrics;
    println!("Total rentals:       {}", metrics.total_rentals);
    println!("Mean daily rentals:  {}", metrics.mean_daily_rentals);
    println!("Max daily rentals:   {}", metrics.max_daily_rentals);
    println!("Days selected:       {}", metrics.day_count);

    for view in views {
        println!();
        println!("== {} ==", view.title());
        println!("({})", view.aggregates().join(", "));
        if snapshot.is_empty() && !view.uses_hourly_table() {
            println!("No data for the selected filters.");
        } else {
            print_view(snapshot, *view);
        }
        for insight in view.insights() {
            println!("  * {insight}");
        }
    }
}

fn print_view(snapshot: &DashboardSnapshot, view: DashboardView) {
    match view {
        DashboardView::Trend => {
            let trend = &snapshot.rental_trend;
            if let (Some(first), Some(last)) = (trend.first(), trend.last()) {
                println!("{} days, {} to {}", trend.len(), first.date, last.date);
            }
            if let Some(peak) = trend.iter().max_by_key(|p| p.rentals) {
                println!("Busiest day: {} ({} rentals, {})", peak.date, peak.rentals, peak.season);
            }
        }
        DashboardView::SeasonalWeather => {
            for group in &snapshot.season_distribution {
                let d = &group.distribution;
                println!(
                    "{:<8} n={:<4} min={:<6} q1={:<8.1} median={:<8.1} q3={:<8.1} max={}",
                    group.season.name(),
                    d.count,
                    d.min,
                    d.q1,
                    d.median,
                    d.q3,
                    d.max
                );
            }
            println!("{} temperature points", snapshot.temperature_scatter.len());
        }
        DashboardView::WeekdayComparison => {
            for group in &snapshot.workday_distribution {
                let d = &group.distribution;
                println!(
                    "{:<16} n={:<4} mean={:<8.1} median={:.1}",
                    format!("{} ({})", group.workday, group.workday.flag()),
                    d.count,
                    d.mean,
                    d.median
                );
            }
        }
        DashboardView::Correlation => {
            let matrix = &snapshot.correlation;
            print!("{:<10}", "");
            for column in &matrix.columns {
                print!("{column:>10}");
            }
            println!();
            for (name, row) in matrix.columns.iter().zip(&matrix.values) {
                print!("{name:<10}");
                for value in row {
                    match value {
                        Some(r) => print!("{r:>10.2}"),
                        None => print!("{:>10}", "-"),
                    }
                }
                println!();
            }
        }
        DashboardView::HourlyPattern => {
            for avg in &snapshot.hourly_average {
                println!("{:>2}:00  {:.1}", avg.hour, avg.mean_rentals);
            }
            for working in [false, true] {
                let peak = snapshot
                    .hourly_workday_average
                    .iter()
                    .filter(|avg| avg.workday.is_working() == working)
                    .max_by(|a, b| a.mean_rentals.total_cmp(&b.mean_rentals));
                if let Some(peak) = peak {
                    println!(
                        "Peak on {}: {:>2}:00 ({:.1})",
                        peak.workday, peak.hour, peak.mean_rentals
                    );
                }
            }
            println!(
                "{} of 168 hour/weekday cells observed",
                snapshot.hour_weekday_heatmap.observed()
            );
        }
        DashboardView::MonthlyPerformance => {
            for row in &snapshot.monthly_performance {
                println!("{}-{:02}  {:.1}", row.year, row.month, row.mean_rentals);
            }
        }
    }
}
