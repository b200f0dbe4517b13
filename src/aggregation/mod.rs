//! Pure reductions over the daily and hourly tables.
//!
//! Every function here is independent of the others and of the view that
//! displays its result. Empty input is ordinary input: scalar reductions return
//! `0`, group-bys return an empty collection, and undefined statistics are `None`.
//! Grouped results are always ordered by ascending key.

pub mod correlation;
pub mod distribution;
pub mod hourly;
pub mod monthly;
pub mod summary;
pub mod trend;

use crate::error::BikeShareError;
use crate::types::frames::{f64_values, i64_values};
use polars::prelude::*;

pub(crate) const MEAN_RENTALS: &str = "mean_cnt";

/// Mean `cnt` per distinct combination of `keys`, sorted by `keys`.
///
/// Returns one `Vec<i64>` per key column plus the means, all row-aligned.
pub(crate) fn grouped_mean(
    frame: LazyFrame,
    keys: &[&str],
) -> Result<(Vec<Vec<i64>>, Vec<f64>), BikeShareError> {
    let by: Vec<Expr> = keys.iter().map(|key| col(*key)).collect();
    let df = frame
        .group_by(by)
        .agg([col("cnt")
            .cast(DataType::Float64)
            .mean()
            .alias(MEAN_RENTALS)])
        .sort(keys.to_vec(), SortMultipleOptions::default())
        .collect()?;

    let key_values = keys
        .iter()
        .map(|key| i64_values(&df, key))
        .collect::<Result<Vec<_>, _>>()?;
    let means = f64_values(&df, MEAN_RENTALS)?;
    Ok((key_values, means))
}
