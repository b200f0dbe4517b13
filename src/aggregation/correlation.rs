use crate::error::BikeShareError;
use crate::types::frames::daily_frame::DailyFrame;
use serde::Serialize;

/// Columns of the covariate correlation matrix, in row/column order.
pub const CORRELATION_COLUMNS: [&str; 4] = ["temp", "hum", "windspeed", "cnt"];

/// Pearson correlations between the weather covariates and daily rentals.
///
/// `values[i][j]` correlates `columns[i]` with `columns[j]`. The matrix is
/// symmetric with `1.0` on the diagonal. A column with zero variance (or a
/// selection of fewer than two days) has `None` in its whole row and column,
/// diagonal included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == row)?;
        let j = self.columns.iter().position(|c| c == column)?;
        self.values[i][j]
    }
}

pub fn covariate_correlation(daily: &DailyFrame) -> Result<CorrelationMatrix, BikeShareError> {
    let mut series = Vec::with_capacity(CORRELATION_COLUMNS.len());
    for column in CORRELATION_COLUMNS {
        let values = if column == "cnt" {
            daily.rentals()?.into_iter().map(|v| v as f64).collect()
        } else {
            daily.covariate(column)?
        };
        series.push(values);
    }
    Ok(correlation_matrix(&CORRELATION_COLUMNS, &series))
}

pub(crate) fn correlation_matrix(columns: &[&str], series: &[Vec<f64>]) -> CorrelationMatrix {
    let n = series.len();
    let defined: Vec<bool> = series.iter().map(|values| has_variance(values)).collect();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        if !defined[i] {
            continue;
        }
        values[i][i] = Some(1.0);
        for j in (i + 1)..n {
            if defined[j] {
                let r = pearson(&series[i], &series[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }
    }
    CorrelationMatrix {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        values,
    }
}

/// At least two values, not all equal.
fn has_variance(values: &[f64]) -> bool {
    match values.split_first() {
        Some((first, rest)) => !rest.is_empty() && rest.iter().any(|v| v != first),
        None => false,
    }
}

/// Sample Pearson correlation, or `None` when either side is constant.
pub(crate) fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    let (xs, ys) = (&xs[..n], &ys[..n]);
    if !has_variance(xs) || !has_variance(ys) {
        return None;
    }
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    // Spreads too small to square underflow to zero.
    let scale = var_x.sqrt() * var_y.sqrt();
    if scale == 0.0 {
        return None;
    }
    Some((covariance / scale).clamp(-1.0, 1.0))
}
