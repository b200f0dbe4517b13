use crate::error::BikeShareError;
use crate::types::season::Season;
use crate::types::traits::any::any_date::AnyDate;
use crate::types::traits::types::DateRange;
use polars::prelude::{col, lit, Expr, LazyFrame};

pub trait BikeFrameFilterExt {
    /// Keeps rows whose `dteday` lies in `range` (both ends inclusive).
    /// Assumes `dteday` is already of type `Date`.
    fn filter_date_range(self, range: DateRange) -> LazyFrame;

    /// Keeps rows whose `season_name` is one of `seasons`.
    ///
    /// An empty slice keeps nothing.
    fn filter_seasons(self, seasons: &[Season]) -> LazyFrame;
}

impl BikeFrameFilterExt for LazyFrame {
    fn filter_date_range(self, range: DateRange) -> LazyFrame {
        self.filter(
            col("dteday")
                .gt_eq(lit(range.start))
                .and(col("dteday").lt_eq(lit(range.end))),
        )
    }

    fn filter_seasons(self, seasons: &[Season]) -> LazyFrame {
        self.filter(season_predicate(seasons))
    }
}

fn season_predicate(seasons: &[Season]) -> Expr {
    seasons
        .iter()
        .map(|season| col("season_name").eq(lit(season.name())))
        .reduce(|acc, expr| acc.or(expr))
        .unwrap_or_else(|| lit(false))
}

/// Resolves two endpoints into an inclusive range.
///
/// The start endpoint contributes the first day of its span, the end endpoint
/// the last day, so `(Year(2011), Year(2011))` covers the whole year.
///
/// # Errors
///
/// Returns [`BikeShareError::DateParsing`] if either endpoint cannot be resolved and
/// [`BikeShareError::InvalidRange`] if the start falls after the end.
pub fn resolve_range(start: impl AnyDate, end: impl AnyDate) -> Result<DateRange, BikeShareError> {
    let start = start
        .get_date_range()
        .ok_or(BikeShareError::DateParsing)?
        .start;
    let end = end
        .get_date_range()
        .ok_or(BikeShareError::DateParsing)?
        .end;
    if start > end {
        return Err(BikeShareError::InvalidRange { start, end });
    }
    Ok(DateRange { start, end })
}
