//! Defines the two tables the dashboard reads and the columns each must carry.

use std::fmt;

/// Granularity of a bike-sharing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// One row per calendar day (`day.csv`).
    Daily,
    /// One row per (day, hour-of-day) pair (`hour.csv`).
    Hourly,
}

impl TableKind {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            TableKind::Daily => "daily",
            TableKind::Hourly => "hourly",
        }
    }

    pub(crate) fn default_file_name(&self) -> &'static str {
        match self {
            TableKind::Daily => "day.csv",
            TableKind::Hourly => "hour.csv",
        }
    }

    /// Integer columns the loader casts to `Int64` and checks for nulls.
    pub(crate) fn integer_columns(&self) -> &'static [&'static str] {
        match self {
            TableKind::Daily => &["season", "yr", "mnth", "workingday", "cnt"],
            TableKind::Hourly => &["season", "yr", "mnth", "hr", "weekday", "workingday", "cnt"],
        }
    }

    /// Covariate columns the loader casts to `Float64` and checks for nulls.
    pub(crate) fn float_columns(&self) -> &'static [&'static str] {
        &["temp", "hum", "windspeed"]
    }

    /// Every column the loader requires, date column first.
    pub(crate) fn required_columns(&self) -> Vec<&'static str> {
        let mut columns = vec!["dteday"];
        columns.extend_from_slice(self.integer_columns());
        columns.extend_from_slice(self.float_columns());
        columns
    }

    /// Inclusive bounds for integer columns that have a fixed domain.
    pub(crate) fn bounded_columns(&self) -> &'static [(&'static str, i64, i64)] {
        match self {
            TableKind::Daily => &[("mnth", 1, 12), ("workingday", 0, 1)],
            TableKind::Hourly => &[
                ("mnth", 1, 12),
                ("workingday", 0, 1),
                ("hr", 0, 23),
                ("weekday", 0, 6),
            ],
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_columns() {
        let daily = TableKind::Daily.required_columns();
        assert_eq!(daily[0], "dteday");
        assert!(daily.contains(&"cnt"));
        assert!(!daily.contains(&"hr"));

        let hourly = TableKind::Hourly.required_columns();
        assert!(hourly.contains(&"hr"));
        assert!(hourly.contains(&"weekday"));
        assert_eq!(TableKind::Hourly.to_string(), "hourly");
    }
}
