//! Defines the `Season` enum, mapping the integer `season` codes of the
//! bike-sharing tables to named seasons.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Season of a record, as encoded by the `season` column (1 to 4).
///
/// The mapping from code to season is total over the four valid codes. Any
/// other code is rejected when the tables are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    /// Code 1.
    Spring = 1,
    /// Code 2.
    Summer = 2,
    /// Code 3.
    Fall = 3,
    /// Code 4.
    Winter = 4,
}

impl Season {
    /// All seasons in code order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Converts a `season` column code into a `Season`.
    ///
    /// # Returns
    ///
    /// * `Some(Season)` for codes 1 through 4.
    /// * `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bikeshare::Season;
    ///
    /// assert_eq!(Season::from_code(1), Some(Season::Spring));
    /// assert_eq!(Season::from_code(4), Some(Season::Winter));
    /// assert_eq!(Season::from_code(5), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }

    /// The value stored in the derived `season_name` column.
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    /// Chart color of the season.
    pub fn color(self) -> &'static str {
        match self {
            Season::Spring => "#00ff9f",
            Season::Summer => "#ffd700",
            Season::Fall => "#ff6b6b",
            Season::Winter => "#45b7d1",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeason(pub String);

impl fmt::Display for UnknownSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown season '{}', expected one of Spring, Summer, Fall, Winter",
            self.0
        )
    }
}

impl std::error::Error for UnknownSeason {}

/// Parses a season name, ignoring case and surrounding whitespace.
impl FromStr for Season {
    type Err = UnknownSeason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Season::ALL
            .into_iter()
            .find(|season| season.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSeason(s.to_string()))
    }
}
