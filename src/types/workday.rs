use serde::Serialize;
use std::fmt;

/// Value of the `workingday` flag.
///
/// Working days are weekdays that are not holidays; everything else is a
/// non-working day. Ordered so that `NonWorking` (0) sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WorkdayKind {
    NonWorking = 0,
    Working = 1,
}

impl WorkdayKind {
    pub fn from_flag(flag: i64) -> Option<Self> {
        match flag {
            0 => Some(WorkdayKind::NonWorking),
            1 => Some(WorkdayKind::Working),
            _ => None,
        }
    }

    pub fn flag(self) -> i64 {
        self as i64
    }

    pub fn is_working(self) -> bool {
        self == WorkdayKind::Working
    }

    pub fn color(self) -> &'static str {
        match self {
            WorkdayKind::NonWorking => "#FF6B6B",
            WorkdayKind::Working => "#4ECDC4",
        }
    }
}

impl fmt::Display for WorkdayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkdayKind::NonWorking => f.write_str("weekend/holiday"),
            WorkdayKind::Working => f.write_str("working day"),
        }
    }
}
