use crate::types::traits::types::{DateRange, Month, Year};
use crate::types::traits::utils::days_in_month;
use chrono::NaiveDate;

/// Anything that resolves to an inclusive span of days.
///
/// Filter endpoints accept any `AnyDate`: a start endpoint uses the first day
/// of its span, an end endpoint the last day.
pub trait AnyDate {
    fn get_date_range(self) -> Option<DateRange>;
}

impl AnyDate for NaiveDate {
    fn get_date_range(self) -> Option<DateRange> {
        Some(DateRange {
            start: self,
            end: self,
        })
    }
}

impl AnyDate for &str {
    fn get_date_range(self) -> Option<DateRange> {
        NaiveDate::parse_from_str(self.trim(), "%Y-%m-%d")
            .ok()?
            .get_date_range()
    }
}

impl AnyDate for String {
    fn get_date_range(self) -> Option<DateRange> {
        self.as_str().get_date_range()
    }
}

impl AnyDate for Year {
    fn get_date_range(self) -> Option<DateRange> {
        Some(DateRange {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl AnyDate for Month {
    fn get_date_range(self) -> Option<DateRange> {
        let year = self.year();
        let month = self.month();
        Some(DateRange {
            start: NaiveDate::from_ymd_opt(year, month, 1)?,
            end: NaiveDate::from_ymd_opt(year, month, days_in_month(year, month)?)?,
        })
    }
}

impl AnyDate for DateRange {
    fn get_date_range(self) -> Option<DateRange> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_parses_iso_date() {
        let range = "2011-03-05".get_date_range().unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2011, 3, 5).unwrap());
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_str_rejects_garbage() {
        assert!("05/03/2011".get_date_range().is_none());
        assert!("not a date".to_string().get_date_range().is_none());
    }

    #[test]
    fn test_year_and_month_spans() {
        let year = Year(2012).get_date_range().unwrap();
        assert_eq!(year.start, NaiveDate::from_ymd_opt(2012, 1, 1).unwrap());
        assert_eq!(year.end, NaiveDate::from_ymd_opt(2012, 12, 31).unwrap());

        let feb = Month::new(2, 2012).get_date_range().unwrap();
        assert_eq!(feb.end, NaiveDate::from_ymd_opt(2012, 2, 29).unwrap());

        assert!(Month::new(13, 2012).get_date_range().is_none());
    }
}
