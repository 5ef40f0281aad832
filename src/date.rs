//! date.rs
//!
//! Contribution records only carry a year and a month (`"2025-09"`). This
//! module parses that partial form and turns it into card labels:
//!     "Sep 2025"
//!     "1 year, 2 months ago"
//!
//! The relative label borrows a year when the month difference underflows,
//! the same way a calendar age is computed, just without the day component.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PartialDate {
    first_day: NaiveDate,
}

impl PartialDate {
    /// Parses `YYYY-MM`. Anything else is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let Some((year, month)) = s.split_once('-') else {
            bail!("expected YYYY-MM, got '{s}'");
        };
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !digits(year) || !digits(month) {
            bail!("expected YYYY-MM, got '{s}'");
        }

        let year: i32 = year.parse().with_context(|| format!("invalid year in '{s}'"))?;
        let month: u32 = month.parse().with_context(|| format!("invalid month in '{s}'"))?;
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .with_context(|| format!("month out of range in '{s}'"))?;

        Ok(Self { first_day })
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// e.g. `Sep 2025`
    pub fn label(&self) -> String {
        self.first_day.format("%b %Y").to_string()
    }

    /// Human distance from this month to `today`'s month.
    pub fn elapsed_string(&self, today: NaiveDate) -> String {
        let mut years = today.year() - self.year();
        let mut months = today.month() as i32 - self.month() as i32;

        // Fix month underflow
        if months < 0 {
            years -= 1;
            months += 12;
        }

        if years < 0 {
            return "upcoming".to_string();
        }

        match (years, months) {
            (0, 0) => "this month".to_string(),
            (0, m) => format!("{m} month{} ago", plural(m)),
            (y, 0) => format!("{y} year{} ago", plural(y)),
            (y, m) => format!("{y} year{}, {m} month{} ago", plural(y), plural(m)),
        }
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_year_month() {
        let d = PartialDate::parse("2025-09").unwrap();
        assert_eq!((d.year(), d.month()), (2025, 9));
        assert_eq!(d.label(), "Sep 2025");
    }

    #[test]
    fn rejects_other_shapes() {
        for bad in ["2025", "2025-9", "2025-13", "25-09", "2025-09-01", "yyyy-mm", "+025-09", "2025-+9", ""] {
            assert!(PartialDate::parse(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn orders_chronologically() {
        let a = PartialDate::parse("2024-12").unwrap();
        let b = PartialDate::parse("2025-03").unwrap();
        assert!(a < b);
    }

    #[test]
    fn elapsed_labels() {
        let d = PartialDate::parse("2025-03").unwrap();
        assert_eq!(d.elapsed_string(day(2025, 3, 28)), "this month");
        assert_eq!(d.elapsed_string(day(2025, 4, 1)), "1 month ago");
        assert_eq!(d.elapsed_string(day(2025, 9, 1)), "6 months ago");
        assert_eq!(d.elapsed_string(day(2026, 3, 1)), "1 year ago");
        assert_eq!(d.elapsed_string(day(2027, 1, 15)), "1 year, 10 months ago");
        assert_eq!(d.elapsed_string(day(2028, 5, 15)), "3 years, 2 months ago");
        assert_eq!(d.elapsed_string(day(2025, 2, 1)), "upcoming");
    }

    #[test]
    fn bundled_dates_all_parse() {
        for r in crate::contributions::CONTRIBUTIONS {
            assert!(PartialDate::parse(r.date).is_ok(), "{}", r.date);
        }
    }
}
