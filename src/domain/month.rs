use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Composite (year, month) key with total ordering.
///
/// Field order gives the derived `Ord` chronological semantics, so keys sort
/// correctly across year boundaries where string keys would not.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {month}");
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Linear month index (months since year 0), used for rollover arithmetic.
    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }

    /// The key `months` calendar months after this one, rolling over years.
    pub fn plus_months(self, months: u32) -> Self {
        Self::from_index(self.index() + i64::from(months))
    }
}

/// Renders the chart label form, `YYYY-MM`.
impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_months_rolls_over_years() {
        let start = MonthKey::new(2024, 11);
        assert_eq!(start.plus_months(0), MonthKey::new(2024, 11));
        assert_eq!(start.plus_months(1), MonthKey::new(2024, 12));
        assert_eq!(start.plus_months(2), MonthKey::new(2025, 1));
        assert_eq!(start.plus_months(14), MonthKey::new(2026, 1));
    }

    #[test]
    fn ordering_is_chronological_across_years() {
        let december = MonthKey::new(2024, 12);
        let january = MonthKey::new(2025, 1);
        assert!(december < january);
    }

    #[test]
    fn display_uses_chart_label_form() {
        assert_eq!(MonthKey::new(2025, 3).to_string(), "2025-03");
    }

    #[test]
    fn from_date_takes_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 19).unwrap();
        assert_eq!(MonthKey::from_date(date), MonthKey::new(2025, 7));
    }
}
