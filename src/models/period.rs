//! Reporting period representation
//!
//! A period is a keyword selecting a date range relative to "today".
//! The caller always supplies today's date, so filtering is deterministic.

use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Days before today still included in the `week` window
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// A period filter for listings and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Today only
    Day,
    /// Today and the seven days before it
    Week,
    /// The current calendar month
    #[default]
    Month,
    /// The current calendar year
    Year,
    /// Everything
    All,
}

impl Period {
    /// All periods in display order
    pub fn all() -> &'static [Period] {
        &[
            Period::Day,
            Period::Week,
            Period::Month,
            Period::Year,
            Period::All,
        ]
    }

    /// Lowercase keyword for this period
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }

    /// Inclusive date bounds of this period relative to `today`
    ///
    /// Returns `None` for [`Period::All`], which has no bounds.
    pub fn date_range(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::Day => Some((today, today)),
            Self::Week => Some((today - Duration::days(WEEK_WINDOW_DAYS), today)),
            Self::Month => {
                let start = today.with_day(1)?;
                let next_month = if today.month() == 12 {
                    NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
                };
                Some((start, next_month? - Duration::days(1)))
            }
            Self::Year => Some((
                NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(today.year(), 12, 31)?,
            )),
            Self::All => None,
        }
    }

    /// Check if a date falls within this period relative to `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.date_range(today) {
            Some((start, end)) => date >= start && date <= end,
            None => true,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown period '{}'. Expected one of: day, week, month, year, all",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day() {
        let today = date(2025, 3, 15);
        assert!(Period::Day.contains(today, today));
        assert!(!Period::Day.contains(date(2025, 3, 14), today));
        assert!(!Period::Day.contains(date(2025, 3, 16), today));
    }

    #[test]
    fn test_week_is_trailing_window() {
        let today = date(2025, 3, 5);
        assert!(Period::Week.contains(date(2025, 2, 26), today));
        assert!(!Period::Week.contains(date(2025, 2, 25), today));
        assert!(Period::Week.contains(today, today));
        assert!(!Period::Week.contains(date(2025, 3, 6), today));
    }

    #[test]
    fn test_month_crosses_year_end() {
        let today = date(2024, 12, 10);
        let (start, end) = Period::Month.date_range(today).unwrap();
        assert_eq!(start, date(2024, 12, 1));
        assert_eq!(end, date(2024, 12, 31));
    }

    #[test]
    fn test_month_in_leap_february() {
        let (_, end) = Period::Month.date_range(date(2024, 2, 3)).unwrap();
        assert_eq!(end, date(2024, 2, 29));
    }

    #[test]
    fn test_month_includes_later_days() {
        let today = date(2025, 6, 1);
        assert!(Period::Month.contains(date(2025, 6, 30), today));
        assert!(!Period::Month.contains(date(2025, 5, 31), today));
    }

    #[test]
    fn test_year() {
        let today = date(2025, 6, 1);
        assert!(Period::Year.contains(date(2025, 1, 1), today));
        assert!(Period::Year.contains(date(2025, 12, 31), today));
        assert!(!Period::Year.contains(date(2024, 12, 31), today));
    }

    #[test]
    fn test_all() {
        let today = date(2025, 6, 1);
        assert_eq!(Period::All.date_range(today), None);
        assert!(Period::All.contains(date(1999, 1, 1), today));
    }

    #[test]
    fn test_parse() {
        assert_eq!("WEEK".parse::<Period>().unwrap(), Period::Week);
        assert_eq!(" all ".parse::<Period>().unwrap(), Period::All);
        assert!("fortnight".parse::<Period>().is_err());
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Period::Month.to_string(), "month");
        assert_eq!(serde_json::to_string(&Period::Year).unwrap(), "\"year\"");
        assert_eq!(Period::default(), Period::Month);
    }
}
