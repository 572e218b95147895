//! Calendar arithmetic and date-string conversions.
//!
//! Two textual date formats exist: `DD-MM-YYYY` is used at rest and in the
//! UI, `YYYY-MM-DD` only by the native date picker. All conversions between
//! the two go through this module. Months are 0-based (`month0`) throughout.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// One position in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarCell {
    /// Empty slot before the first day of the month
    Padding,
    /// Day of the month, 1-based
    Day(u32),
}

impl CalendarCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Padding => None,
            CalendarCell::Day(day) => Some(*day),
        }
    }
}

/// Year and 0-based month currently shown by the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        Self { year, month0 }
    }

    /// Following month, wrapping December into January of the next year
    pub fn next(self) -> Self {
        if self.month0 >= 11 {
            Self::new(self.year + 1, 0)
        } else {
            Self::new(self.year, self.month0 + 1)
        }
    }

    /// Preceding month, wrapping January into December of the previous year
    pub fn previous(self) -> Self {
        if self.month0 == 0 {
            Self::new(self.year - 1, 11)
        } else {
            Self::new(self.year, self.month0 - 1)
        }
    }
}

impl From<NaiveDate> for MonthCursor {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }
}

/// Format a date as `DD-MM-YYYY`
pub fn format_full_date(year: i32, month0: u32, day: u32) -> String {
    format!("{:02}-{:02}-{}", day, month0 + 1, year)
}

pub fn format_naive_date(date: NaiveDate) -> String {
    format_full_date(date.year(), date.month0(), date.day())
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the month, or `None` for an out-of-range month
pub fn days_in_month(year: i32, month0: u32) -> Option<u32> {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => Some(31),
        3 | 5 | 8 | 10 => Some(30),
        1 => Some(if is_leap_year(year) { 29 } else { 28 }),
        _ => None,
    }
}

/// Weekday of the first day of the month (0 = Sunday .. 6 = Saturday)
pub fn first_weekday(year: i32, month0: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).map(|date| date.weekday().num_days_from_sunday())
}

/// Leading padding cells followed by every day of the month
///
/// No trailing padding is produced; the grid simply stops after the last
/// day. An invalid month yields an empty sequence.
pub fn generate_calendar_days(year: i32, month0: u32) -> Vec<CalendarCell> {
    let (Some(leading), Some(days)) = (first_weekday(year, month0), days_in_month(year, month0)) else {
        return Vec::new();
    };

    let mut cells = Vec::with_capacity((leading + days) as usize);
    cells.extend((0..leading).map(|_| CalendarCell::Padding));
    cells.extend((1..=days).map(CalendarCell::Day));
    cells
}

pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("Invalid Month")
}

/// Header title such as "March 2024"
pub fn month_title(year: i32, month0: u32) -> String {
    format!("{} {}", month_name(month0), year)
}

/// Parse `DD-MM-YYYY` into `(year, month0, day)`
///
/// Only the shape is checked; `31-02-2024` parses. Callers use this for
/// filtering, where a non-match is the only consequence.
pub fn parse_full_date(date: &str) -> Option<(i32, u32, u32)> {
    let mut parts = date.split('-');
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = parts.next()?.trim().parse::<u32>().ok()?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() || month == 0 {
        return None;
    }
    Some((year, month - 1, day))
}

/// Parse the date picker's `YYYY-MM-DD` value
pub fn parse_picker_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Convert a `DD-MM-YYYY` date into the picker's `YYYY-MM-DD` format
pub fn to_picker_date(date: &str) -> Option<String> {
    let (year, month0, day) = parse_full_date(date)?;
    NaiveDate::from_ymd_opt(year, month0 + 1, day).map(|d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_full_date() {
        assert_eq!(format_full_date(2024, 0, 5), "05-01-2024");
        assert_eq!(format_full_date(2024, 11, 31), "31-12-2024");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 0), Some(31)); // January
        assert_eq!(days_in_month(2025, 3), Some(30)); // April
        assert_eq!(days_in_month(2023, 1), Some(28)); // February (non-leap)
        assert_eq!(days_in_month(2024, 1), Some(29)); // February (leap year)
        assert_eq!(days_in_month(2024, 11), Some(31)); // December
        assert_eq!(days_in_month(1900, 1), Some(28));
        assert_eq!(days_in_month(2000, 1), Some(29));
        assert_eq!(days_in_month(2024, 12), None);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_generate_calendar_days_march_2024() {
        // 1 March 2024 was a Friday
        let cells = generate_calendar_days(2024, 2);
        assert_eq!(cells.len(), 5 + 31);
        assert!(cells[..5].iter().all(|c| *c == CalendarCell::Padding));
        assert_eq!(cells[5], CalendarCell::Day(1));
        assert_eq!(cells.last(), Some(&CalendarCell::Day(31)));
    }

    #[test]
    fn test_generate_calendar_days_starting_sunday() {
        // 1 September 2024 was a Sunday
        let cells = generate_calendar_days(2024, 8);
        assert_eq!(cells.first(), Some(&CalendarCell::Day(1)));
        assert_eq!(cells.len(), 30);
    }

    #[test]
    fn test_generate_calendar_days_invalid_month() {
        assert!(generate_calendar_days(2024, 12).is_empty());
    }

    #[test]
    fn test_month_cursor_wraps() {
        assert_eq!(MonthCursor::new(2024, 11).next(), MonthCursor::new(2025, 0));
        assert_eq!(MonthCursor::new(2024, 0).previous(), MonthCursor::new(2023, 11));
        assert_eq!(MonthCursor::new(2024, 5).next(), MonthCursor::new(2024, 6));
        assert_eq!(MonthCursor::new(2024, 5).previous(), MonthCursor::new(2024, 4));
    }

    #[test]
    fn test_month_title() {
        assert_eq!(month_title(2024, 2), "March 2024");
        assert_eq!(month_name(12), "Invalid Month");
    }

    #[test]
    fn test_parse_full_date() {
        assert_eq!(parse_full_date("15-03-2024"), Some((2024, 2, 15)));
        // Shape-only: picker-format input is misread rather than rejected
        assert_eq!(parse_full_date("2024-03-15"), Some((15, 2, 2024)));
        assert_eq!(parse_full_date("garbage"), None);
        assert_eq!(parse_full_date("01-00-2024"), None);
        assert_eq!(parse_full_date("01-03-2024-extra"), None);
        assert_eq!(parse_full_date(""), None);
    }

    #[test]
    fn test_picker_date_conversion() {
        let date = parse_picker_date("2024-03-15").unwrap();
        assert_eq!(format_naive_date(date), "15-03-2024");
        assert_eq!(to_picker_date("15-03-2024").as_deref(), Some("2024-03-15"));
        assert!(parse_picker_date("15-03-2024").is_none());
        assert!(parse_picker_date("").is_none());
    }

    proptest! {
        #[test]
        fn prop_grid_length_is_padding_plus_month_length(year in 1600i32..2400, month0 in 0u32..12) {
            let cells = generate_calendar_days(year, month0);
            let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
            let leading = first.weekday().num_days_from_sunday() as usize;
            let padding = cells.iter().take_while(|c| **c == CalendarCell::Padding).count();

            prop_assert_eq!(padding, leading);
            prop_assert_eq!(cells.len(), leading + days_in_month(year, month0).unwrap() as usize);
            prop_assert!(cells[leading..].iter().enumerate().all(|(i, c)| *c == CalendarCell::Day(i as u32 + 1)));
        }
    }
}
