//! Calendar dates in the spreadsheet 1900 date system.

use std::fmt;

use crate::date_serial::{date_to_serial, days_in_month, is_leap_year, serial_to_date};
use crate::error::DateError;

/// First representable year.
pub const MIN_YEAR: i32 = 1900;
/// Last representable year.
pub const MAX_YEAR: i32 = 9999;

/// A validated calendar date between 1900-01-01 and 9999-12-31.
///
/// February 29, 1900 is a valid `Date` (serial 60) to match spreadsheet
/// arithmetic, even though it does not exist in the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Build a date, validating every component.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange(year));
        }
        let max_day = days_in_month(year, month).ok_or(DateError::MonthOutOfRange(month))?;
        if day == 0 || day > max_day {
            return Err(DateError::DayOutOfRange { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Build a date from a serial day number (1 = 1900-01-01).
    pub fn from_serial(serial: u32) -> Result<Self, DateError> {
        let (year, month, day) =
            serial_to_date(serial).ok_or(DateError::SerialOutOfRange(u64::from(serial)))?;
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The serial day number of this date.
    pub fn serial(&self) -> u32 {
        date_to_serial(self.year, self.month, self.day)
    }

    /// Returns true if this date's year is a leap year under the spreadsheet rule.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Anything that carries a calendar year for leap year checks.
pub trait CalendarYear {
    fn calendar_year(&self) -> i32;
}

impl CalendarYear for Date {
    fn calendar_year(&self) -> i32 {
        self.year
    }
}

impl CalendarYear for i32 {
    fn calendar_year(&self) -> i32 {
        *self
    }
}

#[cfg(feature = "chrono")]
impl CalendarYear for chrono::NaiveDate {
    fn calendar_year(&self) -> i32 {
        chrono::Datelike::year(self)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = DateError;

    fn try_from(d: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;
        Date::new(d.year(), d.month(), d.day())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = DateError;

    /// Fails only for the phantom 1900-02-29.
    fn try_from(d: Date) -> Result<Self, Self::Error> {
        chrono::NaiveDate::from_ymd_opt(d.year, d.month, d.day).ok_or(DateError::DayOutOfRange {
            year: d.year,
            month: d.month,
            day: d.day,
        })
    }
}
