//! Date serial number conversion utilities
//!
//! Spreadsheets store dates as serial numbers counting days from a base date.
//! In the 1900 system day 1 = January 1, 1900.
//!
//! The 1900 system includes the infamous leap year bug: 1900 is treated as a
//! leap year (it wasn't), so day 60 is February 29, 1900 (which didn't exist).
//! Every date from March 1, 1900 onwards is one day later than a true day count
//! would give.

/// Serial number of the phantom February 29, 1900.
pub const PHANTOM_LEAP_DAY: u32 = 60;

/// Serial number of December 31, 9999, the last representable date.
pub const MAX_SERIAL: u32 = 2_958_465;

/// Cumulative days before each month in a non-leap year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the year is a leap year under the spreadsheet rule.
///
/// This is the Gregorian rule except that 1900 counts as a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year == 1900 || is_gregorian_leap_year(year)
}

fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a month under the spreadsheet rule,
/// or `None` if the month is outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        Some(29)
    } else {
        Some(DAYS_IN_MONTH[(month - 1) as usize])
    }
}

/// Proleptic Gregorian days before January 1 of `year` (0001-01-01 is day 1).
fn days_before_year(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    y * 365 + y / 4 - y / 100 + y / 400
}

/// Gregorian days before the first of `month` within `year`.
fn days_before_month(year: i32, month: u32) -> i64 {
    let mut days = i64::from(DAYS_BEFORE_MONTH[(month - 1) as usize]);
    if month > 2 && is_gregorian_leap_year(year) {
        days += 1;
    }
    days
}

/// Convert a date (year, month, day) to a serial number.
///
/// The caller is responsible for passing a valid date; see
/// [`Date::new`](crate::Date::new).
///
/// # Leap Year Bug
/// (1900, 2, 29) returns 60, and every later date is shifted up by one.
pub fn date_to_serial(year: i32, month: u32, day: u32) -> u32 {
    if (year, month, day) == (1900, 2, 29) {
        return PHANTOM_LEAP_DAY;
    }

    let ordinal = days_before_year(year) + days_before_month(year, month) + i64::from(day);
    let serial = ordinal - days_before_year(1900);

    // Dates after Feb 28, 1900 make room for the phantom leap day
    let serial = if serial >= i64::from(PHANTOM_LEAP_DAY) {
        serial + 1
    } else {
        serial
    };

    serial as u32
}

/// Convert a serial number to a date (year, month, day).
///
/// Returns `None` for serial 0 and anything past [`MAX_SERIAL`].
///
/// # Leap Year Bug
/// Day 60 returns (1900, 2, 29) even though February 29, 1900 didn't exist.
pub fn serial_to_date(serial: u32) -> Option<(i32, u32, u32)> {
    if serial == 0 || serial > MAX_SERIAL {
        return None;
    }
    if serial == PHANTOM_LEAP_DAY {
        return Some((1900, 2, 29));
    }

    let adjusted = if serial > PHANTOM_LEAP_DAY {
        serial - 1
    } else {
        serial
    };
    let ordinal = i64::from(adjusted) + days_before_year(1900);

    // Estimate the year from the 400-year cycle, then correct by at most one
    let mut year = (ordinal * 400 / 146_097) as i32 + 1;
    while days_before_year(year) >= ordinal {
        year -= 1;
    }
    while days_before_year(year + 1) < ordinal {
        year += 1;
    }

    let day_of_year = (ordinal - days_before_year(year)) as u32;
    let mut month = 12;
    while i64::from(day_of_year) <= days_before_month(year, month) {
        month -= 1;
    }
    let day = (i64::from(day_of_year) - days_before_month(year, month)) as u32;

    Some((year, month, day))
}
