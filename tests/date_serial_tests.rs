use dteconv::date_serial::{date_to_serial, is_leap_year, serial_to_date, MAX_SERIAL, PHANTOM_LEAP_DAY};
use dteconv::{Date, DateError};

#[test]
fn test_serial_to_date_1900_basic() {
    // Day 1 = January 1, 1900
    assert_eq!(serial_to_date(1), Some((1900, 1, 1)));
    assert_eq!(serial_to_date(31), Some((1900, 1, 31)));
    assert_eq!(serial_to_date(32), Some((1900, 2, 1)));
}

#[test]
fn test_serial_to_date_1900_day_60() {
    // Day 60 = February 29, 1900 (spreadsheet bug - this date doesn't exist)
    assert_eq!(serial_to_date(PHANTOM_LEAP_DAY), Some((1900, 2, 29)));
    assert_eq!(date_to_serial(1900, 2, 29), 60);
}

#[test]
fn test_serial_around_phantom_day() {
    assert_eq!(date_to_serial(1900, 2, 28), 59);
    assert_eq!(date_to_serial(1900, 3, 1), 61);
    assert_eq!(serial_to_date(59), Some((1900, 2, 28)));
    assert_eq!(serial_to_date(61), Some((1900, 3, 1)));
}

#[test]
fn test_serial_to_date_known_dates() {
    assert_eq!(serial_to_date(42385), Some((2016, 1, 16)));
    assert_eq!(serial_to_date(46031), Some((2026, 1, 9)));
    assert_eq!(serial_to_date(36526), Some((2000, 1, 1)));
    assert_eq!(serial_to_date(367), Some((1901, 1, 1)));
}

#[test]
fn test_date_to_serial() {
    assert_eq!(date_to_serial(2016, 1, 16), 42385);
    assert_eq!(date_to_serial(2026, 1, 9), 46031);
    assert_eq!(date_to_serial(1900, 12, 31), 366);
}

#[test]
fn test_every_serial_in_first_years_round_trips() {
    for serial in 1..=3000 {
        let (y, m, d) = serial_to_date(serial).unwrap();
        assert_eq!(date_to_serial(y, m, d), serial, "serial {}", serial);
    }
}

#[test]
fn test_out_of_range_serials() {
    assert_eq!(serial_to_date(0), None);
    assert_eq!(serial_to_date(MAX_SERIAL + 1), None);
    assert_eq!(Date::from_serial(0), Err(DateError::SerialOutOfRange(0)));
}

#[test]
fn test_spreadsheet_leap_years() {
    for year in [1900, 1904, 2000, 2016, 2024] {
        assert!(is_leap_year(year), "{}", year);
    }
    for year in [1901, 1903, 1999, 2100, 2200] {
        assert!(!is_leap_year(year), "{}", year);
    }
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_interop() {
    use chrono::NaiveDate;

    let naive = NaiveDate::from_ymd_opt(2016, 1, 16).unwrap();
    let date = Date::try_from(naive).unwrap();
    assert_eq!(date.serial(), 42385);
    assert_eq!(NaiveDate::try_from(date).unwrap(), naive);

    // The phantom day has no chrono counterpart
    let phantom = Date::from_serial(60).unwrap();
    assert!(NaiveDate::try_from(phantom).is_err());

    let too_early = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
    assert_eq!(Date::try_from(too_early), Err(DateError::YearOutOfRange(1899)));
}

#[cfg(feature = "chrono")]
#[test]
fn test_serial_matches_chrono_day_count() {
    use chrono::NaiveDate;

    // From March 1, 1900 on, serials run one day ahead of a true count from 1899-12-31
    let base = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
    for (y, m, d) in [(1900, 3, 1), (1970, 1, 1), (2016, 1, 16), (9999, 12, 31)] {
        let naive = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let days = (naive - base).num_days() as u32;
        assert_eq!(date_to_serial(y, m, d), days + 1);
    }
}
