use dteconv::{ConvertError, DateError, FieldKind, ParseError};

#[test]
fn test_parse_error_display() {
    let err = ParseError::UnknownField {
        position: 5,
        found: 'x',
    };
    let msg = format!("{}", err);
    assert!(msg.contains("position 5"));
    assert!(msg.contains("'x'"));
}

#[test]
fn test_run_length_error_names_field() {
    let err = ParseError::InvalidRunLength {
        position: 0,
        field: FieldKind::Year,
        length: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("year"));
    assert!(msg.contains("3"));
}

#[test]
fn test_date_error_display() {
    let err = DateError::DayOutOfRange {
        year: 2016,
        month: 2,
        day: 30,
    };
    assert_eq!(err.to_string(), "day 30 is out of range for 2016-02");
}

#[test]
fn test_convert_error_is_transparent() {
    let inner = DateError::MonthOutOfRange(13);
    let err = ConvertError::from(inner.clone());
    assert_eq!(err.to_string(), inner.to_string());
    assert_eq!(ConvertError::NoDate.to_string(), "no date has been set");
}
