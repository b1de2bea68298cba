use dteconv::{convert, ConvertError, DateError, ParseError};

#[test]
fn test_convert_convenience() {
    assert_eq!(
        convert("2016-01-16", "yyyy-mm-dd", "mm/dd/yyyy").unwrap(),
        "01/16/2016"
    );
    assert_eq!(convert("1/16/2016", "m/d/yyyy", "HUN").unwrap(), "42385");
}

#[test]
fn test_convert_invalid_input_format() {
    assert_eq!(
        convert("2016-01-16", "", "mm/dd/yyyy"),
        Err(ConvertError::Format(ParseError::EmptyFormat))
    );
}

#[test]
fn test_convert_invalid_date() {
    let result = convert("2016-1-16", "yyyy-mm-dd", "mm/dd/yyyy");
    assert_eq!(
        result,
        Err(ConvertError::Date(DateError::ExpectedDigit {
            position: 6,
            found: '-'
        }))
    );
}

#[test]
fn test_convert_trailing_input() {
    assert_eq!(
        convert("2016-01-16x", "yyyy-mm-dd", "mm/dd/yyyy"),
        Err(ConvertError::Date(DateError::TrailingInput { position: 10 }))
    );
}
