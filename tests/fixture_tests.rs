//! Table-driven conversion tests loaded from fixtures/conversions.json.

use dteconv::DateConverter;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ConversionCase {
    input: String,
    input_format: String,
    output_format: String,
    separator: String,
    string: String,
    number: i64,
    serial: u32,
}

fn load_test_cases() -> Vec<ConversionCase> {
    let json_data = include_str!("fixtures/conversions.json");
    serde_json::from_str(json_data).expect("Failed to parse conversions.json")
}

#[test]
fn test_fixture_conversions() {
    let cases = load_test_cases();
    assert!(!cases.is_empty());

    let mut failures = Vec::new();

    for case in &cases {
        let mut conv = DateConverter::new();
        conv.set_date_separator(&case.separator).unwrap();
        if let Err(err) = conv.set_date(&case.input, &case.input_format) {
            failures.push(format!("{:?}: set_date failed: {}", case.input, err));
            continue;
        }

        let string = conv.string_for_format(&case.output_format).unwrap();
        let number = conv.number_for_format(&case.output_format).unwrap();
        let serial = conv.serial().unwrap();

        if string != case.string || number != case.number || serial != case.serial {
            failures.push(format!(
                "{:?} ({}) -> {}: got ({:?}, {}, {}), expected ({:?}, {}, {})",
                case.input,
                case.input_format,
                case.output_format,
                string,
                number,
                serial,
                case.string,
                case.number,
                case.serial
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn test_fixture_strings_read_back() {
    for case in load_test_cases() {
        let mut conv = DateConverter::new();
        conv.set_date_separator(&case.separator).unwrap();
        conv.set_date(&case.input, &case.input_format).unwrap();

        // The rendered string parses back to the same serial
        let mut reread = DateConverter::new();
        reread.set_date_separator(&case.separator).unwrap();
        reread.set_date(&case.string, &case.output_format).unwrap();
        assert_eq!(reread.serial().unwrap(), case.serial, "{:?}", case.string);
    }
}
