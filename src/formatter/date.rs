//! Date rendering

use crate::ast::{DateFormat, Field, FormatPart};
use crate::date::Date;

/// Render a date as a string using the given format.
///
/// Literal separators are emitted as written. Where two fields sit next to
/// each other with no literal between them, `separator` is inserted.
pub fn format_date(date: &Date, format: &DateFormat, separator: &str) -> String {
    let parts = match format {
        DateFormat::Serial => return date.serial().to_string(),
        DateFormat::Fields(parts) => parts,
    };

    let mut result = String::new();
    let mut prev_field = false;

    for part in parts {
        match part {
            FormatPart::Field(field) => {
                if prev_field {
                    result.push_str(separator);
                }
                result.push_str(&format_field(*field, date));
                prev_field = true;
            }
            FormatPart::Literal(s) => {
                result.push_str(s);
                prev_field = false;
            }
        }
    }

    result
}

/// Render a date as the integer formed by its field digits in format order.
///
/// `yyyymmdd` gives `20160116`; leading zeros of the first field are lost,
/// see [`FormatSpecifier::pad`](crate::FormatSpecifier::pad).
pub fn format_date_number(date: &Date, format: &DateFormat) -> i64 {
    if format.is_serial() {
        return i64::from(date.serial());
    }

    format
        .fields()
        .flat_map(|field| format_field(field, date).into_bytes())
        .fold(0i64, |acc, digit| acc * 10 + i64::from(digit - b'0'))
}

/// Format a single field.
fn format_field(field: Field, date: &Date) -> String {
    match field {
        Field::Year4 => format!("{:04}", date.year()),
        Field::Year2 => format!("{:02}", date.year() % 100),
        Field::Month2 => format!("{:02}", date.month()),
        Field::Month => format!("{}", date.month()),
        Field::Day2 => format!("{:02}", date.day()),
        Field::Day => format!("{}", date.day()),
    }
}
