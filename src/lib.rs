//! dteconv - spreadsheet-compatible date conversion
//!
//! This crate parses date strings described by simple `y`/`m`/`d` format codes
//! (`mm/dd/yyyy`, `yyyymmdd`, `d.m.yy`, ...) and renders them in any other such
//! format, as text or as a number. Dates are stored as spreadsheet serial day
//! numbers in the 1900 date system, including its leap year bug: day 1 is
//! January 1, 1900 and day 60 is the nonexistent February 29, 1900.

pub mod ast;
pub mod date;
pub mod date_serial;
pub mod error;
pub mod options;
pub mod parser;

mod cache;
mod converter;
mod formatter;
mod scanner;

pub use ast::{DateFormat, Field, FieldKind, FieldOrder, FormatPart, FormatSpecifier};
pub use converter::DateConverter;
pub use date::{CalendarYear, Date};
pub use error::{ConvertError, DateError, ParseError};
pub use options::ConverterOptions;

/// Convert a date string from one format to another in one call.
///
/// Uses the default separator for positions where two fields meet.
///
/// ```
/// assert_eq!(
///     dteconv::convert("16.01.2016", "dd.mm.yyyy", "yyyy-mm-dd").unwrap(),
///     "2016-01-16"
/// );
/// ```
pub fn convert(
    input: &str,
    input_format: &str,
    output_format: &str,
) -> Result<String, ConvertError> {
    let mut conv = DateConverter::new();
    conv.set_date(input, input_format)?;
    conv.string_for_format(output_format)
}
