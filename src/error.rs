//! Error types for parsing format codes, reading date strings and converting.

use thiserror::Error;

use crate::ast::FieldKind;

/// Errors that can occur when parsing a date format code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty format code")]
    EmptyFormat,

    #[error("unknown field letter at position {position}: found '{found}'")]
    UnknownField { position: usize, found: char },

    #[error("invalid {field} run at position {position}: length {length}")]
    InvalidRunLength {
        position: usize,
        field: FieldKind,
        length: usize,
    },

    #[error("duplicate {field} field at position {position}")]
    DuplicateField { position: usize, field: FieldKind },

    #[error("format code has no {field} field")]
    MissingField { field: FieldKind },

    #[error("serial keyword at position {position} must be the whole format code")]
    MisplacedSerial { position: usize },
}

/// Errors that can occur when reading a date string or building a date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date string ended at position {position}")]
    UnexpectedEnd { position: usize },

    #[error("expected digit at position {position}: found '{found}'")]
    ExpectedDigit { position: usize, found: char },

    #[error("expected separator '{expected}' at position {position}")]
    SeparatorMismatch { position: usize, expected: String },

    #[error("unexpected trailing input at position {position}")]
    TrailingInput { position: usize },

    #[error("year {0} is outside 1900..=9999")]
    YearOutOfRange(i32),

    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),

    #[error("day {day} is out of range for {year}-{month:02}")]
    DayOutOfRange { year: i32, month: u32, day: u32 },

    #[error("serial number {0} is out of range")]
    SerialOutOfRange(u64),
}

/// Errors surfaced by [`DateConverter`](crate::DateConverter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("no date has been set")]
    NoDate,

    #[error("invalid date separator: {0:?}")]
    InvalidSeparator(String),

    #[error(transparent)]
    Format(#[from] ParseError),

    #[error(transparent)]
    Date(#[from] DateError),
}
