//! AST types for parsed date format codes.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// The calendar component a field encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Year,
    Month,
    Day,
}

impl FieldKind {
    pub(crate) fn index(&self) -> usize {
        match self {
            FieldKind::Year => 0,
            FieldKind::Month => 1,
            FieldKind::Day => 2,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Year => "year",
            FieldKind::Month => "month",
            FieldKind::Day => "day",
        })
    }
}

/// A date field with its digit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `yyyy` - Four-digit year
    Year4,
    /// `yy` - Two-digit year
    Year2,
    /// `mm` - Month with leading zero (01-12)
    Month2,
    /// `m` - Month without leading zero (1-12)
    Month,
    /// `dd` - Day of month with leading zero (01-31)
    Day2,
    /// `d` - Day of month without leading zero (1-31)
    Day,
}

impl Field {
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Year4 | Field::Year2 => FieldKind::Year,
            Field::Month2 | Field::Month => FieldKind::Month,
            Field::Day2 | Field::Day => FieldKind::Day,
        }
    }

    /// Fewest digits this field occupies in a date string.
    pub fn min_width(&self) -> usize {
        match self {
            Field::Year4 => 4,
            Field::Year2 | Field::Month2 | Field::Day2 => 2,
            Field::Month | Field::Day => 1,
        }
    }

    /// Most digits this field occupies in a date string.
    pub fn max_width(&self) -> usize {
        match self {
            Field::Year4 => 4,
            _ => 2,
        }
    }

    /// Returns true if the field always renders the same number of digits.
    pub fn is_fixed_width(&self) -> bool {
        self.min_width() == self.max_width()
    }

    /// The mask placeholder for this field, e.g. `yyyy` or `m`.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Year4 => "yyyy",
            Field::Year2 => "yy",
            Field::Month2 => "mm",
            Field::Month => "m",
            Field::Day2 => "dd",
            Field::Day => "d",
        }
    }
}

/// A single part of a date format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatPart {
    /// A year, month or day field
    Field(Field),
    /// Literal separator text matched and emitted verbatim
    Literal(String),
}

/// A parsed date format code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// Year, month and day fields interleaved with literal separators.
    Fields(Vec<FormatPart>),
    /// `HUN` - the spreadsheet serial day number itself.
    Serial,
}

impl DateFormat {
    /// Parse a format code string.
    pub fn parse(format_code: &str) -> Result<Self, ParseError> {
        crate::parser::parse(format_code)
    }

    /// Returns the format parts. Empty for [`DateFormat::Serial`].
    pub fn parts(&self) -> &[FormatPart] {
        match self {
            DateFormat::Fields(parts) => parts,
            DateFormat::Serial => &[],
        }
    }

    /// Returns the fields in format order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.parts().iter().filter_map(|part| match part {
            FormatPart::Field(field) => Some(*field),
            FormatPart::Literal(_) => None,
        })
    }

    pub fn is_serial(&self) -> bool {
        matches!(self, DateFormat::Serial)
    }

    /// Compute the normalized specifier for this format.
    pub fn specifier(&self) -> FormatSpecifier {
        if self.is_serial() {
            return FormatSpecifier {
                order: FieldOrder::Serial,
                year: None,
                width: None,
            };
        }

        let kinds: Vec<FieldKind> = self.fields().map(|f| f.kind()).collect();
        let year = self.fields().find(|f| f.kind() == FieldKind::Year);
        let width = if self.fields().all(|f| f.is_fixed_width()) {
            Some(self.fields().map(|f| f.max_width()).sum())
        } else {
            None
        };

        FormatSpecifier {
            order: FieldOrder::from_kinds(&kinds),
            year,
            width,
        }
    }
}

impl FromStr for DateFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Order in which the fields of a format appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    Ymd,
    Ydm,
    Mdy,
    Myd,
    Dmy,
    Dym,
    /// Serial day number, no fields
    Serial,
}

impl FieldOrder {
    fn from_kinds(kinds: &[FieldKind]) -> Self {
        use FieldKind::{Day, Month, Year};
        match kinds {
            [Year, Month, Day] => FieldOrder::Ymd,
            [Year, Day, Month] => FieldOrder::Ydm,
            [Month, Day, Year] => FieldOrder::Mdy,
            [Month, Year, Day] => FieldOrder::Myd,
            [Day, Month, Year] => FieldOrder::Dmy,
            [Day, Year, Month] => FieldOrder::Dym,
            // The parser guarantees exactly one field of each kind.
            _ => FieldOrder::Serial,
        }
    }
}

impl fmt::Display for FieldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldOrder::Ymd => "YMD",
            FieldOrder::Ydm => "YDM",
            FieldOrder::Mdy => "MDY",
            FieldOrder::Myd => "MYD",
            FieldOrder::Dmy => "DMY",
            FieldOrder::Dym => "DYM",
            FieldOrder::Serial => "HUN",
        })
    }
}

/// Normalized description of how a format lays out its digits.
///
/// `Display` renders the printf-style token callers use to zero-pad the
/// numeric form of a date: `%08d` for `yyyymmdd`, or `%d` when the digit
/// count varies (`m/d/yyyy`, `HUN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpecifier {
    order: FieldOrder,
    year: Option<Field>,
    width: Option<usize>,
}

impl FormatSpecifier {
    pub fn order(&self) -> FieldOrder {
        self.order
    }

    /// Number of year digits, or `None` for the serial format.
    pub fn year_digits(&self) -> Option<usize> {
        self.year.map(|f| f.max_width())
    }

    /// Total digit count when every field is fixed width.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Render a numeric date value, zero-padded to the fixed width if any.
    pub fn pad(&self, value: i64) -> String {
        match self.width {
            Some(width) => format!("{:0width$}", value, width = width),
            None => value.to_string(),
        }
    }
}

impl fmt::Display for FormatSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.width {
            Some(width) => write!(f, "%0{}d", width),
            None => f.write_str("%d"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_widths() {
        assert_eq!(Field::Year4.min_width(), 4);
        assert_eq!(Field::Month.min_width(), 1);
        assert_eq!(Field::Month.max_width(), 2);
        assert!(Field::Day2.is_fixed_width());
        assert!(!Field::Day.is_fixed_width());
    }

    #[test]
    fn test_field_order_from_kinds() {
        use FieldKind::*;
        assert_eq!(FieldOrder::from_kinds(&[Month, Day, Year]), FieldOrder::Mdy);
        assert_eq!(FieldOrder::from_kinds(&[Day, Year, Month]), FieldOrder::Dym);
    }

    #[test]
    fn test_pad() {
        let fixed = FormatSpecifier {
            order: FieldOrder::Mdy,
            year: Some(Field::Year4),
            width: Some(8),
        };
        assert_eq!(fixed.pad(1162016), "01162016");
        assert_eq!(fixed.to_string(), "%08d");
    }
}
