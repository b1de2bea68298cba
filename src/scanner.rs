//! Reading date strings against a parsed format.
//!
//! Fixed-width fields consume exactly their width in ASCII digits. Flexible
//! fields (`m`, `d`) first try two digits, when the input still has room for
//! everything that follows, and fall back to one digit if the rest of the
//! string then fails to read. Literals must match verbatim. Where two fields
//! meet without a literal, the configured date separator may appear and is
//! skipped, so text produced by [`DateFormat::format`] reads back in.

use crate::ast::{DateFormat, Field, FieldKind, FormatPart};
use crate::date::Date;
use crate::error::DateError;

/// Two-digit years below this map to 20xx, the rest to 19xx.
pub const TWO_DIGIT_YEAR_PIVOT: u32 = 30;

/// Parse `input` according to `format`, validating the resulting date.
pub fn scan_date(input: &str, format: &DateFormat, separator: &str) -> Result<Date, DateError> {
    let parts = match format {
        DateFormat::Serial => return scan_serial(input),
        DateFormat::Fields(parts) => parts,
    };

    let scanner = Scanner {
        input,
        parts,
        separator,
        min_rest: min_remaining_lengths(parts),
        year_field: format
            .fields()
            .find(|f| f.kind() == FieldKind::Year)
            .unwrap_or(Field::Year4),
    };
    scanner.scan_from(0, 0, [0; 3])
}

struct Scanner<'a> {
    input: &'a str,
    parts: &'a [FormatPart],
    separator: &'a str,
    min_rest: Vec<usize>,
    year_field: Field,
}

impl Scanner<'_> {
    /// Read parts `index..` starting at byte `pos`, with the field values
    /// collected so far indexed by `FieldKind::index`.
    fn scan_from(&self, index: usize, pos: usize, values: [u32; 3]) -> Result<Date, DateError> {
        let part = match self.parts.get(index) {
            Some(part) => part,
            None => return self.finish(pos, values),
        };

        match part {
            FormatPart::Literal(lit) => {
                if pos >= self.input.len() {
                    return Err(DateError::UnexpectedEnd { position: pos });
                }
                if !self.input[pos..].starts_with(lit.as_str()) {
                    return Err(DateError::SeparatorMismatch {
                        position: pos,
                        expected: lit.clone(),
                    });
                }
                self.scan_from(index + 1, pos + lit.len(), values)
            }
            FormatPart::Field(field) => {
                let mut start = pos;
                let follows_field =
                    index > 0 && matches!(self.parts[index - 1], FormatPart::Field(_));
                if follows_field
                    && !self.separator.is_empty()
                    && self.input[start..].starts_with(self.separator)
                {
                    start += self.separator.len();
                }

                let (value, end) = scan_digits(
                    self.input,
                    self.input.as_bytes(),
                    start,
                    *field,
                    self.min_rest[index + 1],
                )?;
                let result = self.scan_field(index, end, values, *field, value);
                if result.is_err() && end - start > field.min_width() {
                    // Retry the flexible field with a single digit
                    let shorter = self.scan_field(
                        index,
                        start + field.min_width(),
                        values,
                        *field,
                        value / 10,
                    );
                    if shorter.is_ok() {
                        return shorter;
                    }
                }
                result
            }
        }
    }

    fn scan_field(
        &self,
        index: usize,
        end: usize,
        mut values: [u32; 3],
        field: Field,
        value: u32,
    ) -> Result<Date, DateError> {
        values[field.kind().index()] = value;
        self.scan_from(index + 1, end, values)
    }

    fn finish(&self, pos: usize, values: [u32; 3]) -> Result<Date, DateError> {
        if pos < self.input.len() {
            return Err(DateError::TrailingInput { position: pos });
        }

        let year = expand_year(values[FieldKind::Year.index()], self.year_field);
        Date::new(
            year,
            values[FieldKind::Month.index()],
            values[FieldKind::Day.index()],
        )
    }
}

/// Read the digits of one field starting at `pos`.
/// Returns the value and the position after the last digit.
fn scan_digits(
    input: &str,
    bytes: &[u8],
    pos: usize,
    field: Field,
    min_rest: usize,
) -> Result<(u32, usize), DateError> {
    let mut end = pos;
    let mut value = 0u32;

    for _ in 0..field.min_width() {
        match bytes.get(end) {
            Some(b) if b.is_ascii_digit() => {
                value = value * 10 + u32::from(b - b'0');
                end += 1;
            }
            Some(_) => {
                return Err(DateError::ExpectedDigit {
                    position: end,
                    found: input[end..].chars().next().unwrap_or_default(),
                })
            }
            None => return Err(DateError::UnexpectedEnd { position: end }),
        }
    }

    while end - pos < field.max_width() {
        match bytes.get(end) {
            Some(b) if b.is_ascii_digit() && bytes.len() - (end + 1) >= min_rest => {
                value = value * 10 + u32::from(b - b'0');
                end += 1;
            }
            _ => break,
        }
    }

    Ok((value, end))
}

/// For each part index, the fewest input bytes the parts from there on need.
/// Has one extra trailing entry of 0.
fn min_remaining_lengths(parts: &[FormatPart]) -> Vec<usize> {
    let mut lengths = vec![0; parts.len() + 1];
    for (i, part) in parts.iter().enumerate().rev() {
        let own = match part {
            FormatPart::Field(field) => field.min_width(),
            FormatPart::Literal(lit) => lit.len(),
        };
        lengths[i] = lengths[i + 1] + own;
    }
    lengths
}

fn expand_year(value: u32, field: Field) -> i32 {
    match field {
        Field::Year2 if value < TWO_DIGIT_YEAR_PIVOT => 2000 + value as i32,
        Field::Year2 => 1900 + value as i32,
        _ => value as i32,
    }
}

/// Parse a bare serial day number.
fn scan_serial(input: &str) -> Result<Date, DateError> {
    if input.is_empty() {
        return Err(DateError::UnexpectedEnd { position: 0 });
    }

    let mut serial = 0u64;
    for (position, ch) in input.char_indices() {
        let digit = ch
            .to_digit(10)
            .ok_or(DateError::ExpectedDigit { position, found: ch })?;
        serial = serial.saturating_mul(10).saturating_add(u64::from(digit));
    }

    let serial = u32::try_from(serial).map_err(|_| DateError::SerialOutOfRange(serial))?;
    Date::from_serial(serial)
}
