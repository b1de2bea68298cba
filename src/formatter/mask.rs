//! Format masks.
//!
//! A mask spells out the field layout of a format with one placeholder letter
//! per digit position, e.g. `mm/dd/yyyy`. The digit-only mask drops every
//! separator (`mmddyyyy`). The serial format has an empty mask.

use crate::ast::{DateFormat, FormatPart};

/// The mask with separators removed.
pub fn format_mask(format: &DateFormat) -> String {
    format.fields().map(|f| f.placeholder()).collect()
}

/// The mask with literal separators in place and `separator` at every
/// position where two fields meet without one.
pub fn format_mask_with_separators(format: &DateFormat, separator: &str) -> String {
    let mut mask = String::new();
    let mut prev_field = false;

    for part in format.parts() {
        match part {
            FormatPart::Field(field) => {
                if prev_field {
                    mask.push_str(separator);
                }
                mask.push_str(field.placeholder());
                prev_field = true;
            }
            FormatPart::Literal(s) => {
                mask.push_str(s);
                prev_field = false;
            }
        }
    }

    mask
}

/// Length in characters of the digit-only mask.
pub fn format_mask_len(format: &DateFormat) -> usize {
    format.fields().map(|f| f.placeholder().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_normalizes_case() {
        let fmt = DateFormat::parse("MM/DD/YYYY").unwrap();
        assert_eq!(format_mask(&fmt), "mmddyyyy");
        assert_eq!(format_mask_with_separators(&fmt, "-"), "mm/dd/yyyy");
    }

    #[test]
    fn test_serial_mask_is_empty() {
        let fmt = DateFormat::Serial;
        assert_eq!(format_mask(&fmt), "");
        assert_eq!(format_mask_with_separators(&fmt, "/"), "");
        assert_eq!(format_mask_len(&fmt), 0);
    }
}
