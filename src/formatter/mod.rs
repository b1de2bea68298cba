//! Date rendering and format masks

mod date;
mod mask;

pub use date::{format_date, format_date_number};
pub use mask::{format_mask, format_mask_len, format_mask_with_separators};

use crate::ast::DateFormat;
use crate::date::Date;

impl DateFormat {
    /// Render a date as a string, inserting `separator` between adjacent fields.
    pub fn format(&self, date: &Date, separator: &str) -> String {
        format_date(date, self, separator)
    }

    /// Render a date as the integer formed by its field digits.
    pub fn format_number(&self, date: &Date) -> i64 {
        format_date_number(date, self)
    }

    /// The digit-only mask, e.g. `mmddyyyy`.
    pub fn mask(&self) -> String {
        format_mask(self)
    }

    /// The mask including separators, e.g. `mm/dd/yyyy`.
    pub fn mask_with_separators(&self, separator: &str) -> String {
        format_mask_with_separators(self, separator)
    }

    /// Length of the digit-only mask.
    pub fn mask_len(&self) -> usize {
        format_mask_len(self)
    }
}
