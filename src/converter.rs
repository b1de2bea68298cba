//! The stateful date converter.

use log::debug;

use crate::ast::FormatSpecifier;
use crate::cache;
use crate::date::{CalendarYear, Date};
use crate::date_serial;
use crate::error::{ConvertError, ParseError};
use crate::options::{is_valid_separator, ConverterOptions};
use crate::scanner::scan_date;

/// Holds one date and converts it between format strings.
///
/// A converter starts empty. [`set_date`](Self::set_date) parses and stores a
/// date; every conversion before that fails with [`ConvertError::NoDate`].
///
/// ```
/// use dteconv::DateConverter;
///
/// let mut conv = DateConverter::new();
/// conv.set_date("2016-01-16", "yyyy-mm-dd").unwrap();
/// assert_eq!(conv.string_for_format("mm/dd/yyyy").unwrap(), "01/16/2016");
/// assert_eq!(conv.number_for_format("yyyymmdd").unwrap(), 20160116);
/// ```
#[derive(Debug, Clone)]
pub struct DateConverter {
    date: Option<Date>,
    output_format: String,
    separator: String,
    /// Last format passed to a numeric or string accessor.
    requested_format: Option<String>,
}

impl Default for DateConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DateConverter {
    /// Create an empty converter with the default output format and separator.
    pub fn new() -> Self {
        let opts = ConverterOptions::default();
        Self {
            date: None,
            output_format: opts.output_format,
            separator: opts.separator,
            requested_format: None,
        }
    }

    /// Create an empty converter, validating the given options.
    pub fn with_options(opts: ConverterOptions) -> Result<Self, ConvertError> {
        let mut conv = Self::new();
        conv.set_output_format(&opts.output_format)?;
        conv.set_date_separator(&opts.separator)?;
        Ok(conv)
    }

    /// Parse `input` according to `format` and store the result.
    ///
    /// On failure the previously stored date, if any, is kept.
    pub fn set_date(&mut self, input: &str, format: &str) -> Result<(), ConvertError> {
        let fmt = cache::get_or_parse(format).inspect_err(|err| {
            debug!("rejected input format {:?}: {}", format, err);
        })?;
        let date = scan_date(input, &fmt, &self.separator).inspect_err(|err| {
            debug!("rejected date {:?} for format {:?}: {}", input, format, err);
        })?;
        self.date = Some(date);
        Ok(())
    }

    /// The stored date, if one has been set.
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    /// The serial day number of the stored date.
    pub fn serial(&self) -> Result<u32, ConvertError> {
        Ok(self.stored()?.serial())
    }

    pub fn output_format(&self) -> &str {
        &self.output_format
    }

    /// Set the default output format. Clears any format recorded by an accessor.
    pub fn set_output_format(&mut self, format: &str) -> Result<(), ConvertError> {
        cache::get_or_parse(format)?;
        self.output_format = format.to_string();
        self.requested_format = None;
        Ok(())
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Set the separator inserted where two fields meet without a literal.
    pub fn set_date_separator(&mut self, separator: &str) -> Result<(), ConvertError> {
        if !is_valid_separator(separator) {
            debug!("rejected date separator {:?}", separator);
            return Err(ConvertError::InvalidSeparator(separator.to_string()));
        }
        self.separator = separator.to_string();
        Ok(())
    }

    /// Render the stored date as the integer formed by its field digits.
    ///
    /// The format applies to this call and is remembered for
    /// [`to_output_string`](Self::to_output_string); the output format is
    /// left alone.
    pub fn number_for_format(&mut self, format: &str) -> Result<i64, ConvertError> {
        let date = self.stored()?;
        let fmt = cache::get_or_parse(format)?;
        self.requested_format = Some(format.to_string());
        Ok(fmt.format_number(&date))
    }

    /// Render the stored date with separators.
    ///
    /// The format applies to this call and is remembered for
    /// [`to_output_string`](Self::to_output_string); the output format is
    /// left alone.
    pub fn string_for_format(&mut self, format: &str) -> Result<String, ConvertError> {
        let date = self.stored()?;
        let fmt = cache::get_or_parse(format)?;
        self.requested_format = Some(format.to_string());
        Ok(fmt.format(&date, &self.separator))
    }

    /// Render the stored date with the last requested format, falling back to
    /// the output format.
    pub fn to_output_string(&self) -> Result<String, ConvertError> {
        let date = self.stored()?;
        let fmt = cache::get_or_parse(self.effective_format())?;
        Ok(fmt.format(&date, &self.separator))
    }

    /// The digit-only mask for a format, e.g. `mmddyyyy` for `mm/dd/yyyy`.
    pub fn format_mask(&self, format: &str) -> Result<String, ParseError> {
        self.format_mask_with_formatting(format, false)
    }

    /// The mask for a format, with separators when `with_formatting` is set.
    pub fn format_mask_with_formatting(
        &self,
        format: &str,
        with_formatting: bool,
    ) -> Result<String, ParseError> {
        let fmt = cache::get_or_parse(format)?;
        Ok(if with_formatting {
            fmt.mask_with_separators(&self.separator)
        } else {
            fmt.mask()
        })
    }

    /// Length of the digit-only mask. Zero for the serial format.
    pub fn format_mask_len(&self, format: &str) -> Result<usize, ParseError> {
        Ok(cache::get_or_parse(format)?.mask_len())
    }

    pub fn format_specifier_for(&self, format: &str) -> Result<FormatSpecifier, ParseError> {
        Ok(cache::get_or_parse(format)?.specifier())
    }

    /// The specifier of the format [`to_output_string`](Self::to_output_string) would use.
    pub fn format_specifier(&self) -> Result<FormatSpecifier, ParseError> {
        self.format_specifier_for(self.effective_format())
    }

    /// Whether the stored date falls in a leap year, counting 1900 as one.
    pub fn is_leap_year(&self) -> Result<bool, ConvertError> {
        Ok(self.stored()?.is_leap_year())
    }

    /// Whether `date` falls in a leap year, counting 1900 as one.
    pub fn is_leap_year_for(date: &impl CalendarYear) -> bool {
        date_serial::is_leap_year(date.calendar_year())
    }

    fn stored(&self) -> Result<Date, ConvertError> {
        self.date.ok_or(ConvertError::NoDate)
    }

    fn effective_format(&self) -> &str {
        self.requested_format
            .as_deref()
            .unwrap_or(&self.output_format)
    }
}
