//! Converter options and configuration.

/// Output format used until another one is set.
pub const DEFAULT_OUTPUT_FORMAT: &str = "mm/dd/yyyy";

/// Separator inserted between adjacent fields until another one is set.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Initial configuration for a [`DateConverter`](crate::DateConverter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Format used by `to_output_string` when no other format was requested.
    pub output_format: String,
    /// Separator for positions where two fields meet.
    pub separator: String,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// A separator must be non-empty and must not contain digits or letters,
/// which would make it indistinguishable from field text.
pub fn is_valid_separator(separator: &str) -> bool {
    !separator.is_empty() && !separator.chars().any(|c| c.is_alphanumeric())
}
