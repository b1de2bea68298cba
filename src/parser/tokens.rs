//! Token types for the date format lexer.

/// A token in a date format code string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Run of `y`/`Y` with its length
    Year(usize),
    /// Run of `m`/`M` with its length
    Month(usize),
    /// Run of `d`/`D` with its length
    Day(usize),

    /// Run of non-letter characters
    Literal(String),

    /// `HUN` - serial day number keyword
    Serial,

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
