//! Parser for date format codes.

pub mod lexer;
pub mod tokens;

use crate::ast::{DateFormat, Field, FieldKind, FormatPart};
use crate::error::ParseError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Parse a format code string into a DateFormat.
pub fn parse(format_code: &str) -> Result<DateFormat, ParseError> {
    if format_code.is_empty() {
        return Err(ParseError::EmptyFormat);
    }

    let tokens = Lexer::new(format_code).tokenize()?;
    Parser::new(&tokens).parse()
}

/// Parser over a lexed token stream.
struct Parser<'t> {
    tokens: &'t [SpannedToken],
    /// Whether a field of each kind has been seen, indexed by `FieldKind::index`
    seen: [bool; 3],
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [SpannedToken]) -> Self {
        Self {
            tokens,
            seen: [false; 3],
        }
    }

    fn parse(&mut self) -> Result<DateFormat, ParseError> {
        if let [first, last] = self.tokens {
            if first.token == Token::Serial && last.token == Token::Eof {
                return Ok(DateFormat::Serial);
            }
        }

        let tokens = self.tokens;
        let mut parts = Vec::new();
        for spanned in tokens {
            let part = match &spanned.token {
                Token::Eof => break,
                Token::Serial => {
                    return Err(ParseError::MisplacedSerial {
                        position: spanned.start,
                    })
                }
                Token::Literal(text) => FormatPart::Literal(text.clone()),
                Token::Year(len) => {
                    FormatPart::Field(self.field(spanned, FieldKind::Year, *len)?)
                }
                Token::Month(len) => {
                    FormatPart::Field(self.field(spanned, FieldKind::Month, *len)?)
                }
                Token::Day(len) => {
                    FormatPart::Field(self.field(spanned, FieldKind::Day, *len)?)
                }
            };
            parts.push(part);
        }

        for kind in [FieldKind::Year, FieldKind::Month, FieldKind::Day] {
            if !self.seen[kind.index()] {
                return Err(ParseError::MissingField { field: kind });
            }
        }

        Ok(DateFormat::Fields(parts))
    }

    /// Map a run of field letters to a field, rejecting repeats and bad widths.
    fn field(
        &mut self,
        spanned: &SpannedToken,
        kind: FieldKind,
        length: usize,
    ) -> Result<Field, ParseError> {
        let position = spanned.start;
        if self.seen[kind.index()] {
            return Err(ParseError::DuplicateField {
                position,
                field: kind,
            });
        }

        let field = match (kind, length) {
            (FieldKind::Year, 4) => Field::Year4,
            (FieldKind::Year, 2) => Field::Year2,
            (FieldKind::Month, 2) => Field::Month2,
            (FieldKind::Month, 1) => Field::Month,
            (FieldKind::Day, 2) => Field::Day2,
            (FieldKind::Day, 1) => Field::Day,
            _ => {
                return Err(ParseError::InvalidRunLength {
                    position,
                    field: kind,
                    length,
                })
            }
        };

        self.seen[kind.index()] = true;
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_runs_are_merged() {
        let fmt = parse("yyyy -- mm/dd").unwrap();
        assert_eq!(fmt.parts()[1], FormatPart::Literal(" -- ".to_string()));
    }

    #[test]
    fn test_parse_reports_first_duplicate() {
        let err = parse("dd/mm/dd").unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateField {
                position: 6,
                field: FieldKind::Day
            }
        );
    }
}
