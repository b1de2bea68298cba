//! Lexer for tokenizing date format code strings.
//!
//! Consecutive field letters are batched into a single run token carrying the
//! run length (`yyyy` becomes `Year(4)`), and consecutive non-letter characters
//! become one `Literal`. Field letters are case-insensitive. Any other letter is
//! rejected, except for the `HUN` serial keyword.

use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for date format code strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        let start = self.position;
        let ch = match self.current_char() {
            Some(ch) => ch,
            None => {
                return Ok(SpannedToken {
                    token: Token::Eof,
                    start,
                    end: start,
                })
            }
        };

        if ch == 'H' || ch == 'h' {
            if let Some(serial) = self.try_match_serial() {
                return Ok(serial);
            }
        }

        let token = match ch {
            'y' | 'Y' => Token::Year(self.count_run(|c| c == 'y' || c == 'Y')),
            'm' | 'M' => Token::Month(self.count_run(|c| c == 'm' || c == 'M')),
            'd' | 'D' => Token::Day(self.count_run(|c| c == 'd' || c == 'D')),
            c if c.is_alphabetic() => {
                return Err(ParseError::UnknownField {
                    position: start,
                    found: c,
                })
            }
            _ => self.lex_literal(),
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    /// Returns the count (always >= 1 since current char matches).
    #[inline]
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Lexes a run of non-letter characters.
    fn lex_literal(&mut self) -> Token {
        let mut content = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphabetic() {
                break;
            }
            content.push(ch);
            self.advance();
        }
        Token::Literal(content)
    }

    /// Tries to match the `HUN` keyword at the current position.
    fn try_match_serial(&mut self) -> Option<SpannedToken> {
        let start = self.position;
        let prefix = self.input[start..].get(..3)?;
        if !prefix.eq_ignore_ascii_case("HUN") {
            return None;
        }
        self.position += 3;
        Some(SpannedToken {
            token: Token::Serial,
            start,
            end: self.position,
        })
    }

    /// Returns all remaining tokens as a vector.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert!(matches!(lexer.next_token().unwrap().token, Token::Eof));
    }

    #[test]
    fn test_run_spans() {
        let mut lexer = Lexer::new("yyyy-mm");
        let year = lexer.next_token().unwrap();
        assert_eq!(year.token, Token::Year(4));
        assert_eq!((year.start, year.end), (0, 4));
        let sep = lexer.next_token().unwrap();
        assert_eq!((sep.start, sep.end), (4, 5));
    }
}
