//! Decimal and byte-suffixed literals.

use crate::errors::errors::{ErrorImpl, NumberIssue};

use super::{
    lexer::Scanner,
    tokens::{Token, TokenKind},
};

/// Suffix marking a byte literal, as in `42b`.
const BYTE_SUFFIX: char = 'b';

impl Scanner {
    /// Lexes a run of digits, with an optional byte suffix.
    ///
    /// The suffix only belongs to the literal when nothing alphanumeric
    /// follows it, so `5bc` scans as `5` then the identifier `bc`.
    pub(super) fn scan_number(&mut self, start: usize, line: u32) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        let digits = self.cursor.slice(start, self.cursor.pos()).to_string();

        let is_byte = self.cursor.peek() == Some(BYTE_SUFFIX)
            && !self
                .cursor
                .peek2()
                .is_some_and(|c| self.config.is_ident_continue(c));
        if is_byte {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice(start, self.cursor.pos()).to_string();

        let kind = if digits.len() > 1 && digits.starts_with('0') && !self.config.allow_leading_zeros {
            self.error(
                ErrorImpl::MalformedNumber {
                    lexeme,
                    issue: NumberIssue::LeadingZero,
                },
                start,
            )
        } else if is_byte {
            match digits.parse::<u8>() {
                Ok(value) => TokenKind::ByteNumber(value),
                Err(_) => self.error(ErrorImpl::MalformedByteLiteral { lexeme }, start),
            }
        } else {
            match digits.parse::<i32>() {
                Ok(value) => TokenKind::Number(value),
                Err(_) => self.error(
                    ErrorImpl::MalformedNumber {
                        lexeme,
                        issue: NumberIssue::Overflow,
                    },
                    start,
                ),
            }
        };

        self.make_token(kind, start, line)
    }
}
