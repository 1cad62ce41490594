//! String literals and their escape sequences.

use crate::errors::errors::ErrorImpl;

use super::{
    lexer::Scanner,
    tokens::{Token, TokenKind},
};

impl Scanner {
    /// Lexes a double-quoted string literal, decoding escapes as it goes.
    ///
    /// A literal may not span lines. On any failure the rest of the line is
    /// folded into the error token and scanning resumes at the line break.
    pub(super) fn scan_string(&mut self, start: usize, line: u32) -> Token {
        self.cursor.advance();

        let mut content = String::new();

        loop {
            match self.cursor.peek() {
                None | Some('\n') => {
                    let kind = self.error(ErrorImpl::UnclosedString, start);
                    return self.make_token(kind, start, line);
                }
                Some('"') => {
                    self.cursor.advance();
                    return self.make_token(TokenKind::String(content), start, line);
                }
                Some('\\') => {
                    self.cursor.advance();
                    match self.scan_escape() {
                        Ok(c) => content.push(c),
                        Err(error) => {
                            self.recover_to_line_end();
                            let kind = self.error(error, start);
                            return self.make_token(kind, start, line);
                        }
                    }
                }
                Some(c) => {
                    self.cursor.advance();
                    content.push(c);
                }
            }
        }
    }

    /// Decodes the escape after a backslash. Nothing is consumed on failure.
    fn scan_escape(&mut self) -> Result<char, ErrorImpl> {
        let c = match self.cursor.peek() {
            None | Some('\n') => return Err(ErrorImpl::UnclosedString),
            Some(c) => c,
        };

        let decoded = match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '"' => '"',
            '\\' => '\\',
            '0' => '\0',
            'x' => {
                self.cursor.advance();
                return self.scan_hex_escape();
            }
            other => {
                return Err(ErrorImpl::InvalidEscape {
                    sequence: format!("\\{}", other),
                })
            }
        };

        self.cursor.advance();
        Ok(decoded)
    }

    /// Decodes the two hex digits of `\xHH`; the cursor sits on the first.
    fn scan_hex_escape(&mut self) -> Result<char, ErrorImpl> {
        let hi = self.cursor.peek();
        let lo = self.cursor.peek2();

        match (hi.and_then(|c| c.to_digit(16)), lo.and_then(|c| c.to_digit(16))) {
            (Some(h), Some(l)) => {
                self.cursor.advance();
                self.cursor.advance();
                Ok(char::from((h * 16 + l) as u8))
            }
            _ => {
                let digits: String = [hi, lo]
                    .into_iter()
                    .map_while(|c| c.filter(|c| *c != '\n' && *c != '"'))
                    .collect();
                Err(ErrorImpl::InvalidHexEscape {
                    sequence: format!("\\x{}", digits),
                })
            }
        }
    }
}
