//! Character cursor over one source buffer.
//!
//! The cursor owns the source text, the current byte offset and the line
//! counter. Lookahead never moves it; `advance` is the only way forward.

#[derive(Debug, Clone)]
pub struct Cursor {
    source: String,
    pos: usize,
    line: u32,
}

impl Cursor {
    pub fn new(source: String) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 1,
        }
    }

    /// The character under the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// The character after the one under the cursor.
    pub fn peek2(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes one character, bumping the line counter on `\n`.
    ///
    /// Does nothing at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.source[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = Cursor::new("ab".to_string());

        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek2(), Some('b'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn test_lookahead_past_end() {
        let mut cursor = Cursor::new("a".to_string());

        assert_eq!(cursor.peek2(), None);
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.peek2(), None);
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("\n".to_string());

        cursor.advance();
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.pos(), 1);
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn test_line_counter_only_counts_newlines() {
        let mut cursor = Cursor::new("a\r\nb\n\nc".to_string());

        cursor.eat_while(|_| true);
        assert_eq!(cursor.line(), 4);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("é=".to_string());

        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.peek(), Some('='));
        assert_eq!(cursor.advance(), Some('='));
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.slice(0, 2), "é");
    }
}
