use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    config::ScannerConfig,
    cursor::Cursor,
    tokens::{Token, TokenKind, OPERATOR_LOOKUP, RESERVED_LOOKUP},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaKind {
    Whitespace,
    Comment,
}

/// A discarded span of source: a run of whitespace or one line comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: String,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanned {
    Token(Token),
    Trivia(Trivia),
}

/// Pull-based scanner over a single source buffer.
///
/// Each call to [`Scanner::next_token`] recognizes exactly one token, or
/// returns `None` once the input is exhausted. Malformed lexemes come back as
/// `TokenKind::Error` tokens and scanning carries on after them.
#[derive(Debug, Clone)]
pub struct Scanner {
    pub(super) cursor: Cursor,
    pub(super) config: ScannerConfig,
    file: Arc<String>,
}

impl Scanner {
    pub fn new(source: String, file: Option<String>) -> Scanner {
        Scanner::with_config(source, file, ScannerConfig::default())
    }

    pub fn with_config(source: String, file: Option<String>, config: ScannerConfig) -> Scanner {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("<input>"))
        };

        Scanner {
            cursor: Cursor::new(source),
            config,
            file: file_name,
        }
    }

    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the next token, skipping whitespace and comments.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            match self.scan_lexeme()? {
                Scanned::Token(token) => return Some(token),
                Scanned::Trivia(_) => continue,
            }
        }
    }

    /// Recognizes the next lexeme, including discarded spans.
    pub fn scan_lexeme(&mut self) -> Option<Scanned> {
        let start = self.cursor.pos();
        let line = self.cursor.line();
        let c = self.cursor.peek()?;

        let scanned = match c {
            ' ' | '\t' | '\r' | '\n' => {
                self.cursor.eat_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
                self.trivia(TriviaKind::Whitespace, start, line)
            }
            '/' if self.cursor.peek2() == Some('/') => {
                self.cursor.eat_while(|c| c != '\n');
                self.trivia(TriviaKind::Comment, start, line)
            }
            c if self.config.is_ident_start(c) => Scanned::Token(self.scan_identifier(start, line)),
            '0'..='9' => Scanned::Token(self.scan_number(start, line)),
            '"' => Scanned::Token(self.scan_string(start, line)),
            c => Scanned::Token(self.scan_operator(c, start, line)),
        };

        if let Scanned::Token(token) = &scanned {
            match &token.kind {
                TokenKind::Error(error) => {
                    debug!(line, lexeme = %token.lexeme, error = %error.get_impl(), "recovered from lexical error")
                }
                kind => trace!(line, lexeme = %token.lexeme, %kind, "scanned token"),
            }
        }

        Some(scanned)
    }

    fn scan_identifier(&mut self, start: usize, line: u32) -> Token {
        let config = self.config;
        self.cursor.eat_while(|c| config.is_ident_continue(c));

        let text = self.cursor.slice(start, self.cursor.pos());
        let keyword = if self.config.case_insensitive_keywords {
            RESERVED_LOOKUP.get(text.to_ascii_lowercase().as_str()).cloned()
        } else {
            RESERVED_LOOKUP.get(text).cloned()
        };

        self.make_token(keyword.unwrap_or(TokenKind::Identifier), start, line)
    }

    fn scan_operator(&mut self, first: char, start: usize, line: u32) -> Token {
        self.cursor.advance();

        if let Some(second) = self.cursor.peek() {
            let candidate: String = [first, second].iter().collect();
            if let Some(kind) = OPERATOR_LOOKUP.get(candidate.as_str()) {
                self.cursor.advance();
                return self.make_token(kind.clone(), start, line);
            }
        }

        let kind = match OPERATOR_LOOKUP.get(first.to_string().as_str()) {
            Some(kind) => kind.clone(),
            None => self.error(ErrorImpl::UnknownCharacter { character: first }, start),
        };
        self.make_token(kind, start, line)
    }

    /// Consumes the rest of the current line, leaving the newline in place.
    pub(super) fn recover_to_line_end(&mut self) {
        self.cursor.eat_while(|c| c != '\n');
    }

    pub(super) fn error(&self, error: ErrorImpl, start: usize) -> TokenKind {
        TokenKind::Error(Error::new(error, Position(start, Arc::clone(&self.file))))
    }

    pub(super) fn make_token(&self, kind: TokenKind, start: usize, line: u32) -> Token {
        let end = self.cursor.pos();
        MK_TOKEN!(
            kind,
            self.cursor.slice(start, end).to_string(),
            line,
            MK_SPAN!(start, end, self.file)
        )
    }

    fn trivia(&self, kind: TriviaKind, start: usize, line: u32) -> Scanned {
        let text = self.cursor.slice(start, self.cursor.pos()).to_string();
        trace!(line, ?kind, "skipped trivia");
        Scanned::Trivia(Trivia { kind, text, line })
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    tokenize_with(source, file, ScannerConfig::default())
}

pub fn tokenize_with(source: String, file: Option<String>, config: ScannerConfig) -> Vec<Token> {
    Scanner::with_config(source, file, config).collect()
}
