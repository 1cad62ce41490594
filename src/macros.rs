//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span between two byte offsets of one source
//!
//! These macros reduce boilerplate in the recognizers.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The raw source text matched for the token
/// * `$line` - The 1-based line the lexeme starts on
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number(42), "42".to_string(), 1, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
            span: $span,
        }
    };
}

/// Creates a Span from `$start` to `$end` in `$file`.
///
/// # Example
///
/// ```ignore
/// let span = MK_SPAN!(start, self.cursor.pos(), self.file);
/// ```
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        Span {
            start: Position($start, Arc::clone(&$file)),
            end: Position($end, Arc::clone(&$file)),
        }
    };
}
