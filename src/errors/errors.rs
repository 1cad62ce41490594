use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error and where it started.
///
/// Errors never abort scanning; the scanner wraps each one in a
/// `TokenKind::Error` token and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The diagnostic message carried as the error token's payload.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownCharacter { .. } => "UnknownCharacter",
            ErrorImpl::UnclosedString => "UnclosedString",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::InvalidHexEscape { .. } => "InvalidHexEscape",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::MalformedByteLiteral { .. } => "MalformedByteLiteral",
        }
    }

    /// Name of the error kind in the token catalog.
    pub fn token_name(&self) -> &'static str {
        match &self.internal_error {
            ErrorImpl::UnknownCharacter { .. } => "UNKNOWN_CHAR",
            ErrorImpl::UnclosedString => "UNCLOSED_STRING",
            ErrorImpl::InvalidEscape { .. } => "ESCAPE_ERROR",
            ErrorImpl::InvalidHexEscape { .. } => "HEX_ERROR",
            ErrorImpl::MalformedNumber { .. } => "NUM_ERROR",
            ErrorImpl::MalformedByteLiteral { .. } => "NUM_B_ERROR",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language",
                character.escape_default()
            )),
            ErrorImpl::UnclosedString => ErrorTip::Suggestion(String::from(
                "string literals must be closed on the line they start",
            )),
            ErrorImpl::InvalidEscape { sequence } => ErrorTip::Suggestion(format!(
                "Unknown escape `{}`, expected one of \\n \\t \\r \\\" \\\\ \\0 \\xHH",
                sequence
            )),
            ErrorImpl::InvalidHexEscape { sequence } => ErrorTip::Suggestion(format!(
                "Invalid hex escape `{}`, expected exactly two hex digits",
                sequence
            )),
            ErrorImpl::MalformedNumber {
                issue: NumberIssue::LeadingZero,
                ..
            } => ErrorTip::Suggestion(String::from(
                "Numbers other than 0 may not start with a 0",
            )),
            ErrorImpl::MalformedNumber {
                issue: NumberIssue::Overflow,
                ..
            } => ErrorTip::Suggestion(format!(
                "Number is above the integer limit of {}",
                i32::MAX
            )),
            ErrorImpl::MalformedByteLiteral { .. } => {
                ErrorTip::Suggestion(String::from("Byte literals must lie between 0b and 255b"))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberIssue {
    LeadingZero,
    Overflow,
}

impl Display for NumberIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberIssue::LeadingZero => write!(f, "leading zero"),
            NumberIssue::Overflow => write!(f, "out of range"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unknown character {character:?}")]
    UnknownCharacter { character: char },
    #[error("unclosed string")]
    UnclosedString,
    #[error("undefined escape sequence {sequence:?}")]
    InvalidEscape { sequence: String },
    #[error("malformed hex escape sequence {sequence:?}")]
    InvalidHexEscape { sequence: String },
    #[error("malformed number {lexeme:?}: {issue}")]
    MalformedNumber { lexeme: String, issue: NumberIssue },
    #[error("byte literal {lexeme:?} out of range")]
    MalformedByteLiteral { lexeme: String },
}
