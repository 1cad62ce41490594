//! Lexical analysis module for the scanner.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for a parser. It handles:
//!
//! - Character-class dispatch with maximal munch for operators
//! - Recognition of keywords, identifiers, numeric and byte literals
//! - String literals with escape decoding
//! - Token line and span tracking for error reporting
//! - Comments and whitespace handling
//! - Recovery from malformed lexemes via error tokens

pub mod config;
pub mod cursor;
pub mod lexer;
mod number;
mod string;
pub mod tokens;
