//! Error types and error reporting for the scanner.
//!
//! This module defines the lexical errors the scanner can recover from.
//! It includes:
//!
//! - Error structures with source position information
//! - One variant per malformed-lexeme kind
//! - Error names, catalog names and suggestion tips for diagnostics

pub mod errors;
