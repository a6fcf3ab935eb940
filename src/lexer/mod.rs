//! Lexical analysis module.
//!
//! Converts a line of arithmetic source text into tokens:
//!
//! - Integer and float literals
//! - The four arithmetic operators and parentheses
//! - Spaces, which are kept as tokens rather than skipped
//! - Position tracking for error reporting

pub mod lexer;
pub mod tokens;
