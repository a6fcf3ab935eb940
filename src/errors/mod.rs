//! Error types for the lexer.
//!
//! - Error structures carrying the span of the offending source text
//! - Specific error variants, one per failure kind
//! - Diagnostic rendering with optional source context

pub mod errors;

#[cfg(test)]
mod tests;
