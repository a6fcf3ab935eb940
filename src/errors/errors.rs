use std::fmt::Display;

use thiserror::Error;

use crate::{get_line_at_position, Position, Span};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// The reported location: the end of the span, which names the last
    /// character consumed, i.e. the offending one.
    pub fn get_position(&self) -> &Position {
        &self.span.end
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharError",
        }
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    /// The offending source line with a caret under the start of the span.
    pub fn context(&self) -> String {
        let start = &self.span.start;
        let (_, line_text, line_pos) = get_line_at_position(&start.text, start.index);

        let offset = line_text
            .get(..line_pos)
            .map_or_else(|| line_text.chars().count(), |prefix| prefix.chars().count());

        format!("{}\n{:>width$}", line_text, "^", width = offset + 1)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.get_position();

        write!(
            f,
            "ERROR: {}\nMessage:{}\nFile: {}\nLine: {}\nCol: {}",
            self.get_error_name(),
            self.get_message(),
            position.file,
            position.line,
            position.column
        )
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Illegal character: {character}")]
    IllegalCharacter { character: char },
}
