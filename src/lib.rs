#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod repl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: isize,
    pub file: Rc<String>,
    pub text: Rc<String>,
}

impl Position {
    /// The position before the first character: index 0, line 0, column -1.
    pub fn new(file: Rc<String>, text: Rc<String>) -> Self {
        Position {
            index: 0,
            line: 0,
            column: -1,
            file,
            text,
        }
    }

    pub fn advance(&mut self, consumed: char) {
        self.index += consumed.len_utf8();
        self.column += 1;

        if consumed == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the line number, the line text (without its line break) and the
/// offset into that line for a byte index of `text`.
pub fn get_line_at_position(text: &str, position: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 0;
    let mut last = (0, String::new(), 0);

    for line in text.split_inclusive('\n') {
        let end = start + line.len();
        let trimmed = line.trim_end_matches(['\n', '\r']).to_string();

        if (start..end).contains(&position) {
            return (line_number, trimmed, position - start);
        }

        last = (line_number, trimmed, line.len());
        start = end;
        line_number += 1;
    }

    last
}
