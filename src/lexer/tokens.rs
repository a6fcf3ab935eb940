use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Single-character tokens, matched before numbers.
    pub static ref SYMBOL_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(' ', TokenKind::Whitespace);
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Minus);
        map.insert('*', TokenKind::Star);
        map.insert('/', TokenKind::Slash);
        map.insert('(', TokenKind::LeftParen);
        map.insert(')', TokenKind::RightParen);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    IntegerLiteral,
    FloatLiteral,

    Plus,
    Minus,
    Star,
    Slash,

    LeftParen,
    RightParen,

    Whitespace,
}

impl TokenKind {
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::IntegerLiteral => "INT",
            TokenKind::FloatLiteral => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MUL",
            TokenKind::Slash => "DIV",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Whitespace => "SPACE",
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::IntegerLiteral | TokenKind::FloatLiteral)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type: {} Value: {}", self.kind, self.value)
    }
}
