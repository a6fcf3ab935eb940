use std::rc::Rc;

use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, SYMBOL_LOOKUP};

pub struct Lexer {
    tokens: Vec<Token>,
    source: Rc<String>,
    pos: Position,
    current: Option<char>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("stdin"))
        };

        let source = Rc::new(source);
        let current = source.chars().next();

        Lexer {
            tokens: vec![],
            pos: Position::new(file_name, Rc::clone(&source)),
            source,
            current,
        }
    }

    pub fn advance(&mut self) {
        if let Some(ch) = self.current {
            self.pos.advance(ch);
            self.current = self.source[self.pos.index..].chars().next();
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, value = %token.value, "token");
        self.tokens.push(token);
    }

    /// The current character, or `None` once the input is exhausted.
    pub fn at(&self) -> Option<char> {
        self.current
    }

    pub fn peek(&self) -> Option<char> {
        let mut rest = self.source[self.pos.index..].chars();
        rest.next();
        rest.next()
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    // A dot only opens a literal when a digit follows it. The dot left over
    // after a literal's second decimal point never does.
    fn at_number_start(&self) -> bool {
        match self.current {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('.') => {
                let follows_literal = self
                    .tokens
                    .last()
                    .is_some_and(|token| token.kind.is_literal());

                !follows_literal && self.peek().is_some_and(|ch| ch.is_ascii_digit())
            }
            _ => false,
        }
    }
}

fn symbol_handler(lexer: &mut Lexer, kind: TokenKind, symbol: char) {
    let start = lexer.pos.clone();
    lexer.advance();
    lexer.push(MK_TOKEN!(kind, symbol.to_string(), MK_SPAN!(start, lexer)));
}

fn number_handler(lexer: &mut Lexer) {
    let start = lexer.pos.clone();
    let mut value = String::new();
    let mut dot_count = 0;

    while let Some(ch) = lexer.at() {
        if ch == '.' {
            if dot_count == 1 {
                break;
            }
            dot_count += 1;
        } else if !ch.is_ascii_digit() {
            break;
        }

        value.push(ch);
        lexer.advance();
    }

    let kind = if dot_count == 0 {
        TokenKind::IntegerLiteral
    } else {
        TokenKind::FloatLiteral
    };

    lexer.push(MK_TOKEN!(kind, value, MK_SPAN!(start, lexer)));
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while let Some(ch) = lex.at() {
        if let Some(kind) = SYMBOL_LOOKUP.get(&ch) {
            symbol_handler(&mut lex, *kind, ch);
        } else if lex.at_number_start() {
            number_handler(&mut lex);
        } else {
            let start = lex.pos.clone();
            lex.advance();

            debug!(file = %lex.pos.file, index = start.index, character = %ch, "illegal character");
            return Err(Error::new(
                ErrorImpl::IllegalCharacter { character: ch },
                MK_SPAN!(start, lex),
            ));
        }
    }

    debug!(file = %lex.pos.file, tokens = lex.tokens.len(), "tokenized");
    Ok(lex.tokens)
}
