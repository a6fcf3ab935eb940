//! Unit tests for error handling.

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl};
use crate::{Position, Span};

fn illegal(character: char, source: &str, index: usize) -> Error {
    let mut pos = Position::new(Rc::new("test.zen".to_string()), Rc::new(source.to_string()));
    for ch in source[..index].chars() {
        pos.advance(ch);
    }

    let start = pos.clone();
    pos.advance(character);

    Error::new(ErrorImpl::IllegalCharacter { character }, Span { start, end: pos })
}

#[test]
fn test_error_name() {
    let error = illegal('@', "@", 0);
    assert_eq!(error.get_error_name(), "IllegalCharError");
}

#[test]
fn test_error_message() {
    let error = illegal('$', "1 $", 2);
    assert_eq!(error.get_message(), "Illegal character: $");
}

#[test]
fn test_error_display() {
    let error = illegal('@', "1+@2", 2);

    assert_eq!(
        error.to_string(),
        "ERROR: IllegalCharError\nMessage:Illegal character: @\nFile: test.zen\nLine: 0\nCol: 2"
    );
}

#[test]
fn test_error_context() {
    let error = illegal('#', "12 * #", 5);
    assert_eq!(error.context(), "12 * #\n     ^");
}

#[test]
fn test_error_context_first_character() {
    let error = illegal('x', "x", 0);
    assert_eq!(error.context(), "x\n^");
}

#[test]
fn test_error_context_after_multibyte() {
    let error = illegal('@', "é@", 'é'.len_utf8());
    assert_eq!(error.context(), "é@\n ^");
}

#[test]
fn test_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(illegal('@', "@", 0));
    assert!(error.to_string().starts_with("ERROR: IllegalCharError"));
}
