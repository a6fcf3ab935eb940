//! Integration tests for tokenizing whole input lines through the public API.

use std::io::Cursor;

use zen::{
    lexer::{lexer::tokenize, tokens::TokenKind},
    repl::{run, ReplConfig},
};

#[test]
fn test_valid_alphabet_never_fails() {
    let sources = [
        "1",
        "1 + 2",
        "(3.25 - 1) * 4 / 2",
        "((((1))))",
        "1.5 .5 5.",
        "   ",
        "- - -",
        "10/2*3+4-5",
    ];

    for source in sources {
        assert!(
            tokenize(source.to_string(), Some("test".to_string())).is_ok(),
            "failed on {source:?}"
        );
    }
}

#[test]
fn test_literal_classification() {
    for (source, kind) in [
        ("0", TokenKind::IntegerLiteral),
        ("123456", TokenKind::IntegerLiteral),
        ("1.0", TokenKind::FloatLiteral),
        ("12.", TokenKind::FloatLiteral),
        (".75", TokenKind::FloatLiteral),
    ] {
        let tokens = tokenize(source.to_string(), None).unwrap();
        assert_eq!(tokens.len(), 1, "{source:?}");
        assert_eq!(tokens[0].kind, kind, "{source:?}");
        assert_eq!(tokens[0].value, source);
    }
}

#[test]
fn test_token_text_reassembles_source() {
    let source = "(12 + 3.5) * 4 / 2 - 1";
    let tokens = tokenize(source.to_string(), None).unwrap();
    let joined: String = tokens.iter().map(|token| token.value.as_str()).collect();

    assert_eq!(joined, source);
}

#[test]
fn test_error_replaces_tokens() {
    let result = tokenize("1 + 2 + 3 ? 4".to_string(), Some("calc".to_string()));
    let error = result.unwrap_err();

    assert_eq!(error.get_error_name(), "IllegalCharError");
    assert_eq!(error.get_message(), "Illegal character: ?");
    assert_eq!(error.get_position().column, 10);
}

#[test]
fn test_repl_session() {
    let mut output = Vec::new();
    let config = ReplConfig {
        prompt: String::new(),
        file_name: String::from("session"),
        show_source: true,
    };

    run(Cursor::new("2 * (3)\n1.2.3\n"), &mut output, &config).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with(
        "Type: INT Value: 2\nType: SPACE Value:  \nType: MUL Value: *\n"
    ));
    assert!(output.contains("Type: RPAREN Value: )\n"));
    assert!(output.contains("File: session\nLine: 0\nCol: 3\n1.2.3\n   ^\n"));
}
