#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use hyper_diagnostic::Location;

fn tokens(source: &str) -> Vec<Token> {
    hyper_lexer::lex(source).tokens.into_vec()
}

#[test]
fn test_advance_stops_at_eof() {
    let toks = tokens("a");
    let mut cursor = Cursor::new(&toks);
    assert_eq!(cursor.advance().kind, TokenKind::Identifier);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.previous().kind, TokenKind::Identifier);
}

#[test]
fn test_skip_separators_collapses_runs() {
    let toks = tokens(";\n;;\n\nx");
    let mut cursor = Cursor::new(&toks);
    cursor.skip_separators();
    assert!(cursor.check(TokenKind::Identifier));
}

#[test]
fn test_expect_failure_points_at_current() {
    let toks = tokens("x");
    let mut cursor = Cursor::new(&toks);
    let err = cursor
        .expect(TokenKind::LeftParen, "Expect '(' after 'if'.")
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.location, Location::AtLexeme("x".into()));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_statement_end_detection() {
    let toks = tokens("a;b\nc");
    let mut cursor = Cursor::new(&toks);
    assert!(!cursor.at_statement_end());
    cursor.advance();
    assert!(cursor.at_statement_end());
    cursor.advance();
    cursor.advance();
    assert!(cursor.at_statement_end());
    cursor.advance();
    cursor.advance();
    assert!(cursor.at_statement_end());
    assert!(cursor.is_at_end());
}
