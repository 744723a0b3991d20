use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_kind_count_fits_bitset() {
    assert!(TokenKind::COUNT <= 128);
    assert_eq!(TokenKind::Eof.discriminant_index() as usize, TokenKind::COUNT - 1);
}

#[test]
fn test_dump_format_without_literal() {
    let tok = Token::simple(TokenKind::LeftParen, "(", 1);
    assert_eq!(tok.to_string(), "TOKEN[Type=LEFT_PAREN, Lexeme='(', Literal=null]");
}

#[test]
fn test_dump_format_number_and_string() {
    let num = Token::new(TokenKind::Number, "3", Some(Literal::Number(3.0)), 2);
    assert_eq!(num.to_string(), "TOKEN[Type=NUMBER, Lexeme='3', Literal=3.0]");

    let s = Token::new(
        TokenKind::String,
        "\"hi\"",
        Some(Literal::Str("hi".into())),
        2,
    );
    assert_eq!(
        s.to_string(),
        "TOKEN[Type=STRING, Lexeme='\"hi\"', Literal=\"hi\"]"
    );
}

#[test]
fn test_dump_escapes_newline() {
    let eol = Token::simple(TokenKind::Eol, "\n", 1);
    assert_eq!(eol.to_string(), "TOKEN[Type=EOL, Lexeme='\\n', Literal=null]");
}

#[test]
fn test_separators() {
    assert!(TokenKind::Eol.is_separator());
    assert!(TokenKind::Semicolon.is_separator());
    assert!(!TokenKind::Comma.is_separator());
    assert!(!TokenKind::Eof.is_separator());
}

#[test]
fn test_literal_display() {
    assert_eq!(Literal::Number(2.5).to_string(), "2.5");
    assert_eq!(Literal::Number(1.0).to_string(), "1.0");
    assert_eq!(Literal::Str("a b".into()).to_string(), "\"a b\"");
    assert_eq!(Literal::Bool(false).to_string(), "false");
    assert_eq!(Literal::Null.to_string(), "null");
}

#[test]
fn test_token_list_kinds() {
    let list = TokenList::from(vec![
        Token::simple(TokenKind::Print, "print", 1),
        Token::simple(TokenKind::Eof, "", 1),
    ]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.kinds(), vec![TokenKind::Print, TokenKind::Eof]);
    assert!(list.get(1).is_some_and(|t| t.is(TokenKind::Eof)));
}
