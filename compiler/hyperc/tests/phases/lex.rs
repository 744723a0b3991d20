//! Scanner output as seen through the `--tokens` dump.

use hyper_lexer::{lex, lex_with_mode, LexMode};
use hyperc::{ExitStatus, RunOptions};
use pretty_assertions::assert_eq;

use crate::common::{blueprint, flow_with, rendered};

fn dump(source: &str, mode: LexMode) -> Vec<String> {
    lex_with_mode(source, mode)
        .tokens
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_token_dump_format() {
    assert_eq!(
        dump("let x = 1.5\nprint \"hi\"", LexMode::Flow),
        vec![
            "TOKEN[Type=LET, Lexeme='let', Literal=null]",
            "TOKEN[Type=IDENTIFIER, Lexeme='x', Literal=null]",
            "TOKEN[Type=EQUAL, Lexeme='=', Literal=null]",
            "TOKEN[Type=NUMBER, Lexeme='1.5', Literal=1.5]",
            "TOKEN[Type=EOL, Lexeme='\\n', Literal=null]",
            "TOKEN[Type=PRINT, Lexeme='print', Literal=null]",
            "TOKEN[Type=STRING, Lexeme='\"hi\"', Literal=\"hi\"]",
            "TOKEN[Type=EOF, Lexeme='', Literal=null]",
        ]
    );
}

#[test]
fn test_integer_literal_dumps_as_float() {
    assert_eq!(
        dump("7", LexMode::Flow)[0],
        "TOKEN[Type=NUMBER, Lexeme='7', Literal=7.0]"
    );
}

#[test]
fn test_schema_words_depend_on_mode() {
    assert_eq!(
        dump("Class", LexMode::Flow)[0],
        "TOKEN[Type=IDENTIFIER, Lexeme='Class', Literal=null]"
    );
    assert_eq!(
        dump("Class", LexMode::Blueprint)[0],
        "TOKEN[Type=CLASS, Lexeme='Class', Literal=null]"
    );
}

#[test]
fn test_tokens_flag_prints_stream_before_output() {
    let options = RunOptions {
        dump_tokens: true,
        ..RunOptions::default()
    };
    let (output, outcome) = flow_with("print 1", options);
    assert_eq!(outcome.status, ExitStatus::Success);
    assert_eq!(
        output,
        "--- Tokens ---\n\
         TOKEN[Type=PRINT, Lexeme='print', Literal=null]\n\
         TOKEN[Type=NUMBER, Lexeme='1', Literal=1.0]\n\
         TOKEN[Type=EOF, Lexeme='', Literal=null]\n\
         1\n"
    );
}

#[test]
fn test_lex_errors_stop_the_run() {
    let (output, outcome) = flow_with("print 1\nprint @", RunOptions::default());
    assert_eq!(output, "");
    assert_eq!(outcome.status, ExitStatus::SyntaxError);
    let messages = rendered(&outcome);
    assert_eq!(messages[0], "[line 2] Error: Unexpected character.");
}

#[test]
fn test_unterminated_string_reported_with_parse_errors() {
    let (_, outcome) = flow_with("print \"open", RunOptions::default());
    assert_eq!(outcome.status, ExitStatus::SyntaxError);
    let messages = rendered(&outcome);
    assert_eq!(messages[0], "[line 1] Error: Unterminated string.");
    // The string token was dropped, so `print` has nothing to print.
    assert_eq!(messages[1], "[line 1] Error at end: Expect expression.");
}

#[test]
fn test_blueprint_lex_error() {
    let (output, outcome) = blueprint("role A is B $");
    assert_eq!(output, "");
    assert_eq!(outcome.status, ExitStatus::SyntaxError);
    assert_eq!(rendered(&outcome), vec!["[line 1] Error: Unexpected character."]);
}

#[test]
fn test_every_source_ends_in_eof() {
    for source in ["", "\n\n", "// c", "\"x", "1 2 3", "@@"] {
        let tokens = lex(source).tokens;
        let last = tokens.iter().last().unwrap();
        assert_eq!(last.to_string(), "TOKEN[Type=EOF, Lexeme='', Literal=null]");
    }
}
