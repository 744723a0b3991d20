//! Syntax errors.

use hyper_diagnostic::{Diagnostic, ErrorCode, Location};
use hyper_ir::{Token, TokenKind};
use thiserror::Error;

/// A syntax error pointing at a token.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("[line {line}] Error{}: {message}", .location.suffix())]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    pub line: u32,
    pub location: Location,
}

impl ParseError {
    /// Error located at `token`: `at end` for `Eof`, `at end of line` for a
    /// newline, `at '<lexeme>'` otherwise.
    #[cold]
    pub fn at(token: &Token, code: ErrorCode, message: impl Into<String>) -> Self {
        let location = match token.kind {
            TokenKind::Eof => Location::AtEnd,
            TokenKind::Eol => Location::AtNewline,
            _ => Location::AtLexeme(token.lexeme.clone()),
        };
        ParseError {
            code,
            message: message.into(),
            line: token.line,
            location,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code, self.message.clone(), self.line).at(self.location.clone())
    }
}

/// Parser result type.
pub type ParseResult<T> = Result<T, ParseError>;
