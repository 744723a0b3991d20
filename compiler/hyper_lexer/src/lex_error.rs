//! Lexer error types.

use hyper_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Missing closing `"`. The partial string is dropped.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// A character that starts no token. It is skipped.
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
        }
    }
}

/// A lexer error on a source line.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
}

impl LexError {
    #[cold]
    pub fn unterminated_string(line: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString,
            line,
        }
    }

    #[cold]
    pub fn unexpected_character(ch: char, line: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedCharacter(ch),
            line,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code(), self.kind.to_string(), self.line)
    }
}
