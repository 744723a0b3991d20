//! Token cursor.
//!
//! Wraps the token slice with the lookahead and consumption helpers the
//! grammar needs. The slice always ends in `Eof`, and the cursor never
//! moves past it.

use hyper_diagnostic::ErrorCode;
use hyper_ir::{Token, TokenKind};

use crate::error::{ParseError, ParseResult};
use crate::recovery::TokenSet;

pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// `tokens` must be non-empty and end with `Eof`, as lexer output does.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current (not yet consumed) token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The most recently consumed token, or the first token at the start.
    #[inline]
    pub fn previous(&self) -> &'a Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_any(&self, set: TokenSet) -> bool {
        set.contains(&self.current_kind())
    }

    /// Consume the current token and return it. Stays on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume and return the current token if its kind is in `set`.
    pub fn eat_any(&mut self, set: TokenSet) -> Option<&'a Token> {
        if self.check_any(set) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> ParseResult<&'a Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(ErrorCode::E1002, message))
        }
    }

    /// Skip any run of newlines and semicolons.
    pub fn skip_separators(&mut self) {
        while self.current_kind().is_separator() {
            self.pos += 1;
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.check(TokenKind::Eol) {
            self.pos += 1;
        }
    }

    /// True at `;`, newline or end of input.
    #[inline]
    pub fn at_statement_end(&self) -> bool {
        let kind = self.current_kind();
        kind.is_separator() || kind == TokenKind::Eof
    }

    /// Error at the current token.
    #[cold]
    pub fn error(&self, code: ErrorCode, message: &str) -> ParseError {
        ParseError::at(self.current(), code, message)
    }
}

#[cfg(test)]
mod tests;
