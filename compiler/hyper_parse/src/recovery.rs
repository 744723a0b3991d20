//! Error recovery for the parsers.
//!
//! After a syntax error the parser discards tokens until a plausible
//! restart point, so one mistake produces roughly one diagnostic.

use hyper_ir::TokenKind;
use tracing::debug;

use crate::cursor::Cursor;

/// A set of token kinds using a bitset for O(1) membership testing.
///
/// Bit `i` corresponds to the kind whose `discriminant_index()` is `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // const fn builder for static initialization
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokens that plausibly begin a new flow statement.
pub const DECLARATION_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Function)
    .with(TokenKind::Let)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Tokens that begin a blueprint declaration.
pub const BLUEPRINT_DECLARATION_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Component)
    .with(TokenKind::Role)
    .with(TokenKind::Sector);

/// Flow recovery: skip the offending token, then stop right after a `;`
/// or in front of a [`DECLARATION_START`] token.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    let from = cursor.current().line;
    cursor.advance();
    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon || cursor.check_any(DECLARATION_START) {
            break;
        }
        cursor.advance();
    }
    debug!(from, to = cursor.current().line, "synchronized after syntax error");
}

/// Blueprint recovery: skip the offending token, then stop in front of the
/// next declaration keyword.
pub fn synchronize_blueprint(cursor: &mut Cursor<'_>) {
    cursor.advance();
    while !cursor.is_at_end() && !cursor.check_any(BLUEPRINT_DECLARATION_START) {
        cursor.advance();
    }
}
