//! Expression parsing.
//!
//! One method per precedence level; binary levels fold to the left.

use hyper_diagnostic::ErrorCode;
use hyper_ir::{Expr, Literal, Token, TokenKind};
use hyper_stack::ensure_sufficient_stack;

use super::{Parser, MAX_ARITY};
use crate::error::{ParseError, ParseResult};
use crate::recovery::TokenSet;

const EQUALITY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::BangEqual)
    .with(TokenKind::EqualEqual);

const COMPARISON_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Greater)
    .with(TokenKind::GreaterEqual)
    .with(TokenKind::Less)
    .with(TokenKind::LessEqual);

const CONCAT_OPS: TokenSet = TokenSet::new().with(TokenKind::DotDot);

const ADDITIVE_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Minus)
    .with(TokenKind::Plus);

const MULTIPLICATIVE_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Slash)
    .with(TokenKind::Star)
    .with(TokenKind::Percent);

const EXPONENT_OPS: TokenSet = TokenSet::new().with(TokenKind::Caret);

const UNARY_OPS: TokenSet = TokenSet::new()
    .with(TokenKind::Bang)
    .with(TokenKind::Minus);

/// Identifier spelling that acts as a prefix `!`.
const NOT_WORD: &str = "not";

impl Parser<'_> {
    pub(super) fn expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// Right-associative. A non-variable target is reported at the `=` but
    /// does not abort the statement; the left side is kept.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.or()?;

        if self.cursor.check(TokenKind::Equal) {
            let equals = self.cursor.advance();
            let value = self.assignment()?;
            return match expr {
                Expr::Variable(name) => Ok(Expr::assign(name, value)),
                other => {
                    self.report(ParseError::at(
                        equals,
                        ErrorCode::E1003,
                        "Invalid assignment target.",
                    ));
                    Ok(other)
                }
            };
        }

        Ok(expr)
    }

    fn or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.and()?;
        while self.cursor.check(TokenKind::Or) {
            let operator = self.cursor.advance().clone();
            let right = self.and()?;
            expr = Expr::logical(expr, operator, right);
        }
        Ok(expr)
    }

    fn and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;
        while self.cursor.check(TokenKind::And) {
            let operator = self.cursor.advance().clone();
            let right = self.equality()?;
            expr = Expr::logical(expr, operator, right);
        }
        Ok(expr)
    }

    fn equality(&mut self) -> ParseResult<Expr> {
        self.binary_level(EQUALITY_OPS, Self::comparison)
    }

    fn comparison(&mut self) -> ParseResult<Expr> {
        self.binary_level(COMPARISON_OPS, Self::concatenation)
    }

    fn concatenation(&mut self) -> ParseResult<Expr> {
        self.binary_level(CONCAT_OPS, Self::additive)
    }

    fn additive(&mut self) -> ParseResult<Expr> {
        self.binary_level(ADDITIVE_OPS, Self::multiplicative)
    }

    fn multiplicative(&mut self) -> ParseResult<Expr> {
        self.binary_level(MULTIPLICATIVE_OPS, Self::exponent)
    }

    /// `^` folds to the left like the other binary levels: `2 ^ 3 ^ 2` is
    /// `(2 ^ 3) ^ 2`.
    fn exponent(&mut self) -> ParseResult<Expr> {
        self.binary_level(EXPONENT_OPS, Self::unary)
    }

    /// Left fold of `next (op next)*` for operators in `ops`.
    fn binary_level(
        &mut self,
        ops: TokenSet,
        next: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut expr = next(self)?;
        while let Some(operator) = self.cursor.eat_any(ops) {
            let operator = operator.clone();
            let right = next(self)?;
            expr = Expr::binary(expr, operator, right);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> ParseResult<Expr> {
        if let Some(operator) = self.cursor.eat_any(UNARY_OPS) {
            let operator = operator.clone();
            let operand = ensure_sufficient_stack(|| self.unary())?;
            return Ok(Expr::unary(operator, operand));
        }

        let current = self.cursor.current();
        if current.kind == TokenKind::Identifier && current.lexeme == NOT_WORD {
            self.cursor.advance();
            let operator = Token::new(TokenKind::Bang, NOT_WORD, None, current.line);
            let operand = ensure_sufficient_stack(|| self.unary())?;
            return Ok(Expr::unary(operator, operand));
        }

        self.call()
    }

    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        while self.cursor.eat(TokenKind::LeftParen) {
            expr = self.finish_call(expr)?;
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ParseResult<Expr> {
        let mut arguments = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if arguments.len() == MAX_ARITY {
                    let error = self
                        .cursor
                        .error(ErrorCode::E1004, "Can't have more than 255 arguments.");
                    self.report(error);
                }
                arguments.push(self.expression()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let paren = self
            .cursor
            .expect(TokenKind::RightParen, "Expect ')' after arguments.")?
            .clone();
        Ok(Expr::call(callee, paren, arguments))
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.cursor.current();
        let expr = match token.kind {
            TokenKind::False => Expr::literal(Literal::Bool(false)),
            TokenKind::True => Expr::literal(Literal::Bool(true)),
            TokenKind::Null => Expr::literal(Literal::Null),
            TokenKind::Number | TokenKind::String => {
                Expr::literal(token.literal.clone().unwrap_or(Literal::Null))
            }
            TokenKind::Identifier => Expr::Variable(token.clone()),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.cursor
                    .expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => return Err(self.cursor.error(ErrorCode::E1001, "Expect expression.")),
        };
        self.cursor.advance();
        Ok(expr)
    }
}
