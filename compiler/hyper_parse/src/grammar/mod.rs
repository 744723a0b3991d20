//! Flow grammar.
//!
//! - `stmt.rs`: declarations, statements, blocks and terminators
//! - `expr.rs`: the precedence ladder from assignment down to primary
//!
//! Precedence, lowest first:
//!
//! ```text
//! assignment     = IDENT "=" assignment | or
//! or             = and ( "or" and )*
//! and            = equality ( "and" equality )*
//! equality       = comparison ( ( "!=" | "==" ) comparison )*
//! comparison     = concatenation ( ( ">" | ">=" | "<" | "<=" ) concatenation )*
//! concatenation  = additive ( ".." additive )*
//! additive       = multiplicative ( ( "-" | "+" ) multiplicative )*
//! multiplicative = exponent ( ( "/" | "*" | "%" ) exponent )*
//! exponent       = unary ( "^" unary )*
//! unary          = ( "!" | "-" | "not" ) unary | call
//! call           = primary ( "(" arguments? ")" )*
//! ```

mod expr;
mod stmt;

use hyper_ir::{Stmt, Token};
use tracing::debug;

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::recovery::synchronize;
use crate::ParseOutput;

/// Maximum number of call arguments or function parameters.
pub const MAX_ARITY: usize = 255;

/// Recursive-descent parser for flow scripts.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream. Statements that fail to parse are
    /// dropped; their errors are collected and parsing resumes after
    /// synchronization.
    pub fn parse(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        loop {
            self.cursor.skip_separators();
            if self.cursor.is_at_end() {
                break;
            }
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed flow program"
        );
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }

    /// Record an error without abandoning the current statement.
    fn report(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Record an error and skip to the next restart point.
    fn recover(&mut self, error: ParseError) {
        self.report(error);
        synchronize(&mut self.cursor);
    }

    fn recovering(&mut self, result: Result<Stmt, ParseError>) -> Option<Stmt> {
        match result {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.recover(error);
                None
            }
        }
    }
}
