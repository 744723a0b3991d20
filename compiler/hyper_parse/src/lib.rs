//! Parsers for HyperScript.
//!
//! [`parse`] turns a flow token stream into statements; [`parse_blueprint`]
//! turns a blueprint token stream into declarations. Both are best-effort:
//! a malformed statement is reported, skipped via synchronization, and
//! parsing continues, so one pass can surface several errors. Callers must
//! not execute a program whose output [`has_errors`](ParseOutput::has_errors).

mod blueprint;
mod cursor;
mod error;
mod grammar;
mod recovery;

use hyper_ir::{BlueprintDecl, Stmt, TokenList};

pub use blueprint::BlueprintParser;
pub use cursor::Cursor;
pub use error::{ParseError, ParseResult};
pub use grammar::{Parser, MAX_ARITY};
pub use recovery::{
    synchronize, synchronize_blueprint, TokenSet, BLUEPRINT_DECLARATION_START, DECLARATION_START,
};

/// Flow statements plus syntax errors, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Blueprint declarations plus syntax errors, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlueprintOutput {
    pub declarations: Vec<BlueprintDecl>,
    pub errors: Vec<ParseError>,
}

impl BlueprintOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a flow token stream. Lexer output ends with `Eof`; an empty list
/// parses to an empty program.
pub fn parse(tokens: &TokenList) -> ParseOutput {
    if tokens.is_empty() {
        return ParseOutput::default();
    }
    Parser::new(tokens.as_slice()).parse()
}

/// Parse a blueprint token stream. An empty list gives no declarations.
pub fn parse_blueprint(tokens: &TokenList) -> BlueprintOutput {
    if tokens.is_empty() {
        return BlueprintOutput::default();
    }
    BlueprintParser::new(tokens.as_slice()).parse()
}
