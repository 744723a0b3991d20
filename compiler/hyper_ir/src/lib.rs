//! HyperScript IR
//!
//! Core data structures shared by every stage of the HyperScript front end:
//! - Tokens and `TokenList` for lexer output
//! - Flow (script) trees: [`Expr`] and [`Stmt`]
//! - Blueprint (schema) trees: [`BlueprintDecl`] and friends
//! - Canonical text printers for both tree families
//!
//! Trees are plain owned enums. Consumers dispatch with exhaustive `match`,
//! so a new variant fails to compile until every consumer handles it.

pub mod ast;
pub mod blueprint;
pub mod printer;
mod token;

pub use ast::{Expr, FunctionDecl, Stmt};
pub use blueprint::{Attachment, BlueprintDecl, ClassMember, Field};
pub use printer::{AstPrinter, BlueprintPrinter};
pub use token::{Literal, Token, TokenKind, TokenList};
