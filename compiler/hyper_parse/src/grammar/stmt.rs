//! Statement parsing.

use hyper_diagnostic::ErrorCode;
use hyper_ir::{Expr, Stmt, TokenKind};
use hyper_stack::ensure_sufficient_stack;
use tracing::trace;

use super::{Parser, MAX_ARITY};
use crate::error::ParseResult;
use crate::recovery::TokenSet;

const IF_BODY_END: TokenSet = TokenSet::new().with(TokenKind::Else).with(TokenKind::End);
const BODY_END: TokenSet = TokenSet::new().with(TokenKind::End);

impl Parser<'_> {
    /// `function` and `let` first, then the other statement forms.
    ///
    /// Returns `None` when the statement failed to parse; the error has been
    /// recorded and the cursor synchronized.
    pub(super) fn declaration(&mut self) -> Option<Stmt> {
        ensure_sufficient_stack(|| {
            trace!(line = self.cursor.current().line, kind = %self.cursor.current_kind(), "declaration");
            let result = if self.cursor.eat(TokenKind::Function) {
                self.function()
            } else if self.cursor.eat(TokenKind::Let) {
                self.var_declaration()
            } else {
                self.statement()
            };
            self.recovering(result)
        })
    }

    fn statement(&mut self) -> ParseResult<Stmt> {
        match self.cursor.current_kind() {
            TokenKind::If => {
                self.cursor.advance();
                self.if_statement()
            }
            TokenKind::Print => {
                self.cursor.advance();
                self.print_statement()
            }
            TokenKind::Return => {
                self.cursor.advance();
                self.return_statement()
            }
            TokenKind::While => {
                self.cursor.advance();
                self.while_statement()
            }
            _ => self.expression_statement(),
        }
    }

    /// `function name(a, b) <block> end`
    fn function(&mut self) -> ParseResult<Stmt> {
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expect function name.")?
            .clone();
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                if params.len() == MAX_ARITY {
                    let error = self
                        .cursor
                        .error(ErrorCode::E1004, "Can't have more than 255 parameters.");
                    self.report(error);
                }
                let param = self
                    .cursor
                    .expect(TokenKind::Identifier, "Expect parameter name.")?;
                params.push(param.clone());
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after parameters.")?;

        let body = self.block(BODY_END);
        self.cursor
            .expect(TokenKind::End, "Expect 'end' after function body.")?;
        Ok(Stmt::function(name, params, body))
    }

    /// `let name [= expr]`
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expect variable name.")?
            .clone();
        let initializer = if self.cursor.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };
        self.terminator("Expect newline or ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    /// `if (cond) then <block> [else <block>] end`
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after if condition.")?;
        self.cursor
            .expect(TokenKind::Then, "Expect 'then' after if condition.")?;

        let then_branch = Stmt::Block(self.block(IF_BODY_END));
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(Box::new(Stmt::Block(self.block(BODY_END))))
        } else {
            None
        };
        self.cursor
            .expect(TokenKind::End, "Expect 'end' after if statement.")?;

        Ok(Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch,
        })
    }

    /// `while (cond) do <block> end`
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after condition.")?;
        self.cursor
            .expect(TokenKind::Do, "Expect 'do' after while.")?;
        let body = self.block(BODY_END);
        self.cursor
            .expect(TokenKind::End, "Expect 'end' after while body.")?;
        Ok(Stmt::While {
            condition,
            body: Box::new(Stmt::Block(body)),
        })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let value = self.expression()?;
        self.terminator("Expect newline or ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    /// `return` with an optional value; bare when the line ends right away.
    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.cursor.previous().clone();
        let value: Option<Expr> = if self.cursor.at_statement_end() {
            None
        } else {
            Some(self.expression()?)
        };
        self.terminator("Expect newline or ';' after return value.")?;
        Ok(Stmt::Return { keyword, value })
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.terminator("Expect newline or ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    /// Statements up to (not including) a token in `terminators` or EOF.
    ///
    /// Separators are skipped before the terminator test, so `then` directly
    /// followed by `end` on a later line is an empty block.
    pub(super) fn block(&mut self, terminators: TokenSet) -> Vec<Stmt> {
        let mut statements = Vec::new();
        loop {
            self.cursor.skip_separators();
            if self.cursor.is_at_end() || self.cursor.check_any(terminators) {
                break;
            }
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }
        statements
    }

    /// A statement ends at `;`, a newline or EOF. A whole run of separators
    /// is consumed as one.
    fn terminator(&mut self, message: &str) -> ParseResult<()> {
        if self.cursor.at_statement_end() {
            self.cursor.skip_separators();
            Ok(())
        } else {
            Err(self.cursor.error(ErrorCode::E1005, message))
        }
    }
}
