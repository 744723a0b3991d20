//! Flow (script) syntax trees.
//!
//! Expressions and statements are owned trees; nothing is shared between
//! nodes except function declarations, which are reference counted so a
//! runtime function value can hold on to its body without cloning it.

use std::rc::Rc;

use crate::token::{Literal, Token};

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Literal(Literal),
    /// Variable read. The token carries the name and its line.
    Variable(Token),
    /// `name = value`. The target is always a bare variable.
    Assign { name: Token, value: Box<Expr> },
    /// `!x`, `not x`, `-x`.
    Unary { operator: Token, operand: Box<Expr> },
    /// Arithmetic, comparison, equality and `..`.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// Short-circuiting `and` / `or`.
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Grouping(Box<Expr>),
    /// `callee(arguments)`. `paren` is the closing `)`, used for error lines.
    Call {
        callee: Box<Expr>,
        paren: Token,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    pub fn literal(value: Literal) -> Self {
        Expr::Literal(value)
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }

    pub fn unary(operator: Token, operand: Expr) -> Self {
        Expr::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn call(callee: Expr, paren: Token, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        }
    }
}

/// A `function name(params) ... end` declaration.
#[derive(Clone, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

impl FunctionDecl {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    /// `let name [= initializer]`.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Function(Rc<FunctionDecl>),
    /// `keyword` is the `return` token, kept for its line.
    Return {
        keyword: Token,
        value: Option<Expr>,
    },
}

impl Stmt {
    pub fn function(name: Token, params: Vec<Token>, body: Vec<Stmt>) -> Self {
        Stmt::Function(Rc::new(FunctionDecl { name, params, body }))
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, Stmt::Function(_))
    }
}
