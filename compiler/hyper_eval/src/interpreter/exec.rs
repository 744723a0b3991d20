//! Statement execution.

use std::rc::Rc;

use hyper_ir::{FunctionDecl, Stmt};
use hyper_stack::ensure_sufficient_stack;

use super::{ClosureScope, ExecResult, Flow, Interpreter};
use crate::callable::Function;
use crate::environment::FrameId;
use crate::Value;

impl Interpreter {
    pub fn execute(&mut self, stmt: &Stmt) -> ExecResult {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(Flow::Normal)
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(init) => self.evaluate(init)?,
                    None => Value::Null,
                };
                self.env.define(&name.lexeme, value);
                Ok(Flow::Normal)
            }
            Stmt::Block(statements) => {
                let enclosing = self.env.current();
                self.with_frame(enclosing, |scoped| scoped.execute_block(statements))
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Flow::Normal)
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let flow @ Flow::Return(_) = self.execute(body)? {
                        return Ok(flow);
                    }
                }
                Ok(Flow::Normal)
            }
            Stmt::Function(decl) => {
                self.declare_function(decl);
                Ok(Flow::Normal)
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            }
        })
    }

    /// Run statements in the current frame, stopping at the first `return`.
    pub fn execute_block(&mut self, statements: &[Stmt]) -> ExecResult {
        for stmt in statements {
            if let flow @ Flow::Return(_) = self.execute(stmt)? {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    fn declare_function(&mut self, decl: &Rc<FunctionDecl>) {
        let closure = match self.closure_scope {
            ClosureScope::Global => FrameId::GLOBAL,
            ClosureScope::Lexical => {
                let frame = self.env.current();
                self.env.pin(frame);
                frame
            }
        };
        let function = Function::new(Rc::clone(decl), closure);
        self.env
            .define(&decl.name.lexeme, Value::Callable(Rc::new(function)));
    }
}
