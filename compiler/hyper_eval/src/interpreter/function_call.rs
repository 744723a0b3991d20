//! Call expressions and user function invocation.

use hyper_ir::{Expr, FunctionDecl, Token};
use tracing::trace;

use super::{Flow, Interpreter};
use crate::environment::FrameId;
use crate::errors::{arity_mismatch, not_callable, stack_overflow, EvalResult};
use crate::Value;

impl Interpreter {
    /// Callee first, then arguments left to right, then the callable and
    /// arity checks. Errors point at the closing paren's line.
    pub(super) fn eval_call(
        &mut self,
        callee: &Expr,
        paren: &Token,
        arguments: &[Expr],
    ) -> EvalResult {
        let callee = self.evaluate(callee)?;

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate(argument)?);
        }

        let Value::Callable(function) = callee else {
            return Err(not_callable(paren.line));
        };
        if values.len() != function.arity() {
            return Err(arity_mismatch(function.arity(), values.len(), paren.line));
        }
        function.call(self, values, paren.line)
    }

    /// Run a user function body in a fresh frame enclosed by `closure`.
    ///
    /// A `return` inside the body stops here and becomes the result;
    /// falling off the end yields `null`.
    pub(crate) fn call_function(
        &mut self,
        decl: &FunctionDecl,
        closure: FrameId,
        arguments: Vec<Value>,
        line: u32,
    ) -> EvalResult {
        if self.call_depth >= self.max_call_depth {
            return Err(stack_overflow(self.call_depth, line));
        }
        self.call_depth += 1;
        trace!(function = %decl.name.lexeme, depth = self.call_depth, "call");

        let result = self.with_frame(closure, |scoped| {
            for (param, value) in decl.params.iter().zip(arguments) {
                scoped.env.define(&param.lexeme, value);
            }
            scoped.execute_block(&decl.body)
        });

        self.call_depth -= 1;
        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Null),
        }
    }
}
