//! Expression evaluation.

use hyper_ir::{Expr, TokenKind};
use hyper_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::EvalResult;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::Value;

impl Interpreter {
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Variable(name) => self.env.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env.assign(name, value.clone())?;
                Ok(value)
            }
            Expr::Unary { operator, operand } => {
                let operand = self.evaluate(operand)?;
                evaluate_unary(operator.kind, &operand, operator.line)
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(&left, operator.kind, &right, operator.line)
            }
            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                // `or` stops on a truthy left side, `and` on a falsy one;
                // either way the operand itself is the result.
                let settled = if operator.kind == TokenKind::Or {
                    left.is_truthy()
                } else {
                    !left.is_truthy()
                };
                if settled {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Call {
                callee,
                paren,
                arguments,
            } => self.eval_call(callee, paren, arguments),
        })
    }
}
