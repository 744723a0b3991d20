//! Unary operator implementations for the evaluator.

use hyper_ir::TokenKind;

use crate::errors::{operand_must_be_number, EvalResult};
use crate::Value;

/// Apply a prefix operator. `!` (also spelled `not`) negates truthiness;
/// `-` requires a number.
pub fn evaluate_unary(op: TokenKind, operand: &Value, line: u32) -> EvalResult {
    match (op, operand) {
        (TokenKind::Bang, value) => Ok(Value::Bool(!value.is_truthy())),
        (TokenKind::Minus, Value::Number(n)) => Ok(Value::Number(-n)),
        _ => Err(operand_must_be_number(line)),
    }
}
