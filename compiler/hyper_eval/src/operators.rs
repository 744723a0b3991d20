//! Binary operator implementations for the evaluator.
//!
//! The operand types are a closed set, so dispatch is a direct match on
//! the operator token's kind and the operand values.

use hyper_ir::TokenKind;

use crate::errors::{division_by_zero, invalid_addition, operands_must_be_numbers, EvalResult};
use crate::Value;

/// Apply the binary operator `op` to two evaluated operands.
///
/// `line` is the operator token's line, used for any error.
pub fn evaluate_binary(left: &Value, op: TokenKind, right: &Value, line: u32) -> EvalResult {
    match op {
        TokenKind::Plus => add(left, right, line),
        TokenKind::DotDot => Ok(concat(left, right)),
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        _ => {
            let (Some(a), Some(b)) = (left.as_number(), right.as_number()) else {
                return Err(operands_must_be_numbers(line));
            };
            numeric(a, op, b, line)
        }
    }
}

/// Number addition, or concatenation when either side is text.
fn add(left: &Value, right: &Value, line: u32) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        _ if left.is_str() || right.is_str() => Ok(concat(left, right)),
        _ => Err(invalid_addition(line)),
    }
}

/// `..` renders both sides as text regardless of type.
fn concat(left: &Value, right: &Value) -> Value {
    Value::string(format!("{left}{right}"))
}

#[allow(clippy::float_cmp)]
fn numeric(a: f64, op: TokenKind, b: f64, line: u32) -> EvalResult {
    let value = match op {
        TokenKind::Minus => Value::Number(a - b),
        TokenKind::Star => Value::Number(a * b),
        TokenKind::Slash => {
            if b == 0.0 {
                return Err(division_by_zero(line));
            }
            Value::Number(a / b)
        }
        TokenKind::Percent => Value::Number(a % b),
        TokenKind::Caret => Value::Number(a.powf(b)),
        TokenKind::Greater => Value::Bool(a > b),
        TokenKind::GreaterEqual => Value::Bool(a >= b),
        TokenKind::Less => Value::Bool(a < b),
        TokenKind::LessEqual => Value::Bool(a <= b),
        // The parser only builds binary nodes from the operators above.
        _ => return Err(operands_must_be_numbers(line)),
    };
    Ok(value)
}
