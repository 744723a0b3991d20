//! Runtime errors and their constructors.
//!
//! Factory functions are the construction API; each builds an [`EvalError`]
//! from a structured [`EvalErrorKind`] plus the line of the token that
//! triggered it.
//!
//! ```ignore
//! use hyper_eval::errors::{division_by_zero, undefined_variable};
//! ```

use hyper_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// Typed runtime failure. `Display` is the user-visible message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Operands
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("Operands must be two numbers or at least one string.")]
    InvalidAddition,
    #[error("Division by zero.")]
    DivisionByZero,

    // Variables
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },

    // Calls
    #[error("Can only call functions and classes.")]
    NotCallable,
    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: usize, got: usize },
    #[error("Stack overflow.")]
    StackOverflow { depth: usize },
    #[error("{message}")]
    NativeFailure { name: String, message: String },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::OperandsMustBeNumbers
            | EvalErrorKind::OperandMustBeNumber
            | EvalErrorKind::InvalidAddition => ErrorCode::E6001,
            EvalErrorKind::DivisionByZero => ErrorCode::E6002,
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6003,
            EvalErrorKind::NotCallable => ErrorCode::E6004,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6005,
            EvalErrorKind::StackOverflow { .. } => ErrorCode::E6006,
            EvalErrorKind::NativeFailure { .. } => ErrorCode::E6007,
        }
    }
}

/// A runtime failure at a source line. Aborts the whole `interpret` call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}\n[line {line}]")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: u32,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, line: u32) -> Self {
        EvalError { kind, line }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// The message without the line suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.message(), self.line)
    }
}

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, EvalError>;

// Operand errors

#[cold]
pub fn operands_must_be_numbers(line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::OperandsMustBeNumbers, line)
}

#[cold]
pub fn operand_must_be_number(line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::OperandMustBeNumber, line)
}

#[cold]
pub fn invalid_addition(line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidAddition, line)
}

#[cold]
pub fn division_by_zero(line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero, line)
}

// Variable errors

#[cold]
pub fn undefined_variable(name: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndefinedVariable {
            name: name.to_string(),
        },
        line,
    )
}

// Call errors

#[cold]
pub fn not_callable(line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable, line)
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch { expected, got }, line)
}

#[cold]
pub fn stack_overflow(depth: usize, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { depth }, line)
}

#[cold]
pub fn native_failure(name: &str, message: impl Into<String>, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::NativeFailure {
            name: name.to_string(),
            message: message.into(),
        },
        line,
    )
}
