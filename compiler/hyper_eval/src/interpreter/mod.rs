//! Tree-walking interpreter for flow programs.
//!
//! - `builder.rs`: `InterpreterBuilder` configuration
//! - `scope_guard.rs`: RAII frame management
//! - `exec.rs`: statement execution
//! - `eval.rs`: expression evaluation
//! - `function_call.rs`: call expressions and user function invocation
//!
//! Statement execution returns a [`Flow`] so `return` travels up the Rust
//! call stack as an ordinary value, separate from [`EvalError`], and stops
//! at the function call that owns it.

mod builder;
mod eval;
mod exec;
mod function_call;
mod scope_guard;

use hyper_ir::Stmt;
use tracing::debug;

use crate::environment::Environment;
use crate::errors::EvalError;
use crate::print_handler::SharedPrintHandler;
use crate::Value;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use scope_guard::ScopedInterpreter;

/// Which frame a function declaration closes over.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ClosureScope {
    /// Every function closes over the global frame. Names from an
    /// enclosing function or block are not visible in the body.
    #[default]
    Global,
    /// Functions close over the frame they are declared in, which then
    /// outlives its block.
    Lexical,
}

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    Normal,
    /// A `return` is unwinding to its function call.
    Return(Value),
}

/// Result of executing a statement.
pub type ExecResult = Result<Flow, EvalError>;

/// Interpreter state: the frame arena, output sink and call bookkeeping.
///
/// Globals persist across [`interpret`](Self::interpret) calls.
pub struct Interpreter {
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
    closure_scope: ClosureScope,
    max_call_depth: usize,
    call_depth: usize,
}

impl Interpreter {
    /// Interpreter printing to stdout with default settings.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Run a program.
    ///
    /// Function declarations at the top level are bound first, so a call
    /// may appear before the declaration it refers to. The remaining
    /// statements then run in order. The first runtime error aborts the
    /// run; a top-level `return` ends it quietly.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        let result = self.run_program(statements);
        if let Err(error) = &result {
            debug!(line = error.line, code = %error.code(), message = %error.kind, "runtime error");
        }
        result
    }

    fn run_program(&mut self, statements: &[Stmt]) -> Result<(), EvalError> {
        for stmt in statements.iter().filter(|stmt| stmt.is_function()) {
            self.execute(stmt)?;
        }
        for stmt in statements.iter().filter(|stmt| !stmt.is_function()) {
            if let Flow::Return(_) = self.execute(stmt)? {
                debug!("top-level return");
                break;
            }
        }
        Ok(())
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn closure_scope(&self) -> ClosureScope {
        self.closure_scope
    }

    /// User function calls currently on the stack.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
