//! HyperScript evaluator.
//!
//! A tree-walking interpreter over the statement trees from `hyper_parse`.
//!
//! # Architecture
//!
//! - [`Environment`]: frame arena with handle-based enclosing links
//! - [`Interpreter`]: executes statements, threading [`Flow`] for `return`
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator dispatch
//! - [`Callable`]: user [`Function`]s and host [`NativeFunction`]s
//! - [`SharedPrintHandler`]: where `print` output goes

mod callable;
mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use callable::{Callable, Function, NativeFn, NativeFunction};
pub use environment::{Environment, FrameId};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{
    ClosureScope, ExecResult, Flow, Interpreter, InterpreterBuilder, ScopedInterpreter,
    DEFAULT_MAX_CALL_DEPTH,
};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;
