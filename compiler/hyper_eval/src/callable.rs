//! Callable values: user functions and host-provided natives.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use hyper_ir::FunctionDecl;

use crate::environment::FrameId;
use crate::errors::{native_failure, EvalResult};
use crate::interpreter::Interpreter;
use crate::Value;

/// Anything a call expression can invoke.
///
/// The interpreter checks arity before `call`, so implementations may
/// assume `arguments.len() == self.arity()`.
pub trait Callable {
    fn name(&self) -> &str;

    fn arity(&self) -> usize;

    /// Invoke with already-evaluated arguments. `line` is the line of the
    /// call's closing paren, used for any error raised by the call itself.
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>, line: u32) -> EvalResult;

    fn is_native(&self) -> bool {
        false
    }
}

/// A user-defined function and the frame it closes over.
pub struct Function {
    decl: Rc<FunctionDecl>,
    closure: FrameId,
}

impl Function {
    pub fn new(decl: Rc<FunctionDecl>, closure: FrameId) -> Self {
        Function { decl, closure }
    }

    pub fn declaration(&self) -> &FunctionDecl {
        &self.decl
    }

    /// Frame that becomes the parent of every call frame.
    pub fn closure(&self) -> FrameId {
        self.closure
    }
}

impl Callable for Function {
    fn name(&self) -> &str {
        &self.decl.name.lexeme
    }

    fn arity(&self) -> usize {
        self.decl.arity()
    }

    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>, line: u32) -> EvalResult {
        interpreter.call_function(&self.decl, self.closure, arguments, line)
    }
}

/// Host function signature. An `Err` becomes a runtime error at the call.
pub type NativeFn = fn(&[Value]) -> Result<Value, String>;

/// A function implemented by the host.
pub struct NativeFunction {
    name: &'static str,
    arity: usize,
    func: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, arity: usize, func: NativeFn) -> Self {
        NativeFunction { name, arity, func }
    }

    /// `clock()`: seconds since the Unix epoch.
    pub const fn clock() -> Self {
        NativeFunction::new("clock", 0, clock)
    }
}

impl Callable for NativeFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self, _interpreter: &mut Interpreter, arguments: Vec<Value>, line: u32) -> EvalResult {
        (self.func)(&arguments).map_err(|message| native_failure(self.name, message, line))
    }

    fn is_native(&self) -> bool {
        true
    }
}

fn clock(_arguments: &[Value]) -> Result<Value, String> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| Value::Number(elapsed.as_secs_f64()))
        .map_err(|err| err.to_string())
}
