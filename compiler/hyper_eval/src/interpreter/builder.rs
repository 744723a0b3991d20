//! `InterpreterBuilder` for creating configured interpreters.

use std::rc::Rc;

use super::{ClosureScope, Interpreter};
use crate::callable::{Callable, NativeFunction};
use crate::environment::Environment;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Value;

/// Nested user function calls allowed before "Stack overflow.".
pub const DEFAULT_MAX_CALL_DEPTH: usize = 2048;

/// Builder for [`Interpreter`].
///
/// Defaults: stdout output, [`ClosureScope::Global`], a call depth of
/// [`DEFAULT_MAX_CALL_DEPTH`], and no native functions.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    closure_scope: ClosureScope,
    max_call_depth: usize,
    natives: Vec<NativeFunction>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            closure_scope: ClosureScope::default(),
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            natives: Vec::new(),
        }
    }

    /// Where `print` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn closure_scope(mut self, scope: ClosureScope) -> Self {
        self.closure_scope = scope;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Bind a host function as a global.
    #[must_use]
    pub fn native(mut self, native: NativeFunction) -> Self {
        self.natives.push(native);
        self
    }

    /// Bind `clock()`.
    #[must_use]
    pub fn with_clock(self) -> Self {
        self.native(NativeFunction::clock())
    }

    pub fn build(self) -> Interpreter {
        let mut env = Environment::new();
        for native in self.natives {
            let name = native.name().to_string();
            env.define(&name, Value::Callable(Rc::new(native)));
        }
        Interpreter {
            env,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            closure_scope: self.closure_scope,
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
