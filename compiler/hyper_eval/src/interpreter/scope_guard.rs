//! RAII frame guards.
//!
//! [`ScopedInterpreter`] makes a fresh frame current for as long as it
//! lives. On drop, including early exit through `?`, a `return`, or a
//! panic unwinding, it restores the previous frame and releases its own.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::FrameId;

/// Guard over an interpreter running inside a pushed frame.
///
/// Derefs to [`Interpreter`], so it can be used exactly like one.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    frame: FrameId,
    previous: FrameId,
}

impl ScopedInterpreter<'_> {
    /// The frame this guard owns.
    pub fn frame(&self) -> FrameId {
        self.frame
    }
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.set_current(self.previous);
        self.interpreter.env.release(self.frame);
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a frame enclosed by `enclosing` and make it current until the
    /// guard drops.
    pub fn scoped(&mut self, enclosing: FrameId) -> ScopedInterpreter<'_> {
        let previous = self.env.current();
        let frame = self.env.push(enclosing);
        self.env.set_current(frame);
        ScopedInterpreter {
            interpreter: self,
            frame,
            previous,
        }
    }

    /// Run `f` inside a new frame enclosed by `enclosing`.
    pub fn with_frame<T, F>(&mut self, enclosing: FrameId, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped(enclosing);
        f(&mut scoped)
    }
}
