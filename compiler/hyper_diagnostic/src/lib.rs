//! Diagnostics for the HyperScript front end and evaluator.
//!
//! Every stage reports problems as a [`Diagnostic`]: a line, an optional
//! token location, a message and an [`ErrorCode`]. Diagnostics are collected
//! in a [`DiagnosticQueue`] and written out by an emitter.

mod diagnostic;
pub mod emitter;
mod error_code;
mod queue;

pub use diagnostic::{Diagnostic, Location, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::{ErrorCode, Phase};
pub use queue::DiagnosticQueue;
