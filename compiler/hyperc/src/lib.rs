//! HyperScript driver.
//!
//! Wires the lexer, parsers and interpreter into the two pipelines a
//! source file can go through:
//!
//! ```text
//! .hfl  source ──► lex ──► parse ──► interpret
//! .hbp  source ──► lex (blueprint keywords) ──► parse ──► print tree
//! ```
//!
//! Program output goes to a [`SharedPrintHandler`]; problems are collected
//! in a [`DiagnosticQueue`] and handed back in a [`RunOutcome`] for the
//! caller to emit. Nothing here exits the process.

mod error;
mod pipeline;
mod project;
mod tracing_setup;

pub use error::DriverError;
pub use pipeline::{run_blueprint, run_flow, run_path, ExitStatus, RunOutcome, SourceKind};
pub use project::{discover_files, run_project};
pub use tracing_setup::init_tracing;

use hyper_eval::SharedPrintHandler;

/// Switches shared by every run command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the token stream before parsing.
    pub dump_tokens: bool,
    /// Print the canonical tree text before evaluating.
    pub dump_ast: bool,
    /// Functions capture their defining frame instead of the globals.
    pub lexical_closures: bool,
}

/// Everything a pipeline needs besides the source text.
#[derive(Clone)]
pub struct Session {
    pub options: RunOptions,
    pub output: SharedPrintHandler,
}

impl Session {
    pub fn new(options: RunOptions, output: SharedPrintHandler) -> Self {
        Session { options, output }
    }

    /// Session printing to the process's stdout.
    pub fn stdout(options: RunOptions) -> Self {
        Session::new(options, hyper_eval::stdout_handler())
    }
}
