//! Command handlers for the `hyper` CLI.
//!
//! Each handler returns the process exit code; only `main` exits.

use std::io::IsTerminal;

use hyper_diagnostic::{ColorMode, DiagnosticEmitter, DiagnosticQueue, TerminalEmitter};
use hyperc::{DriverError, ExitStatus, RunOutcome};

mod debug;
mod explain;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::{run_file, run_project_dir};

/// Write queued diagnostics to stderr, with a summary when there are several.
fn emit_diagnostics(diagnostics: &DiagnosticQueue) {
    if diagnostics.is_empty() {
        return;
    }
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty);
    diagnostics.flush_to(&mut emitter);
    if diagnostics.error_count() > 1 {
        emitter.emit_summary(diagnostics.error_count(), diagnostics.warning_count());
    }
    emitter.flush();
}

/// Report a pipeline result and turn it into an exit code.
fn finish(result: Result<RunOutcome, DriverError>) -> i32 {
    match result {
        Ok(outcome) => {
            emit_diagnostics(&outcome.diagnostics);
            outcome.status.code()
        }
        Err(error) => driver_failure(&error),
    }
}

fn driver_failure(error: &DriverError) -> i32 {
    eprintln!("error[{}]: {error}", error.code());
    ExitStatus::DriverError.code()
}

/// Read a source file for the inspection commands.
fn read_source(path: &str) -> Result<String, DriverError> {
    let path = std::path::Path::new(path);
    std::fs::read_to_string(path).map_err(|e| DriverError::io(path, e))
}
