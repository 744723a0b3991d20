//! Shared helpers for phase tests.

use hyper_diagnostic::Diagnostic;
use hyper_eval::buffer_handler;
use hyperc::{run_blueprint, run_flow, RunOptions, RunOutcome, Session};

/// A session whose program output is captured.
pub fn capture(options: RunOptions) -> Session {
    Session::new(options, buffer_handler())
}

/// Run a flow script; returns captured stdout and the outcome.
pub fn flow(source: &str) -> (String, RunOutcome) {
    flow_with(source, RunOptions::default())
}

pub fn flow_with(source: &str, options: RunOptions) -> (String, RunOutcome) {
    let session = capture(options);
    let outcome = run_flow(source, &session);
    (session.output.get_output(), outcome)
}

pub fn blueprint(source: &str) -> (String, RunOutcome) {
    let session = capture(RunOptions::default());
    let outcome = run_blueprint(source, &session);
    (session.output.get_output(), outcome)
}

/// Rendered diagnostics, one string each.
pub fn rendered(outcome: &RunOutcome) -> Vec<String> {
    outcome
        .diagnostics
        .diagnostics()
        .iter()
        .map(Diagnostic::to_string)
        .collect()
}
