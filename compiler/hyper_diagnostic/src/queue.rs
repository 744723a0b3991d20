//! Diagnostic queue for collecting diagnostics across pipeline stages.
//!
//! Keeps emission order, counts errors, and can cap how many errors are
//! retained so a badly broken file does not flood the terminal.

use crate::{Diagnostic, DiagnosticEmitter};

/// Ordered collection of diagnostics.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    /// Maximum errors kept (0 = unlimited). Warnings are always kept.
    error_limit: usize,
    /// Errors dropped after the limit was hit.
    suppressed: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    pub fn with_error_limit(limit: usize) -> Self {
        DiagnosticQueue {
            error_limit: limit,
            ..DiagnosticQueue::default()
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            if self.limit_reached() {
                self.suppressed += 1;
                return;
            }
            self.error_count += 1;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, diagnostics: I) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0 || self.suppressed > 0
    }

    /// Errors seen, including suppressed ones.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count + self.suppressed
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count
    }

    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True if any retained diagnostic came from the runtime phase.
    pub fn has_runtime_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error() && d.is_runtime())
    }

    /// Write every retained diagnostic, then flush.
    pub fn flush_to<E: DiagnosticEmitter>(&self, emitter: &mut E) {
        emitter.emit_all(&self.diagnostics);
        emitter.flush();
    }

    fn limit_reached(&self) -> bool {
        self.error_limit != 0 && self.error_count >= self.error_limit
    }
}
