//! The flow and blueprint pipelines.

use std::path::Path;

use hyper_diagnostic::DiagnosticQueue;
use hyper_eval::{ClosureScope, InterpreterBuilder};
use hyper_ir::{AstPrinter, BlueprintPrinter, TokenList};
use hyper_lexer::{lex_with_mode, LexError, LexMode};
use tracing::{debug, info};

use crate::{DriverError, Session};

/// How a run ended, mapped onto sysexits-style process codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Usage,
    SyntaxError,
    RuntimeError,
    DriverError,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 64,
            ExitStatus::SyntaxError => 65,
            ExitStatus::RuntimeError => 70,
            ExitStatus::DriverError => 74,
        }
    }
}

/// Diagnostics from one pipeline run and the resulting status.
#[derive(Debug)]
pub struct RunOutcome {
    pub status: ExitStatus,
    pub diagnostics: DiagnosticQueue,
}

impl RunOutcome {
    fn from_queue(diagnostics: DiagnosticQueue) -> Self {
        let status = if diagnostics.has_runtime_errors() {
            ExitStatus::RuntimeError
        } else if diagnostics.has_errors() {
            ExitStatus::SyntaxError
        } else {
            ExitStatus::Success
        };
        RunOutcome {
            status,
            diagnostics,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.status == ExitStatus::Success
    }
}

/// Source language, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// `.hfl` scripts.
    Flow,
    /// `.hbp` schema files.
    Blueprint,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "hfl" => Some(SourceKind::Flow),
            "hbp" => Some(SourceKind::Blueprint),
            _ => None,
        }
    }
}

/// Read `path` and run it through the pipeline its extension selects.
pub fn run_path(path: &Path, session: &Session) -> Result<RunOutcome, DriverError> {
    let Some(kind) = SourceKind::from_path(path) else {
        return Err(DriverError::UnsupportedExtension {
            path: path.to_path_buf(),
        });
    };
    let source = std::fs::read_to_string(path).map_err(|e| DriverError::io(path, e))?;
    info!(path = %path.display(), ?kind, "running");

    Ok(match kind {
        SourceKind::Flow => run_flow(&source, session),
        SourceKind::Blueprint => run_blueprint(&source, session),
    })
}

/// Lex, parse and, if both were clean, interpret a flow script.
///
/// Lexical and syntax errors are all collected before giving up, so a
/// single run reports every problem the front end found.
pub fn run_flow(source: &str, session: &Session) -> RunOutcome {
    let mut diagnostics = DiagnosticQueue::new();
    let tokens = front_end(source, LexMode::Flow, "--- Tokens ---", session, &mut diagnostics);

    let parsed = hyper_parse::parse(&tokens);
    diagnostics.extend(parsed.errors.iter().map(hyper_parse::ParseError::to_diagnostic));
    if diagnostics.has_errors() {
        debug!(errors = diagnostics.error_count(), "front end failed; not running");
        return RunOutcome::from_queue(diagnostics);
    }

    if session.options.dump_ast {
        session.output.println("--- AST ---");
        let tree = AstPrinter::print_program(&parsed.statements);
        session.output.println(tree.trim_end());
    }

    let closure_scope = if session.options.lexical_closures {
        ClosureScope::Lexical
    } else {
        ClosureScope::Global
    };
    let mut interpreter = InterpreterBuilder::new()
        .print_handler(session.output.clone())
        .closure_scope(closure_scope)
        .with_clock()
        .build();
    if let Err(error) = interpreter.interpret(&parsed.statements) {
        diagnostics.push(error.to_diagnostic());
    }
    RunOutcome::from_queue(diagnostics)
}

/// Lex and parse a blueprint file, then print its tree.
pub fn run_blueprint(source: &str, session: &Session) -> RunOutcome {
    let mut diagnostics = DiagnosticQueue::new();
    let tokens = front_end(
        source,
        LexMode::Blueprint,
        "--- Blueprint Tokens ---",
        session,
        &mut diagnostics,
    );

    let parsed = hyper_parse::parse_blueprint(&tokens);
    diagnostics.extend(parsed.errors.iter().map(hyper_parse::ParseError::to_diagnostic));
    if !diagnostics.has_errors() {
        let tree = BlueprintPrinter::print_program(&parsed.declarations);
        session.output.println(tree.trim_end());
    }
    RunOutcome::from_queue(diagnostics)
}

/// Scan `source`, queue lexical errors and dump tokens when asked.
fn front_end(
    source: &str,
    mode: LexMode,
    heading: &str,
    session: &Session,
    diagnostics: &mut DiagnosticQueue,
) -> TokenList {
    let lexed = lex_with_mode(source, mode);
    diagnostics.extend(lexed.errors.iter().map(LexError::to_diagnostic));

    if session.options.dump_tokens {
        session.output.println(heading);
        for token in lexed.tokens.iter() {
            session.output.println(&token.to_string());
        }
    }
    lexed.tokens
}
