//! Inspection commands: `lex` and `parse`.

use std::path::Path;

use hyper_diagnostic::DiagnosticQueue;
use hyper_ir::{AstPrinter, BlueprintPrinter};
use hyper_lexer::{lex_with_mode, LexError, LexMode};
use hyper_parse::ParseError;
use hyperc::{ExitStatus, SourceKind};

use super::{driver_failure, emit_diagnostics, read_source};

/// Blueprint keywords only exist in `.hbp` files.
fn mode_for(path: &str) -> LexMode {
    match SourceKind::from_path(Path::new(path)) {
        Some(SourceKind::Blueprint) => LexMode::Blueprint,
        _ => LexMode::Flow,
    }
}

/// Print the token stream, one token per line.
pub fn lex_file(path: &str) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(error) => return driver_failure(&error),
    };
    let lexed = lex_with_mode(&source, mode_for(path));

    println!("Tokens for '{path}' ({} tokens):", lexed.tokens.len());
    for token in lexed.tokens.iter() {
        println!("{token}");
    }

    let mut diagnostics = DiagnosticQueue::new();
    diagnostics.extend(lexed.errors.iter().map(LexError::to_diagnostic));
    emit_diagnostics(&diagnostics);
    status(&diagnostics)
}

/// Print the canonical tree text for a flow or blueprint file.
pub fn parse_file(path: &str) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(error) => return driver_failure(&error),
    };
    let mode = mode_for(path);
    let lexed = lex_with_mode(&source, mode);

    let mut diagnostics = DiagnosticQueue::new();
    diagnostics.extend(lexed.errors.iter().map(LexError::to_diagnostic));
    let tree = match mode {
        LexMode::Flow => {
            let parsed = hyper_parse::parse(&lexed.tokens);
            diagnostics.extend(parsed.errors.iter().map(ParseError::to_diagnostic));
            AstPrinter::print_program(&parsed.statements)
        }
        LexMode::Blueprint => {
            let parsed = hyper_parse::parse_blueprint(&lexed.tokens);
            diagnostics.extend(parsed.errors.iter().map(ParseError::to_diagnostic));
            BlueprintPrinter::print_program(&parsed.declarations)
        }
    };

    print!("{tree}");
    emit_diagnostics(&diagnostics);
    status(&diagnostics)
}

fn status(diagnostics: &DiagnosticQueue) -> i32 {
    if diagnostics.has_errors() {
        ExitStatus::SyntaxError.code()
    } else {
        ExitStatus::Success.code()
    }
}
