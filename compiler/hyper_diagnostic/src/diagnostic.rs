use std::fmt;

use crate::error_code::ErrorCode;

/// Diagnostic severity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("Error"),
            Severity::Warning => f.write_str("Warning"),
        }
    }
}

/// Where on its line a diagnostic points.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Location {
    /// Line only (lexer errors, runtime errors).
    Line,
    /// At the end-of-file token.
    AtEnd,
    /// At a newline token.
    AtNewline,
    /// At a token with this lexeme.
    AtLexeme(String),
}

impl Location {
    /// The ` at ...` fragment inserted after `Error` in syntax diagnostics.
    pub fn suffix(&self) -> String {
        match self {
            Location::Line => String::new(),
            Location::AtEnd => " at end".to_string(),
            Location::AtNewline => " at end of line".to_string(),
            Location::AtLexeme(lexeme) => format!(" at '{lexeme}'"),
        }
    }
}

/// A single reported problem.
///
/// Renders in one of two shapes depending on the code's phase:
/// - lexer/parser/driver: `[line 3] Error at 'x': Expect expression.`
/// - runtime: `Division by zero.` followed by `[line 3]` on the next line
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub line: u32,
    pub location: Location,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>, line: u32) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            line,
            location: Location::Line,
        }
    }

    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn as_warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    #[inline]
    pub fn is_runtime(&self) -> bool {
        self.code.is_runtime_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_runtime() {
            write!(f, "{}\n[line {}]", self.message, self.line)
        } else {
            write!(
                f,
                "[line {}] {}{}: {}",
                self.line,
                self.severity,
                self.location.suffix(),
                self.message
            )
        }
    }
}
