//! Error codes for all HyperScript diagnostics.
//!
//! Each code is a stable identifier (e.g. `E1001`) whose first digit names
//! the phase that raised it. `hyper explain <CODE>` prints the description.

use std::fmt;

/// Pipeline phase that owns an error code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexer,
    Parser,
    Runtime,
    Driver,
}

/// Error codes.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
/// - E7xxx: Driver errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character
    E0002,

    // Parser Errors (E1xxx)
    /// Expected expression
    E1001,
    /// Expected a specific token
    E1002,
    /// Invalid assignment target
    E1003,
    /// Too many arguments or parameters
    E1004,
    /// Missing statement terminator
    E1005,
    /// Expected a blueprint declaration or block
    E1006,

    // Runtime Errors (E6xxx)
    /// Operand type mismatch
    E6001,
    /// Division by zero
    E6002,
    /// Undefined variable
    E6003,
    /// Callee is not callable
    E6004,
    /// Wrong number of arguments
    E6005,
    /// Call depth exceeded
    E6006,
    /// Native function failed
    E6007,

    // Driver Errors (E7xxx)
    /// File could not be read
    E7001,
    /// Project entry file not found
    E7002,
    /// Unsupported source file extension
    E7003,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E7001,
        ErrorCode::E7002,
        ErrorCode::E7003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E7001 => "E7001",
            ErrorCode::E7002 => "E7002",
            ErrorCode::E7003 => "E7003",
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 => Phase::Lexer,
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004
            | ErrorCode::E1005
            | ErrorCode::E1006 => Phase::Parser,
            ErrorCode::E6001
            | ErrorCode::E6002
            | ErrorCode::E6003
            | ErrorCode::E6004
            | ErrorCode::E6005
            | ErrorCode::E6006
            | ErrorCode::E6007 => Phase::Runtime,
            ErrorCode::E7001 | ErrorCode::E7002 | ErrorCode::E7003 => Phase::Driver,
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.phase() == Phase::Lexer
    }

    pub fn is_parser_error(&self) -> bool {
        self.phase() == Phase::Parser
    }

    pub fn is_runtime_error(&self) -> bool {
        self.phase() == Phase::Runtime
    }

    /// Long-form explanation used by `hyper explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A string literal was opened with `\"` but the file ended before the \
                 closing quote. The partial string is discarded."
            }
            ErrorCode::E0002 => {
                "The scanner met a character that does not start any token. \
                 The character is skipped."
            }
            ErrorCode::E1001 => {
                "An expression was required here, for example after an operator, \
                 inside parentheses or after `print`."
            }
            ErrorCode::E1002 => {
                "A specific token was required at this point, such as `)` after a \
                 condition, `then` after an `if` condition or `end` after a block."
            }
            ErrorCode::E1003 => {
                "Only a bare variable name may appear on the left of `=`. \
                 The right-hand side is still parsed."
            }
            ErrorCode::E1004 => {
                "Calls and function declarations accept at most 255 arguments \
                 or parameters."
            }
            ErrorCode::E1005 => {
                "Statements end with a newline or `;`. Two statements cannot share \
                 a line without a `;` between them."
            }
            ErrorCode::E1006 => {
                "Blueprint files contain `Sector`, `Class`, `component` and `role` \
                 declarations. Class bodies contain `Attributes`, `Attachments` \
                 and `Fragment` blocks."
            }
            ErrorCode::E6001 => {
                "An operator received a value of the wrong type. Arithmetic and \
                 comparison need numbers; `+` also accepts text on either side."
            }
            ErrorCode::E6002 => "The right operand of `/` evaluated to zero.",
            ErrorCode::E6003 => {
                "The variable was read or assigned before any `let` declared it in \
                 an enclosing scope. Assignment never creates a variable."
            }
            ErrorCode::E6004 => "Only functions can be called.",
            ErrorCode::E6005 => {
                "A function was called with a different number of arguments than \
                 it declares parameters."
            }
            ErrorCode::E6006 => {
                "Function calls nested deeper than the interpreter's call-depth \
                 limit, usually because of unbounded recursion."
            }
            ErrorCode::E6007 => "A built-in function reported a failure.",
            ErrorCode::E7001 => "The source file or directory could not be read.",
            ErrorCode::E7002 => {
                "`hyper project` was given an entry file that does not exist under \
                 the project directory."
            }
            ErrorCode::E7003 => {
                "Only `.hfl` (flow scripts) and `.hbp` (blueprints) can be run."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
