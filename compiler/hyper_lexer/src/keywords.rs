//! Keyword resolution.
//!
//! Two tables share one length-bucketed lookup:
//! 1. **Flow keywords**, recognized in every mode.
//! 2. **Blueprint keywords**, recognized only in [`LexMode::Blueprint`], so
//!    scripts may still use names like `role` or `is` as identifiers.
//!
//! Keywords are case-sensitive: `Class` is a keyword, `class` is not.

use hyper_ir::TokenKind;

/// Which keyword table applies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum LexMode {
    /// `.hfl` scripts.
    #[default]
    Flow,
    /// `.hbp` schema files.
    Blueprint,
}

/// Look up `text` as a keyword for `mode`.
#[inline]
pub(crate) fn lookup(text: &str, mode: LexMode) -> Option<TokenKind> {
    if let Some(kind) = flow_keyword(text) {
        return Some(kind);
    }
    match mode {
        LexMode::Flow => None,
        LexMode::Blueprint => blueprint_keyword(text),
    }
}

fn flow_keyword(text: &str) -> Option<TokenKind> {
    // All flow keywords are 2-11 bytes.
    if !(2..=11).contains(&text.len()) {
        return None;
    }
    match text.len() {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            "or" => Some(TokenKind::Or),
            _ => None,
        },
        3 => match text {
            "and" => Some(TokenKind::And),
            "end" => Some(TokenKind::End),
            "for" => Some(TokenKind::For),
            "let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "null" => Some(TokenKind::Null),
            "then" => Some(TokenKind::Then),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "Class" => Some(TokenKind::Class),
            "false" => Some(TokenKind::False),
            "print" => Some(TokenKind::Print),
            "super" => Some(TokenKind::Super),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        8 => match text {
            "function" => Some(TokenKind::Function),
            _ => None,
        },
        10 => match text {
            "Attributes" => Some(TokenKind::Attributes),
            _ => None,
        },
        11 => match text {
            "Attachments" => Some(TokenKind::Attachments),
            _ => None,
        },
        _ => None,
    }
}

fn blueprint_keyword(text: &str) -> Option<TokenKind> {
    match text {
        "Sector" => Some(TokenKind::Sector),
        "Fragment" => Some(TokenKind::Fragment),
        "properties" => Some(TokenKind::Properties),
        "Flow" => Some(TokenKind::Flow),
        "Manifest" => Some(TokenKind::Manifest),
        "Blueprint" => Some(TokenKind::Blueprint),
        "component" => Some(TokenKind::Component),
        "role" => Some(TokenKind::Role),
        "is" => Some(TokenKind::Is),
        "crunch" => Some(TokenKind::Crunch),
        _ => None,
    }
}
