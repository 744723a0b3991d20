//! Lexer for HyperScript.
//!
//! Converts source text into a [`TokenList`]. Lexing never fails: bad input
//! is reported as [`LexError`]s alongside the tokens, and the offending text
//! is left out. The list always ends with exactly one `Eof` token.
//!
//! Newlines are significant (they terminate statements) and become `Eol`
//! tokens. `//` comments run to the end of the line and produce nothing.

mod cursor;
mod keywords;
mod lex_error;

use hyper_ir::{Literal, Token, TokenKind, TokenList};
use tracing::debug;

use cursor::Cursor;
pub use keywords::LexMode;
pub use lex_error::{LexError, LexErrorKind};

/// Tokens plus whatever went wrong producing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex a flow script.
pub fn lex(source: &str) -> LexOutput {
    lex_with_mode(source, LexMode::Flow)
}

/// Lex with an explicit keyword table.
pub fn lex_with_mode(source: &str, mode: LexMode) -> LexOutput {
    let mut scanner = Scanner::new(source, mode);
    scanner.scan_all();
    debug!(
        ?mode,
        tokens = scanner.tokens.len(),
        errors = scanner.errors.len(),
        "lexed source"
    );
    LexOutput {
        tokens: scanner.tokens,
        errors: scanner.errors,
    }
}

struct Scanner<'a> {
    cursor: Cursor<'a>,
    mode: LexMode,
    start: usize,
    line: u32,
    tokens: TokenList,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, mode: LexMode) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            mode,
            start: 0,
            line: 1,
            // Rough guess: one token per four bytes.
            tokens: TokenList::with_capacity(source.len() / 4 + 1),
            errors: Vec::new(),
        }
    }

    fn scan_all(&mut self) {
        while !self.cursor.is_eof() {
            self.start = self.cursor.pos();
            self.scan_token();
        }
        self.tokens.push(Token::simple(TokenKind::Eof, "", self.line));
    }

    fn scan_token(&mut self) {
        let byte = self.cursor.advance();
        match byte {
            b'(' => self.add(TokenKind::LeftParen),
            b')' => self.add(TokenKind::RightParen),
            b'{' => self.add(TokenKind::LeftBrace),
            b'}' => self.add(TokenKind::RightBrace),
            b',' => self.add(TokenKind::Comma),
            b'-' => self.add(TokenKind::Minus),
            b'+' => self.add(TokenKind::Plus),
            b';' => self.add(TokenKind::Semicolon),
            b'*' => self.add(TokenKind::Star),
            b'%' => self.add(TokenKind::Percent),
            b'^' => self.add(TokenKind::Caret),
            b':' => self.add(TokenKind::Colon),
            b'.' => self.add_either(b'.', TokenKind::DotDot, TokenKind::Dot),
            b'!' => self.add_either(b'=', TokenKind::BangEqual, TokenKind::Bang),
            b'=' => self.add_either(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'<' => self.add_either(b'=', TokenKind::LessEqual, TokenKind::Less),
            b'>' => self.add_either(b'=', TokenKind::GreaterEqual, TokenKind::Greater),
            b'/' => {
                if self.cursor.eat(b'/') {
                    self.cursor.eat_until_newline_or_eof();
                } else {
                    self.add(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => {
                self.add(TokenKind::Eol);
                self.line += 1;
            }
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            b if is_ident_start(b) => self.identifier(),
            lead => {
                self.cursor.finish_char(lead);
                let ch = self
                    .cursor
                    .slice(self.start, self.cursor.pos())
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                self.errors.push(LexError::unexpected_character(ch, self.line));
            }
        }
    }

    fn add(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_either(&mut self, next: u8, matched: TokenKind, single: TokenKind) {
        let kind = if self.cursor.eat(next) { matched } else { single };
        self.add(kind);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let text = self.cursor.slice(self.start, self.cursor.pos());
        self.tokens.push(Token::new(kind, text, literal, self.line));
    }

    /// String bodies may span lines; the token is tagged with its first line.
    fn string(&mut self) {
        let start_line = self.line;
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => break,
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                _ => {
                    self.errors.push(LexError::unterminated_string(start_line));
                    return;
                }
            }
        }
        self.cursor.advance();

        let lexeme = self.cursor.slice(self.start, self.cursor.pos());
        let value = &lexeme[1..lexeme.len() - 1];
        self.tokens.push(Token::new(
            TokenKind::String,
            lexeme,
            Some(Literal::Str(value.to_string())),
            start_line,
        ));
    }

    /// Digits with an optional fraction. A trailing `.` without a digit after
    /// it is left for the next token, so `1..2` is `1`, `..`, `2`.
    fn number(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        let text = self.cursor.slice(self.start, self.cursor.pos());
        // Digit-only text always parses; 0.0 is unreachable.
        let value = text.parse::<f64>().unwrap_or(0.0);
        self.add_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        self.cursor
            .eat_while(|b| is_ident_start(b) || b.is_ascii_digit());
        let text = self.cursor.slice(self.start, self.cursor.pos());
        let kind = keywords::lookup(text, self.mode).unwrap_or(TokenKind::Identifier);
        self.add(kind);
    }
}

#[inline]
fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}
