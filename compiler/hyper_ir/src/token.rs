//! Token types produced by the lexer.

use std::fmt;

/// Closed set of token kinds.
///
/// `#[repr(u8)]` keeps discriminants dense so the parser can build
/// bitset token sets over them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    DotDot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Percent,
    Caret,
    Colon,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Flow keywords
    And,
    Class,
    Attributes,
    Attachments,
    Else,
    End,
    False,
    For,
    Function,
    If,
    Then,
    Null,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Let,
    While,
    Do,

    // Blueprint keywords
    Sector,
    Fragment,
    Properties,
    Flow,
    Manifest,
    Blueprint,
    Component,
    Role,
    Is,
    Crunch,

    /// A newline; statements are terminated by these or by `;`.
    Eol,
    Eof,
}

impl TokenKind {
    /// Number of token kinds. Must fit in a `u128` bitset.
    pub const COUNT: usize = TokenKind::Eof as usize + 1;

    /// Dense index of this kind, used for bitset membership.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Upper snake case name used by token dumps (`LEFT_PAREN`, `DOT_DOT`).
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::DotDot => "DOT_DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Percent => "PERCENT",
            TokenKind::Caret => "CARET",
            TokenKind::Colon => "COLON",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Attributes => "ATTRIBUTES",
            TokenKind::Attachments => "ATTACHMENTS",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::Function => "FUNCTION",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Null => "NULL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Let => "LET",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Sector => "SECTOR",
            TokenKind::Fragment => "FRAGMENT",
            TokenKind::Properties => "PROPERTIES",
            TokenKind::Flow => "FLOW",
            TokenKind::Manifest => "MANIFEST",
            TokenKind::Blueprint => "BLUEPRINT",
            TokenKind::Component => "COMPONENT",
            TokenKind::Role => "ROLE",
            TokenKind::Is => "IS",
            TokenKind::Crunch => "CRUNCH",
            TokenKind::Eol => "EOL",
            TokenKind::Eof => "EOF",
        }
    }

    /// True for `;` and newline, the two statement separators.
    #[inline]
    pub const fn is_separator(self) -> bool {
        matches!(self, TokenKind::Semicolon | TokenKind::Eol)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value of a literal.
///
/// Tokens only ever carry `Number` or `Str`; `Bool` and `Null` appear in
/// `Expr::Literal` nodes built from the `true`/`false`/`null` keywords.
#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
    Null,
}

impl fmt::Display for Literal {
    /// Canonical form: numbers via `{:?}` (`1.0`), text double-quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n:?}"),
            Literal::Str(s) => write!(f, "\"{s}\""),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Null => f.write_str("null"),
        }
    }
}

/// A lexed token. Immutable after the lexer creates it.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text. Strings keep their quotes; `Eof` is empty.
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>, line: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Token without a decoded literal.
    pub fn simple(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Token::new(kind, lexeme, None, line)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    /// Dump form: `TOKEN[Type=NUMBER, Lexeme='1', Literal=1.0]`.
    ///
    /// Newlines in lexemes are escaped so each token stays on one line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TOKEN[Type={}, Lexeme='{}', Literal=",
            self.kind,
            self.lexeme.replace('\n', "\\n")
        )?;
        match &self.literal {
            Some(lit) => write!(f, "{lit}]"),
            None => f.write_str("null]"),
        }
    }
}

/// Ordered token sequence, always terminated by a single `Eof` token.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds only, handy for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}

#[cfg(test)]
mod tests;
