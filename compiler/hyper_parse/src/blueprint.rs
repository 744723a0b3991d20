//! Blueprint (schema) parser.
//!
//! Blueprint files declare sectors, classes, components and roles. Blank
//! lines are insignificant almost everywhere; inside `Attributes` blocks a
//! newline also separates entries.

use hyper_diagnostic::ErrorCode;
use hyper_ir::{Attachment, BlueprintDecl, ClassMember, Field, Token, TokenKind};
use hyper_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::recovery::{synchronize_blueprint, TokenSet};
use crate::BlueprintOutput;

const SKIPPED_BLOCKS: TokenSet = TokenSet::new()
    .with(TokenKind::Properties)
    .with(TokenKind::Flow);

const ATTACHMENT_KINDS: TokenSet = TokenSet::new()
    .with(TokenKind::Manifest)
    .with(TokenKind::Flow)
    .with(TokenKind::Blueprint);

/// Recursive-descent parser for `.hbp` sources.
pub struct BlueprintParser<'a> {
    cursor: Cursor<'a>,
    errors: Vec<ParseError>,
}

impl<'a> BlueprintParser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        BlueprintParser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    pub fn parse(mut self) -> BlueprintOutput {
        let mut declarations = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() {
                break;
            }
            if let Some(decl) = self.declaration() {
                declarations.push(decl);
            }
        }
        debug!(
            declarations = declarations.len(),
            errors = self.errors.len(),
            "parsed blueprint"
        );
        BlueprintOutput {
            declarations,
            errors: self.errors,
        }
    }

    fn declaration(&mut self) -> Option<BlueprintDecl> {
        let result = ensure_sufficient_stack(|| match self.cursor.current_kind() {
            TokenKind::Sector => {
                self.cursor.advance();
                self.sector()
            }
            TokenKind::Component => {
                self.cursor.advance();
                self.component()
            }
            TokenKind::Role => {
                self.cursor.advance();
                self.role()
            }
            TokenKind::Class => {
                self.cursor.advance();
                self.class()
            }
            _ => Err(self.cursor.error(
                ErrorCode::E1006,
                "Expect a component, role, or class declaration.",
            )),
        });
        match result {
            Ok(decl) => Some(decl),
            Err(error) => {
                self.errors.push(error);
                synchronize_blueprint(&mut self.cursor);
                None
            }
        }
    }

    /// `Sector Name { decl* }`
    fn sector(&mut self) -> ParseResult<BlueprintDecl> {
        let name = self.name("Expect Sector name.")?;
        self.cursor
            .expect(TokenKind::LeftBrace, "Expect '{' after Sector name.")?;
        let mut declarations = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() || self.cursor.check(TokenKind::RightBrace) {
                break;
            }
            if let Some(decl) = self.declaration() {
                declarations.push(decl);
            }
        }
        self.cursor
            .expect(TokenKind::RightBrace, "Expect '}' after Sector body.")?;
        Ok(BlueprintDecl::Sector { name, declarations })
    }

    /// `component Name { (Type : name ,?)* }` with `crunch (...)`,
    /// `properties {...}` and `Flow {...}` blocks skipped.
    fn component(&mut self) -> ParseResult<BlueprintDecl> {
        let name = self.name("Expect component name.")?;
        self.cursor
            .expect(TokenKind::LeftBrace, "Expect '{' after component name.")?;

        let mut fields = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() || self.cursor.check(TokenKind::RightBrace) {
                break;
            }

            if self.cursor.eat(TokenKind::Crunch) {
                self.cursor
                    .expect(TokenKind::LeftParen, "Expect '(' after 'crunch'.")?;
                self.skip_until(TokenKind::RightParen);
                self.cursor
                    .expect(TokenKind::RightParen, "Expect ')' after crunch block.")?;
                continue;
            }

            if self.cursor.eat_any(SKIPPED_BLOCKS).is_some() {
                self.cursor
                    .expect(TokenKind::LeftBrace, "Expect '{' after block keyword.")?;
                self.skip_until(TokenKind::RightBrace);
                self.cursor
                    .expect(TokenKind::RightBrace, "Expect '}' after block.")?;
                continue;
            }

            let ty = self.name("Expect type name for field.")?;
            self.cursor
                .expect(TokenKind::Colon, "Expect ':' after type name.")?;
            let field = self.name("Expect field name.")?;
            fields.push(Field { ty, name: field });
            self.cursor.eat(TokenKind::Comma);
        }

        self.cursor
            .expect(TokenKind::RightBrace, "Expect '}' after component body.")?;
        Ok(BlueprintDecl::Component { name, fields })
    }

    /// `role Name is Type`
    fn role(&mut self) -> ParseResult<BlueprintDecl> {
        let name = self.name("Expect role name.")?;
        self.cursor
            .expect(TokenKind::Is, "Expect 'is' after role name.")?;
        let ty = self.name("Expect component type for role.")?;
        Ok(BlueprintDecl::Role { name, ty })
    }

    /// `Class Name { (Attributes {..} | Attachments {..} | Fragment Name {..})* }`
    fn class(&mut self) -> ParseResult<BlueprintDecl> {
        let name = self.name("Expect class name.")?;
        self.cursor
            .expect(TokenKind::LeftBrace, "Expect '{' after class name.")?;

        let mut members = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() || self.cursor.check(TokenKind::RightBrace) {
                break;
            }
            let member = match self.cursor.current_kind() {
                TokenKind::Attributes => {
                    self.cursor.advance();
                    ClassMember::Attributes(self.attributes()?)
                }
                TokenKind::Attachments => {
                    self.cursor.advance();
                    ClassMember::Attachments(self.attachments()?)
                }
                TokenKind::Fragment => {
                    self.cursor.advance();
                    self.fragment()?
                }
                _ => {
                    return Err(self.cursor.error(
                        ErrorCode::E1006,
                        "Expect 'Attributes', 'Attachments', or 'Fragment' inside Class.",
                    ))
                }
            };
            members.push(member);
        }

        self.cursor
            .expect(TokenKind::RightBrace, "Expect '}' after class body.")?;
        Ok(BlueprintDecl::Class { name, members })
    }

    fn fragment(&mut self) -> ParseResult<ClassMember> {
        let name = self.name("Expect fragment name.")?;
        self.cursor
            .expect(TokenKind::LeftBrace, "Expect '{' after fragment name.")?;

        let mut members = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() || self.cursor.check(TokenKind::RightBrace) {
                break;
            }
            let member = match self.cursor.current_kind() {
                TokenKind::Attributes => {
                    self.cursor.advance();
                    ClassMember::Attributes(self.attributes()?)
                }
                TokenKind::Attachments => {
                    self.cursor.advance();
                    ClassMember::Attachments(self.attachments()?)
                }
                _ => {
                    return Err(self.cursor.error(
                        ErrorCode::E1006,
                        "Expect 'Attributes' or 'Attachments' inside Fragment.",
                    ))
                }
            };
            members.push(member);
        }

        self.cursor
            .expect(TokenKind::RightBrace, "Expect '}' after fragment body.")?;
        Ok(ClassMember::Fragment { name, members })
    }

    /// `{ Type : name, ... }`; entries are separated by commas or newlines
    /// and a trailing comma is allowed.
    fn attributes(&mut self) -> ParseResult<Vec<Field>> {
        self.cursor
            .expect(TokenKind::LeftBrace, "Expect '{' after 'Attributes'.")?;
        let mut fields = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.check(TokenKind::RightBrace) {
                break;
            }
            let ty = self.name("Expect a type name.")?;
            self.cursor
                .expect(TokenKind::Colon, "Expect ':' after type.")?;
            let name = self.name("Expect attribute instance name.")?;
            fields.push(Field { ty, name });
            if !self.cursor.eat(TokenKind::Comma) && !self.cursor.check(TokenKind::Eol) {
                break;
            }
        }
        self.cursor
            .expect(TokenKind::RightBrace, "Expect '}' after attributes list.")?;
        Ok(fields)
    }

    /// `{ (Manifest | Flow | Blueprint) : path ,? ... }`
    fn attachments(&mut self) -> ParseResult<Vec<Attachment>> {
        self.cursor
            .expect(TokenKind::LeftBrace, "Expect '{' after 'Attachments'.")?;
        let mut attachments = Vec::new();
        loop {
            self.cursor.skip_newlines();
            if self.cursor.is_at_end() || self.cursor.check(TokenKind::RightBrace) {
                break;
            }
            let Some(kind) = self.cursor.eat_any(ATTACHMENT_KINDS) else {
                return Err(self.cursor.error(
                    ErrorCode::E1006,
                    "Expect attachment type ('Manifest', 'Flow', 'Blueprint').",
                ));
            };
            let kind = kind.clone();
            self.cursor
                .expect(TokenKind::Colon, "Expect ':' after attachment type.")?;
            let (path, line) = self.path()?;
            attachments.push(Attachment { kind, path, line });
            self.cursor.eat(TokenKind::Comma);
        }
        self.cursor
            .expect(TokenKind::RightBrace, "Expect '}' after attachments list.")?;
        Ok(attachments)
    }

    /// `name` or `name.ext`.
    fn path(&mut self) -> ParseResult<(String, u32)> {
        let stem = self.cursor.expect(TokenKind::Identifier, "Expect a filename.")?;
        if self.cursor.eat(TokenKind::Dot) {
            let ext = self
                .cursor
                .expect(TokenKind::Identifier, "Expect a file extension.")?;
            return Ok((format!("{}.{}", stem.lexeme, ext.lexeme), stem.line));
        }
        Ok((stem.lexeme.clone(), stem.line))
    }

    fn name(&mut self, message: &str) -> ParseResult<Token> {
        Ok(self.cursor.expect(TokenKind::Identifier, message)?.clone())
    }

    /// Discard tokens up to (not including) `kind` or EOF.
    fn skip_until(&mut self, kind: TokenKind) {
        while !self.cursor.is_at_end() && !self.cursor.check(kind) {
            self.cursor.advance();
        }
    }
}
