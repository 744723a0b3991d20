//! Blueprint (schema) syntax trees.
//!
//! Blueprints describe sectors, classes, components and roles. They are
//! parsed and printed but never evaluated.

use crate::token::Token;

/// `Type : name` entry in a component body or an `Attributes` block.
#[derive(Clone, PartialEq, Debug)]
pub struct Field {
    pub ty: Token,
    pub name: Token,
}

/// `Manifest : path` entry in an `Attachments` block.
#[derive(Clone, PartialEq, Debug)]
pub struct Attachment {
    /// One of the `Manifest`, `Flow`, `Blueprint` keywords.
    pub kind: Token,
    /// `name` or `name.ext`.
    pub path: String,
    pub line: u32,
}

/// Members of a `Class` or `Fragment` body, in source order.
#[derive(Clone, PartialEq, Debug)]
pub enum ClassMember {
    Attributes(Vec<Field>),
    Attachments(Vec<Attachment>),
    /// Only valid directly inside a `Class`.
    Fragment {
        name: Token,
        members: Vec<ClassMember>,
    },
}

/// Top-level (or sector-level) blueprint declaration.
#[derive(Clone, PartialEq, Debug)]
pub enum BlueprintDecl {
    Sector {
        name: Token,
        declarations: Vec<BlueprintDecl>,
    },
    Class {
        name: Token,
        members: Vec<ClassMember>,
    },
    Component {
        name: Token,
        fields: Vec<Field>,
    },
    /// `role Name is Type`.
    Role { name: Token, ty: Token },
}

impl BlueprintDecl {
    pub fn name(&self) -> &Token {
        match self {
            BlueprintDecl::Sector { name, .. }
            | BlueprintDecl::Class { name, .. }
            | BlueprintDecl::Component { name, .. }
            | BlueprintDecl::Role { name, .. } => name,
        }
    }
}
