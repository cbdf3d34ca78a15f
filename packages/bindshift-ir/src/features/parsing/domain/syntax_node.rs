//! Narrow syntax model
//!
//! Only the node kinds the decorator rewrite needs are represented: imports,
//! classes with their members, decorators, and the handful of expression
//! shapes a decorator can carry. Everything else is opaque.

use crate::shared::models::Span;

/// Top-level item of interest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleItem {
    Import(ImportDecl),
    Class(ClassDecl),
}

/// `import ... from "source";`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub span: Span,
    /// Module path with quotes stripped
    pub source: String,
    pub specifiers: Vec<ImportSpecifier>,
}

impl ImportDecl {
    /// True if `imported` is brought in under the local name `local`
    pub fn binds(&self, imported: &str, local: &str) -> bool {
        self.specifiers.iter().any(|s| {
            matches!(s, ImportSpecifier::Named { imported: i, local: l } if i == imported && l == local)
        })
    }

    /// True if any specifier introduces the local binding `local`
    pub fn binds_local(&self, local: &str) -> bool {
        self.specifiers.iter().any(|s| s.local() == local)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpecifier {
    /// `{ imported }` or `{ imported as local }`
    Named { imported: String, local: String },
    /// `import local from ...`
    Default(String),
    /// `import * as local from ...`
    Namespace(String),
}

impl ImportSpecifier {
    /// Name the specifier binds in module scope
    pub fn local(&self) -> &str {
        match self {
            ImportSpecifier::Named { local, .. } => local,
            ImportSpecifier::Default(local) | ImportSpecifier::Namespace(local) => local,
        }
    }
}

/// Class declaration (named, abstract, or anonymous default export)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub span: Span,
    pub name: Option<String>,
    pub members: Vec<ClassMember>,
}

impl ClassDecl {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Field(FieldDecl),
    Method(MethodDecl),
    Other(Span),
}

/// Class field (`x;`, `#x = 1;`, `@api x;`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub span: Span,
    pub name: PropertyName,
    /// Everything after the decorators: modifiers, name, type, initializer
    pub body: Span,
    pub decorators: Vec<Decorator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub span: Span,
    pub name: String,
    pub decorators: Vec<Decorator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyName {
    Identifier(String),
    Private(String),
    /// String, number or computed key; kept verbatim
    Other(String),
}

impl PropertyName {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyName::Identifier(s) | PropertyName::Private(s) | PropertyName::Other(s) => s,
        }
    }

    /// Identifier or `#private` name, usable on the left of an assignment
    pub fn is_plain(&self) -> bool {
        !matches!(self, PropertyName::Other(_))
    }
}

/// `@expression`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    pub span: Span,
    pub expression: Expression,
}

impl Decorator {
    /// Name token: `foo` for both `@foo` and `@foo(...)`
    pub fn name(&self) -> Option<&str> {
        match &self.expression {
            Expression::Identifier(name) => Some(name),
            Expression::Call { callee, .. } => match callee.as_ref() {
                Expression::Identifier(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    /// Argument list; `None` when the decorator is not a call
    pub fn arguments(&self) -> Option<&[Expression]> {
        match &self.expression {
            Expression::Call { arguments, .. } => Some(arguments),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(String),
    /// `a.b.c`, kept verbatim
    Member(String),
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    Other {
        kind: String,
        text: String,
    },
}

impl Expression {
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Expression::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Short source-like rendering for diagnostics
    pub fn source_text(&self) -> String {
        match self {
            Expression::Identifier(s) | Expression::Member(s) => s.clone(),
            Expression::Other { text, .. } => text.clone(),
            Expression::Call { callee, arguments } => {
                let args: Vec<String> = arguments.iter().map(|a| a.source_text()).collect();
                format!("{}({})", callee.source_text(), args.join(", "))
            }
        }
    }
}
