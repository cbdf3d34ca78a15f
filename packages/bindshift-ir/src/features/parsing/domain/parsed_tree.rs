//! Parsed module representation
//!
//! Owned by a single transform invocation and dropped once the output text
//! has been produced.

use super::syntax_node::{ClassDecl, ImportDecl, ModuleItem};

/// Parsed source file, reduced to the items the rewrite cares about
#[derive(Debug, Clone)]
pub struct ParsedModule {
    /// Imports and classes in document order
    pub items: Vec<ModuleItem>,

    /// File path (for error messages)
    pub file_path: String,

    /// Byte offset of the first statement slot (past a `#!` line, if any)
    pub prologue_end: usize,
}

impl ParsedModule {
    pub fn new(items: Vec<ModuleItem>, file_path: impl Into<String>) -> Self {
        Self {
            items,
            file_path: file_path.into(),
            prologue_end: 0,
        }
    }

    pub fn with_prologue_end(mut self, offset: usize) -> Self {
        self.prologue_end = offset;
        self
    }

    pub fn imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Import(import) => Some(import),
            _ => None,
        })
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.items.iter().filter_map(|item| match item {
            ModuleItem::Class(class) => Some(class),
            _ => None,
        })
    }
}
