//! Parsing domain models

mod parsed_tree;
mod syntax_node;

pub use parsed_tree::ParsedModule;
pub use syntax_node::{
    ClassDecl, ClassMember, Decorator, Expression, FieldDecl, ImportDecl, ImportSpecifier,
    MethodDecl, ModuleItem, PropertyName,
};
