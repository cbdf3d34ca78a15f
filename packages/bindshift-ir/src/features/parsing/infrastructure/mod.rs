//! Parsing infrastructure
//!
//! This is the only place tree-sitter node access happens.

pub mod tree_sitter;

pub use self::tree_sitter::TreeSitterParser;
