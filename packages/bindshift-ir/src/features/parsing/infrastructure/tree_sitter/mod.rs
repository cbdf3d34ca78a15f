//! Tree-sitter parser infrastructure

pub mod languages;
mod lowering;
mod parser;

pub use parser::TreeSitterParser;
