//! TypeScript-specific tree-sitter configuration
//!
//! The TypeScript grammar is used for `.js` sources as well: it is a superset
//! of the JavaScript grammar for everything LWC bundles contain, and it is
//! the grammar that carries decorator syntax on class fields.

use tree_sitter::Language;

/// Grammar handed to the parser. Decorators are not part of the base
/// JavaScript grammar, so the language is always selected explicitly.
pub fn language() -> Language {
    tree_sitter_typescript::language_typescript()
}

/// TypeScript tree-sitter node kinds
///
/// These constants match the exact node type names from tree-sitter-typescript grammar.
pub mod node_kinds {
    // Program structure
    pub const PROGRAM: &str = "program";
    pub const HASH_BANG_LINE: &str = "hash_bang_line";

    // Declarations
    pub const CLASS_DECLARATION: &str = "class_declaration";
    pub const ABSTRACT_CLASS_DECLARATION: &str = "abstract_class_declaration";
    pub const CLASS: &str = "class";
    pub const CLASS_BODY: &str = "class_body";

    // Class members
    pub const PUBLIC_FIELD_DEFINITION: &str = "public_field_definition";
    pub const FIELD_DEFINITION: &str = "field_definition";
    pub const METHOD_DEFINITION: &str = "method_definition";

    // Property names
    pub const PROPERTY_IDENTIFIER: &str = "property_identifier";
    pub const PRIVATE_PROPERTY_IDENTIFIER: &str = "private_property_identifier";

    // Import/Export
    pub const IMPORT_STATEMENT: &str = "import_statement";
    pub const IMPORT_CLAUSE: &str = "import_clause";
    pub const NAMED_IMPORTS: &str = "named_imports";
    pub const IMPORT_SPECIFIER: &str = "import_specifier";
    pub const NAMESPACE_IMPORT: &str = "namespace_import";
    pub const EXPORT_STATEMENT: &str = "export_statement";

    // Decorators
    pub const DECORATOR: &str = "decorator";

    // Expressions
    pub const CALL_EXPRESSION: &str = "call_expression";
    pub const MEMBER_EXPRESSION: &str = "member_expression";
    pub const IDENTIFIER: &str = "identifier";
    pub const STRING: &str = "string";
    pub const ARGUMENTS: &str = "arguments";
}

/// Field names used by the grammar
pub mod fields {
    pub const NAME: &str = "name";
    pub const PROPERTY: &str = "property";
    pub const BODY: &str = "body";
    pub const SOURCE: &str = "source";
    pub const ALIAS: &str = "alias";
    pub const FUNCTION: &str = "function";
    pub const ARGUMENTS: &str = "arguments";
    pub const DECORATOR: &str = "decorator";
}

/// Check if a node kind declares a class the rewrite should look inside
pub fn is_class_declaration(kind: &str) -> bool {
    matches!(
        kind,
        node_kinds::CLASS_DECLARATION | node_kinds::ABSTRACT_CLASS_DECLARATION
    )
}

/// Check if a node kind is a class field
pub fn is_field_definition(kind: &str) -> bool {
    matches!(
        kind,
        node_kinds::PUBLIC_FIELD_DEFINITION | node_kinds::FIELD_DEFINITION
    )
}
