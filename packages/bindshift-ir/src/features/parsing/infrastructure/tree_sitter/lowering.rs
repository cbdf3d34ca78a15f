//! Lowering from tree-sitter nodes to the narrow syntax model
//!
//! Walks the concrete tree once and keeps only imports, classes, members,
//! decorators and decorator expressions. Positions are captured here so the
//! rewrite never has to touch the tree again.

use tree_sitter::Node;

use super::languages::typescript::{fields, is_class_declaration, is_field_definition, node_kinds};
use crate::features::parsing::domain::{
    ClassDecl, ClassMember, Decorator, Expression, FieldDecl, ImportDecl, ImportSpecifier,
    MethodDecl, ModuleItem, ParsedModule, PropertyName,
};
use crate::shared::models::{Location, Span};

/// Convert tree-sitter Node to Span
pub(super) fn node_to_span(node: &Node) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        node.start_byte(),
        node.end_byte(),
        Location::new(start.row as u32 + 1, start.column as u32 + 1),
        Location::new(end.row as u32 + 1, end.column as u32 + 1),
    )
}

/// Extract text from a node
pub(super) fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

fn strip_quotes(text: &str) -> &str {
    text.trim_matches(|c| c == '\'' || c == '"' || c == '`')
}

pub(super) struct Lowering<'s> {
    source: &'s str,
}

impl<'s> Lowering<'s> {
    pub(super) fn new(source: &'s str) -> Self {
        Self { source }
    }

    pub(super) fn module(&self, root: Node, file_path: &str) -> ParsedModule {
        let mut items = Vec::new();
        let mut prologue_end = 0;

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                node_kinds::HASH_BANG_LINE => prologue_end = self.line_end(child.end_byte()),
                node_kinds::IMPORT_STATEMENT => {
                    if let Some(import) = self.import(&child) {
                        items.push(ModuleItem::Import(import));
                    }
                }
                _ => self.collect_classes(&child, &mut items),
            }
        }

        ParsedModule::new(items, file_path).with_prologue_end(prologue_end)
    }

    /// Offset just past the line break that ends the line containing `offset`
    fn line_end(&self, offset: usize) -> usize {
        match self.source[offset..].find('\n') {
            Some(i) => offset + i + 1,
            None => self.source.len(),
        }
    }

    fn collect_classes(&self, node: &Node, items: &mut Vec<ModuleItem>) {
        if self.is_class(node) {
            items.push(ModuleItem::Class(self.class(node)));
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_classes(&child, items);
        }
    }

    /// Declarations plus the anonymous `export default class { ... }` form
    fn is_class(&self, node: &Node) -> bool {
        if is_class_declaration(node.kind()) {
            return true;
        }
        node.kind() == node_kinds::CLASS
            && node
                .parent()
                .map(|p| p.kind() == node_kinds::EXPORT_STATEMENT)
                .unwrap_or(false)
    }

    fn class(&self, node: &Node) -> ClassDecl {
        let name = node
            .child_by_field_name(fields::NAME)
            .map(|n| node_text(&n, self.source).to_string());

        let members = node
            .child_by_field_name(fields::BODY)
            .map(|body| self.class_members(&body))
            .unwrap_or_default();

        ClassDecl {
            span: node_to_span(node),
            name,
            members,
        }
    }

    fn class_members(&self, body: &Node) -> Vec<ClassMember> {
        let mut members = Vec::new();
        // Method decorators are siblings that precede the method in the body
        let mut pending: Vec<Decorator> = Vec::new();

        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            if child.is_extra() || !child.is_named() {
                continue;
            }
            match child.kind() {
                node_kinds::DECORATOR => pending.push(self.decorator(&child)),
                kind if is_field_definition(kind) => {
                    let field = self.field(&child, std::mem::take(&mut pending));
                    members.push(ClassMember::Field(field));
                }
                node_kinds::METHOD_DEFINITION => {
                    let method = self.method(&child, std::mem::take(&mut pending));
                    members.push(ClassMember::Method(method));
                }
                _ => members.push(ClassMember::Other(node_to_span(&child))),
            }
        }

        members
    }

    fn field(&self, node: &Node, mut decorators: Vec<Decorator>) -> FieldDecl {
        let mut body_start: Option<Node> = None;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == node_kinds::DECORATOR {
                decorators.push(self.decorator(&child));
            } else if body_start.is_none() && !child.is_extra() {
                body_start = Some(child);
            }
        }

        let span = node_to_span(node);
        let body = match body_start {
            Some(first) => {
                let first_span = node_to_span(&first);
                Span::new(first_span.start_byte, span.end_byte, first_span.start, span.end)
            }
            None => Span::new(span.end_byte, span.end_byte, span.end, span.end),
        };

        let name = node
            .child_by_field_name(fields::NAME)
            .or_else(|| node.child_by_field_name(fields::PROPERTY))
            .map(|n| self.property_name(&n))
            .unwrap_or_else(|| PropertyName::Other(String::new()));

        FieldDecl {
            span,
            name,
            body,
            decorators,
        }
    }

    fn property_name(&self, node: &Node) -> PropertyName {
        let text = node_text(node, self.source).to_string();
        match node.kind() {
            node_kinds::PROPERTY_IDENTIFIER | node_kinds::IDENTIFIER => PropertyName::Identifier(text),
            node_kinds::PRIVATE_PROPERTY_IDENTIFIER => PropertyName::Private(text),
            _ => PropertyName::Other(text),
        }
    }

    fn method(&self, node: &Node, mut decorators: Vec<Decorator>) -> MethodDecl {
        let mut cursor = node.walk();
        for child in node.children_by_field_name(fields::DECORATOR, &mut cursor) {
            decorators.push(self.decorator(&child));
        }

        let name = node
            .child_by_field_name(fields::NAME)
            .map(|n| node_text(&n, self.source).to_string())
            .unwrap_or_default();

        MethodDecl {
            span: node_to_span(node),
            name,
            decorators,
        }
    }

    fn decorator(&self, node: &Node) -> Decorator {
        let mut cursor = node.walk();
        let expression = node
            .named_children(&mut cursor)
            .find(|c| !c.is_extra())
            .map(|expr| self.expression(&expr))
            .unwrap_or_else(|| Expression::Other {
                kind: node_kinds::DECORATOR.to_string(),
                text: node_text(node, self.source).to_string(),
            });

        Decorator {
            span: node_to_span(node),
            expression,
        }
    }

    fn expression(&self, node: &Node) -> Expression {
        match node.kind() {
            node_kinds::IDENTIFIER => Expression::Identifier(node_text(node, self.source).to_string()),
            node_kinds::MEMBER_EXPRESSION => {
                Expression::Member(node_text(node, self.source).to_string())
            }
            node_kinds::CALL_EXPRESSION => {
                let callee = node
                    .child_by_field_name(fields::FUNCTION)
                    .map(|f| self.expression(&f))
                    .unwrap_or_else(|| Expression::Other {
                        kind: String::new(),
                        text: String::new(),
                    });

                let arguments = node
                    .child_by_field_name(fields::ARGUMENTS)
                    .filter(|a| a.kind() == node_kinds::ARGUMENTS)
                    .map(|args| {
                        let mut cursor = args.walk();
                        args.named_children(&mut cursor)
                            .filter(|a| !a.is_extra())
                            .map(|a| self.expression(&a))
                            .collect()
                    })
                    .unwrap_or_default();

                Expression::Call {
                    callee: Box::new(callee),
                    arguments,
                }
            }
            other => Expression::Other {
                kind: other.to_string(),
                text: node_text(node, self.source).to_string(),
            },
        }
    }

    fn import(&self, node: &Node) -> Option<ImportDecl> {
        let source_node = node
            .child_by_field_name(fields::SOURCE)
            .or_else(|| {
                let mut cursor = node.walk();
                let found = node
                    .children(&mut cursor)
                    .find(|c| c.kind() == node_kinds::STRING);
                found
            })?;
        let source = strip_quotes(node_text(&source_node, self.source)).to_string();

        // `import type { ... }` brings in no runtime binding
        let mut cursor = node.walk();
        let type_only = node
            .children(&mut cursor)
            .any(|c| !c.is_named() && c.kind() == "type");

        let mut specifiers = Vec::new();
        if !type_only {
            let mut cursor = node.walk();
            for clause in node
                .children(&mut cursor)
                .filter(|c| c.kind() == node_kinds::IMPORT_CLAUSE)
            {
                self.import_clause(&clause, &mut specifiers);
            }
        }

        Some(ImportDecl {
            span: node_to_span(node),
            source,
            specifiers,
        })
    }

    fn import_clause(&self, clause: &Node, specifiers: &mut Vec<ImportSpecifier>) {
        let mut cursor = clause.walk();
        for child in clause.named_children(&mut cursor) {
            match child.kind() {
                node_kinds::IDENTIFIER => {
                    specifiers.push(ImportSpecifier::Default(
                        node_text(&child, self.source).to_string(),
                    ));
                }
                node_kinds::NAMESPACE_IMPORT => {
                    let mut inner = child.walk();
                    let local = child
                        .named_children(&mut inner)
                        .find(|c| c.kind() == node_kinds::IDENTIFIER)
                        .map(|c| node_text(&c, self.source).to_string());
                    if let Some(local) = local {
                        specifiers.push(ImportSpecifier::Namespace(local));
                    }
                }
                node_kinds::NAMED_IMPORTS => {
                    let mut inner = child.walk();
                    for spec in child
                        .named_children(&mut inner)
                        .filter(|c| c.kind() == node_kinds::IMPORT_SPECIFIER)
                    {
                        if let Some(named) = self.import_specifier(&spec) {
                            specifiers.push(named);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn import_specifier(&self, spec: &Node) -> Option<ImportSpecifier> {
        let imported = spec
            .child_by_field_name(fields::NAME)
            .map(|n| strip_quotes(node_text(&n, self.source)).to_string())?;
        let local = spec
            .child_by_field_name(fields::ALIAS)
            .map(|n| node_text(&n, self.source).to_string())
            .unwrap_or_else(|| imported.clone());
        Some(ImportSpecifier::Named { imported, local })
    }
}
