//! Tree-sitter parser implementation
//!
//! This is where tree-sitter dependency lives.

use tree_sitter::{Node, Parser as TSParser};

use super::languages::typescript;
use super::lowering::{node_text, node_to_span, Lowering};
use crate::features::parsing::domain::ParsedModule;
use crate::features::parsing::ports::Parser;
use crate::shared::models::{Result, TransformError};

/// Longest snippet quoted back in a parse error message
const SNIPPET_LIMIT: usize = 40;

/// Tree-sitter based parser
pub struct TreeSitterParser {
    language: TreeSitterLanguage,
}

/// Supported tree-sitter languages
#[derive(Debug, Clone, Copy)]
pub enum TreeSitterLanguage {
    /// TypeScript grammar, also used for `.js` bundles
    TypeScript,
}

impl TreeSitterParser {
    /// Create a parser for decorator-bearing JavaScript/TypeScript
    pub fn typescript() -> Self {
        Self {
            language: TreeSitterLanguage::TypeScript,
        }
    }

    /// Get the tree-sitter language
    fn get_ts_language(&self) -> tree_sitter::Language {
        match self.language {
            TreeSitterLanguage::TypeScript => typescript::language(),
        }
    }

    /// Node that best locates the first syntax error.
    ///
    /// Inside an ERROR node the search keeps descending: a MISSING leaf or a
    /// nested ERROR wins, otherwise the last token tree-sitter swallowed into
    /// the ERROR is where recovery gave up.
    fn locate_error<'t>(&self, node: Node<'t>) -> Option<Node<'t>> {
        if node.is_missing() {
            return Some(node);
        }
        if node.is_error() {
            let inner = self.children(node).into_iter().find_map(|c| self.locate_error(c));
            return Some(inner.unwrap_or_else(|| last_token(node)));
        }
        if !node.has_error() {
            return None;
        }
        self.children(node)
            .into_iter()
            .find_map(|child| self.locate_error(child))
    }

    fn children<'t>(&self, node: Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        node.children(&mut cursor).collect()
    }

    fn parse_error(&self, root: Node, source: &str, file_path: &str) -> TransformError {
        let node = self.locate_error(root).unwrap_or(root);
        let span = node_to_span(&node);

        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            let text = node_text(&node, source);
            let first_line = text.lines().next().unwrap_or("").trim();
            let snippet: String = first_line.chars().take(SNIPPET_LIMIT).collect();
            if snippet.is_empty() {
                "unexpected end of input".to_string()
            } else {
                format!("unexpected `{}`", snippet)
            }
        };

        TransformError::Parse {
            path: file_path.to_string(),
            line: span.start.line,
            column: span.start.column,
            message,
        }
    }
}

/// Deepest last child, skipping trailing comments
fn last_token(node: Node) -> Node {
    let mut current = node;
    loop {
        let mut cursor = current.walk();
        let last = current
            .children(&mut cursor)
            .filter(|c| !c.is_extra())
            .last();
        match last {
            Some(child) => current = child,
            None => return current,
        }
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::typescript()
    }
}

impl Parser for TreeSitterParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedModule> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.get_ts_language())
            .map_err(|e| TransformError::Grammar(format!("Failed to set language: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| TransformError::Parse {
                path: file_path.to_string(),
                line: 1,
                column: 1,
                message: "parser produced no tree".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(self.parse_error(root, source, file_path));
        }

        Ok(Lowering::new(source).module(root, file_path))
    }
}
