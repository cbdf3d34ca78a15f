//! Transform orchestrator
//!
//! parse → detect → rewrite, for one file's text. Either the whole file
//! transforms cleanly or the call fails; nothing is returned half-done.

use serde::Serialize;

use crate::features::decorator_rewrite::{DecoratorDetector, Rewriter, TransformMetadata};
use crate::features::parsing::{Parser, TreeSitterParser};
use crate::shared::models::Result;

/// Name reported in errors when no path is given
pub const ANONYMOUS_INPUT: &str = "<input>";

/// Output of one transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteResult {
    /// Rewritten text; the input verbatim when `modified` is false
    pub code: String,
    pub modified: bool,
    pub metadata: TransformMetadata,
}

/// Runs the full transform over source text
pub struct TransformOrchestrator<P: Parser = TreeSitterParser> {
    parser: P,
    detector: DecoratorDetector,
    rewriter: Rewriter,
}

impl TransformOrchestrator<TreeSitterParser> {
    pub fn new() -> Self {
        Self::with_parser(TreeSitterParser::typescript())
    }
}

impl Default for TransformOrchestrator<TreeSitterParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Parser> TransformOrchestrator<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            detector: DecoratorDetector::new(),
            rewriter: Rewriter::new(),
        }
    }

    /// Transform source text that has no meaningful path
    pub fn transform(&self, source: &str) -> Result<RewriteResult> {
        self.transform_file(source, ANONYMOUS_INPUT)
    }

    /// Transform the contents of `file_path`; the path only feeds diagnostics
    pub fn transform_file(&self, source: &str, file_path: &str) -> Result<RewriteResult> {
        let module = self.parser.parse(source, file_path)?;
        let detection = self.detector.detect(&module)?;

        if detection.is_empty() {
            tracing::trace!(path = file_path, "no @bind occurrences");
            return Ok(RewriteResult {
                code: source.to_string(),
                modified: false,
                metadata: TransformMetadata::default(),
            });
        }

        let (code, metadata) = self.rewriter.rewrite(source, &detection);
        tracing::debug!(
            path = file_path,
            occurrences = metadata.occurrences,
            import_inserted = metadata.import_inserted,
            "rewrote @bind decorators"
        );

        Ok(RewriteResult {
            code,
            modified: metadata.seen,
            metadata,
        })
    }
}

/// Transform with the default parser
pub fn transform(source: &str) -> Result<RewriteResult> {
    TransformOrchestrator::new().transform(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::TransformError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_noop_is_byte_identical() {
        let source = "import { LightningElement, api } from 'lwc';\n\nexport default class Hello extends LightningElement {\n    @api    greeting   =  'hi' ;\n}\n";
        let result = transform(source).unwrap();
        assert!(!result.modified);
        assert_eq!(result.code, source);
    }

    #[test]
    fn test_single_occurrence() {
        let result = transform("class C { @bind(sig) x; }").unwrap();
        assert!(result.modified);
        assert!(result.code.contains("x = bind(this, \"x\").to(sig)"));
        assert!(!result.code.contains("@bind"));
        assert!(result.code.starts_with("import { bind } from \"c/signals\";\n"));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let err = TransformOrchestrator::new()
            .transform_file("class {", "lwc/broken/broken.js")
            .unwrap_err();
        assert!(matches!(err, TransformError::Parse { .. }));
        assert_eq!(err.path(), Some("lwc/broken/broken.js"));
    }

    #[test]
    fn test_anonymous_input_name() {
        let err = transform("class C { @bind(a, b) x; }").unwrap_err();
        assert_eq!(err.path(), Some(ANONYMOUS_INPUT));
    }
}
