//! Text edits and their application
//!
//! Edits are collected against the original text and applied in one pass,
//! so positions captured during detection stay valid throughout.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Replace `range` of the original text with `replacement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            range: offset..offset,
            replacement: text.into(),
        }
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            replacement: String::new(),
        }
    }

    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            replacement: text.into(),
        }
    }

    pub fn is_insert(&self) -> bool {
        self.range.is_empty()
    }
}

/// Per-file transform metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformMetadata {
    /// At least one occurrence was rewritten
    pub seen: bool,
    pub occurrences: usize,
    pub import_inserted: bool,
}

/// Ordered set of edits for one file
#[derive(Debug, Clone, Default)]
pub struct RewritePlan {
    edits: Vec<TextEdit>,
    pub metadata: TransformMetadata,
}

impl RewritePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply all edits to `source`.
    ///
    /// Edits are ordered by start offset (inserts before replacements at the
    /// same offset). An edit that starts inside an earlier one is dropped.
    pub fn apply(&self, source: &str) -> String {
        let mut edits: Vec<&TextEdit> = self.edits.iter().collect();
        edits.sort_by_key(|e| (e.range.start, !e.is_insert(), e.range.end));

        let mut out = String::with_capacity(source.len() + 64);
        let mut cursor = 0;
        for edit in edits {
            if edit.range.start < cursor || edit.range.end > source.len() {
                tracing::debug!(
                    start = edit.range.start,
                    end = edit.range.end,
                    "dropping overlapping edit"
                );
                continue;
            }
            out.push_str(&source[cursor..edit.range.start]);
            out.push_str(&edit.replacement);
            cursor = edit.range.end;
        }
        out.push_str(&source[cursor..]);
        out
    }
}
