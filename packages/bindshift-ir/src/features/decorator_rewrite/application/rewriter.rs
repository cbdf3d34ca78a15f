//! Rewrite engine
//!
//! Turns a `Detection` into text edits: each `@bind(arg)` is removed and
//! the field it decorated becomes
//! `<field> = bind(this, "<field>").to(<arg>)`. The `bind` import is added
//! once per file when missing. Edits are spliced into the original text, so
//! untouched regions keep their exact formatting.

use crate::features::decorator_rewrite::domain::{
    DecoratorOccurrence, Detection, RewritePlan, TextEdit, TransformMetadata, BIND_IMPORT,
};

/// Builds and applies rewrite plans
#[derive(Debug, Default, Clone, Copy)]
pub struct Rewriter;

impl Rewriter {
    pub fn new() -> Self {
        Self
    }

    /// Collect edits for every occurrence plus the import, if needed
    pub fn plan(&self, source: &str, detection: &Detection) -> RewritePlan {
        let mut plan = RewritePlan::new();

        for occurrence in &detection.occurrences {
            self.plan_occurrence(source, occurrence, &mut plan);
            plan.metadata.seen = true;
            plan.metadata.occurrences += 1;
        }

        if detection.needs_import() {
            plan.push(TextEdit::insert(
                detection.import_offset,
                format!("{}\n", BIND_IMPORT),
            ));
            plan.metadata.import_inserted = true;
        }

        plan
    }

    /// Plan and apply in one step
    pub fn rewrite(&self, source: &str, detection: &Detection) -> (String, TransformMetadata) {
        let plan = self.plan(source, detection);
        if plan.is_empty() {
            return (source.to_string(), plan.metadata);
        }
        (plan.apply(source), plan.metadata)
    }

    fn plan_occurrence(&self, source: &str, occurrence: &DecoratorOccurrence, plan: &mut RewritePlan) {
        // 1. the decorator, along with the whitespace separating it from what follows
        let start = occurrence.decorator_span.start_byte;
        let mut end = occurrence.decorator_span.end_byte;
        end += leading_whitespace(&source[end..]);
        if occurrence.body_span.start_byte >= occurrence.decorator_span.end_byte {
            end = end.min(occurrence.body_span.start_byte);
        }
        plan.push(TextEdit::delete(start..end));

        // 2. the declaration itself
        plan.push(TextEdit::replace(
            occurrence.body_span.byte_range(),
            occurrence.replacement_code(),
        ));
    }
}

fn leading_whitespace(text: &str) -> usize {
    text.len() - text.trim_start().len()
}
