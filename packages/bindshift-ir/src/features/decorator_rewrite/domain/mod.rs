//! Decorator rewrite domain

mod occurrence;
mod rewrite_plan;

pub use occurrence::{
    DecoratorOccurrence, Detection, BIND_DECORATOR, BIND_IMPORT, SELF_REFERENCE, SIGNALS_MODULE,
};
pub use rewrite_plan::{RewritePlan, TextEdit, TransformMetadata};
