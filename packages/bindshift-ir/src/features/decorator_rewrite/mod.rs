//! Decorator Rewrite Feature
//!
//! Detects `@bind(signal)` on class fields and rewrites it into a plain
//! `bind(this, "field").to(signal)` initializer.
//!
//! ## Structure
//! - `domain/` - DecoratorOccurrence, Detection, TextEdit, RewritePlan
//! - `application/` - DecoratorDetector (immutable pass), Rewriter (splicing)

pub mod application;
pub mod domain;

pub use application::{DecoratorDetector, Rewriter};
pub use domain::{
    DecoratorOccurrence, Detection, RewritePlan, TextEdit, TransformMetadata, BIND_DECORATOR,
    BIND_IMPORT, SIGNALS_MODULE,
};
