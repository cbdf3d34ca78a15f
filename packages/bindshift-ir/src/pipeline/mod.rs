//! Pipeline orchestration

pub mod transform;

pub use transform::{transform, RewriteResult, TransformOrchestrator};
