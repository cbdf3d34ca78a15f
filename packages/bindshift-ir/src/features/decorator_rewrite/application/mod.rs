//! Decorator rewrite use cases

mod detector;
mod rewriter;

pub use detector::DecoratorDetector;
pub use rewriter::Rewriter;
