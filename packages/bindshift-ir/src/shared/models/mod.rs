//! Shared models

mod error;
mod span;

pub use error::{Result, TransformError};
pub use span::{Location, Span};
