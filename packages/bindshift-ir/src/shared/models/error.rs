//! Error types for the bindshift-ir crate
//!
//! Every variant is fatal for the file being transformed. Validation errors
//! name the class and property so the offending decorator can be found.

use thiserror::Error;

/// Unified transform error
#[derive(Debug, Error)]
pub enum TransformError {
    /// Source is not valid under the decorator-enabled grammar
    #[error("parse error in {path} at {line}:{column}: {message}")]
    Parse {
        path: String,
        line: u32,
        column: u32,
        message: String,
    },

    /// `@bind` with an argument count other than one
    #[error("@bind on `{class_name}.{property}` ({path}:{line}) expects exactly one argument, found {found}")]
    Arity {
        path: String,
        class_name: String,
        property: String,
        found: usize,
        line: u32,
    },

    /// `@bind` whose single argument is not a bare identifier
    #[error("@bind on `{class_name}.{property}` ({path}:{line}) expects an identifier argument, found `{found}`")]
    InvalidArgument {
        path: String,
        class_name: String,
        property: String,
        found: String,
        line: u32,
    },

    /// `@bind` applied to something other than a plainly named class field
    #[error("@bind is only supported on named class fields, found it on `{class_name}.{member}` ({path}:{line})")]
    UnsupportedTarget {
        path: String,
        class_name: String,
        member: String,
        line: u32,
    },

    /// More than one `@bind` on the same field
    #[error("`{class_name}.{property}` ({path}:{line}) carries more than one @bind decorator")]
    DuplicateDecorator {
        path: String,
        class_name: String,
        property: String,
        line: u32,
    },

    /// The local name `bind` is already taken by some other import
    #[error("`bind` is already imported from \"{module}\" ({path}:{line}); the c/signals import cannot be added")]
    ConflictingImport {
        path: String,
        module: String,
        line: u32,
    },

    /// Grammar could not be loaded into the parser
    #[error("grammar error: {0}")]
    Grammar(String),
}

impl TransformError {
    /// Path of the file the error refers to, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            TransformError::Parse { path, .. }
            | TransformError::Arity { path, .. }
            | TransformError::InvalidArgument { path, .. }
            | TransformError::UnsupportedTarget { path, .. }
            | TransformError::DuplicateDecorator { path, .. }
            | TransformError::ConflictingImport { path, .. } => Some(path),
            TransformError::Grammar(_) => None,
        }
    }

    /// True for decorator shape violations (as opposed to parse/grammar failures)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TransformError::Arity { .. }
                | TransformError::InvalidArgument { .. }
                | TransformError::UnsupportedTarget { .. }
                | TransformError::DuplicateDecorator { .. }
                | TransformError::ConflictingImport { .. }
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TransformError>;
