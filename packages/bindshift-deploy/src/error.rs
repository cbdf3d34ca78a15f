use std::path::PathBuf;

use bindshift_ir::TransformError;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, DeployError>;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("failed to transform {path}: {source}")]
    Transform {
        path: PathBuf,
        #[source]
        source: TransformError,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("deploy cycle {active} is still open; restore it before starting another")]
    CycleOverlap { active: Uuid },

    #[error("no deploy cycle is open")]
    NoActiveCycle,

    #[error("restored {restored} of {total} files; {failed} could not be written back")]
    PartialRestore {
        restored: usize,
        failed: usize,
        total: usize,
    },

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl DeployError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn transform(path: impl Into<PathBuf>, source: TransformError) -> Self {
        Self::Transform {
            path: path.into(),
            source,
        }
    }

    /// Path the error refers to, if it is about a single file
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Transform { path, .. } | Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}
