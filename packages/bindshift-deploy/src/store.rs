//! Source store port
//!
//! Every read and write of a component script goes through this trait, so
//! the hook and the snapshot tracker never touch `std::fs` directly.

use std::path::Path;

use crate::error::{DeployError, Result};

pub trait SourceStore: Send + Sync {
    /// Read the whole file as UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace the file's contents
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Store backed by the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl SourceStore for LocalFileStore {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| DeployError::io(path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(|e| DeployError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.js");
        let store = LocalFileStore::new();

        store.write(&path, "export default class A {}\n").unwrap();
        assert_eq!(
            store.read_to_string(&path).unwrap(),
            "export default class A {}\n"
        );
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.js");

        let err = LocalFileStore::new().read_to_string(&path).unwrap_err();
        assert_eq!(err.path(), Some(&path));
    }
}
