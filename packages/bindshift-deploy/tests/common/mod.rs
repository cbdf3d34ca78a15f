//! Shared fixtures for deploy integration tests
#![allow(dead_code)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bindshift_deploy::{ArtifactDescriptor, DeployError, LocalFileStore, Result, SourceStore};
use tempfile::TempDir;

/// Relative location of component bundles in a generated project
pub const LWC_ROOT: &str = "force-app/main/default/lwc";

/// Throwaway project tree with component bundles on disk
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `<lwc>/<name>/<name>.js` and return its descriptor
    pub fn add_component(&self, name: &str, source: &str) -> ArtifactDescriptor {
        let content_directory = self.root().join(LWC_ROOT).join(name);
        std::fs::create_dir_all(&content_directory).unwrap();
        std::fs::write(content_directory.join(format!("{name}.js")), source).unwrap();
        ArtifactDescriptor::component_bundle(content_directory, name)
    }

    pub fn script_path(&self, descriptor: &ArtifactDescriptor) -> PathBuf {
        descriptor
            .content_directory
            .join(format!("{}.js", descriptor.name))
    }

    pub fn read(&self, descriptor: &ArtifactDescriptor) -> String {
        std::fs::read_to_string(self.script_path(descriptor)).unwrap()
    }
}

/// Local store whose writes fail for any path added to `locked`
#[derive(Clone, Default)]
pub struct LockableStore {
    inner: LocalFileStore,
    locked: Arc<Mutex<HashSet<PathBuf>>>,
}

impl LockableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self, path: impl Into<PathBuf>) {
        self.locked.lock().unwrap().insert(path.into());
    }
}

impl SourceStore for LockableStore {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.inner.read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        if self.locked.lock().unwrap().contains(path) {
            return Err(DeployError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked by test"),
            ));
        }
        self.inner.write(path, contents)
    }
}

pub fn bound_component(class_name: &str) -> String {
    format!(
        "import {{ LightningElement }} from 'lwc';\nimport {{ counter }} from './state';\n\nexport default class {class_name} extends LightningElement {{\n    @bind(counter) count;\n}}\n"
    )
}

pub fn plain_component(class_name: &str) -> String {
    format!(
        "import {{ LightningElement, api }} from 'lwc';\n\nexport default class {class_name} extends LightningElement {{\n    @api   label;\n}}\n"
    )
}

/// Two arguments: fails with an arity error
pub fn broken_component(class_name: &str) -> String {
    format!(
        "import {{ LightningElement }} from 'lwc';\n\nexport default class {class_name} extends LightningElement {{\n    @bind(a, b) count;\n}}\n"
    )
}
