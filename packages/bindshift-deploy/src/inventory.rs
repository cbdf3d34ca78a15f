//! Component inventory
//!
//! Where the list of deployable artifacts comes from: a JSON manifest
//! emitted by the deploy tool, or a walk of the project tree.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{DeployError, Result};

/// Artifact kind of a Lightning Web Component bundle
pub const LIGHTNING_COMPONENT_BUNDLE: &str = "LightningComponentBundle";

/// Directory that holds one sub-directory per component
const COMPONENT_ROOT: &str = "lwc";

/// One artifact the deploy will push
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDescriptor {
    pub kind: String,
    pub content_directory: PathBuf,
    pub name: String,
}

impl ArtifactDescriptor {
    pub fn new(
        kind: impl Into<String>,
        content_directory: impl Into<PathBuf>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            content_directory: content_directory.into(),
            name: name.into(),
        }
    }

    pub fn component_bundle(content_directory: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self::new(LIGHTNING_COMPONENT_BUNDLE, content_directory, name)
    }
}

pub trait ComponentInventory {
    fn artifacts(&self) -> Result<Vec<ArtifactDescriptor>>;
}

/// Artifacts listed in a JSON manifest:
/// `[{ "kind": ..., "contentDirectory": ..., "name": ... }]`.
///
/// Relative content directories are resolved against the manifest's own
/// directory.
#[derive(Debug, Clone)]
pub struct ManifestInventory {
    path: PathBuf,
}

impl ManifestInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(content: &str, base_dir: &Path) -> Result<Vec<ArtifactDescriptor>> {
        let mut artifacts: Vec<ArtifactDescriptor> = serde_json::from_str(content)?;
        for artifact in &mut artifacts {
            if artifact.content_directory.is_relative() {
                artifact.content_directory = base_dir.join(&artifact.content_directory);
            }
        }
        Ok(artifacts)
    }
}

impl ComponentInventory for ManifestInventory {
    fn artifacts(&self) -> Result<Vec<ArtifactDescriptor>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| DeployError::io(&self.path, e))?;
        let base_dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        let artifacts = Self::parse(&content, base_dir)?;

        tracing::debug!(
            manifest = %self.path.display(),
            artifacts = artifacts.len(),
            "loaded manifest"
        );
        Ok(artifacts)
    }
}

/// Component bundles found by walking a project root.
///
/// A bundle is any directory directly under an `lwc` directory that holds
/// `<dir>/<dir>.js`.
#[derive(Debug, Clone)]
pub struct DirectoryInventory {
    root: PathBuf,
}

impl DirectoryInventory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ComponentInventory for DirectoryInventory {
    fn artifacts(&self) -> Result<Vec<ArtifactDescriptor>> {
        let mut artifacts = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                // Skip hidden directories and installed packages
                let name = e.file_name().to_string_lossy();
                e.depth() == 0 || (!name.starts_with('.') && name != "node_modules")
            })
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                DeployError::io(path, e.into())
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = entry.path();
            let in_component_root = dir
                .parent()
                .and_then(|p| p.file_name())
                .map_or(false, |n| n == COMPONENT_ROOT);
            if !in_component_root {
                continue;
            }

            let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if dir.join(format!("{}.js", name)).is_file() {
                artifacts.push(ArtifactDescriptor::component_bundle(dir, name));
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            artifacts = artifacts.len(),
            "discovered component bundles"
        );
        Ok(artifacts)
    }
}
