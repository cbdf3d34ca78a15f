//! Deploy hooks
//!
//! The pre-deploy half rewrites eligible component scripts in place and
//! snapshots their originals into the cycle; the post-deploy half puts the
//! originals back.

use std::path::{Path, PathBuf};

use bindshift_ir::TransformOrchestrator;
use serde::Serialize;

use crate::config::{ErrorPolicy, HookConfig};
use crate::cycle::DeployCycle;
use crate::error::{DeployError, Result};
use crate::inventory::ArtifactDescriptor;
use crate::snapshot::RestoreReport;
use crate::store::{LocalFileStore, SourceStore};

/// Payload of the pre-deploy event
#[derive(Debug, Clone, Default)]
pub struct PreDeployEvent {
    pub artifacts: Vec<ArtifactDescriptor>,
}

impl PreDeployEvent {
    pub fn new(artifacts: Vec<ArtifactDescriptor>) -> Self {
        Self { artifacts }
    }
}

/// What pre-deploy did to each eligible script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreDeploySummary {
    /// Rewritten on disk and snapshotted
    pub rewritten: Vec<PathBuf>,
    /// Eligible but nothing to rewrite
    pub unchanged: Vec<PathBuf>,
    /// Failed and left alone under [`ErrorPolicy::Skip`]
    pub skipped: Vec<PathBuf>,
}

pub trait DeployHook {
    fn pre_deploy(&self, cycle: &mut DeployCycle, event: &PreDeployEvent)
        -> Result<PreDeploySummary>;

    fn post_deploy(&self, cycle: &mut DeployCycle) -> Result<RestoreReport>;
}

enum Outcome {
    Rewritten,
    Unchanged,
}

/// Rewrites `@bind` decorators before deploy and restores afterwards
pub struct BindRewriteHook {
    config: HookConfig,
    orchestrator: TransformOrchestrator,
    store: Box<dyn SourceStore>,
}

impl BindRewriteHook {
    pub fn new(config: HookConfig) -> Self {
        Self::with_store(config, Box::new(LocalFileStore::new()))
    }

    pub fn with_store(config: HookConfig, store: Box<dyn SourceStore>) -> Self {
        Self {
            config,
            orchestrator: TransformOrchestrator::new(),
            store,
        }
    }

    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    pub fn is_eligible(&self, artifact: &ArtifactDescriptor) -> bool {
        artifact.kind == self.config.bundle_kind
    }

    pub fn script_path(&self, artifact: &ArtifactDescriptor) -> PathBuf {
        self.config
            .script_path(&artifact.content_directory, &artifact.name)
    }

    fn rewrite_script(&self, cycle: &mut DeployCycle, path: &Path) -> Result<Outcome> {
        let original = self.store.read_to_string(path)?;
        let result = self
            .orchestrator
            .transform_file(&original, &path.to_string_lossy())
            .map_err(|e| DeployError::transform(path, e))?;

        if !result.modified {
            return Ok(Outcome::Unchanged);
        }

        // Snapshot before writing; a write that fails leaves nothing to restore
        let recorded = cycle.snapshots.record(path, original);
        if let Err(e) = self.store.write(path, &result.code) {
            if recorded {
                cycle.snapshots.forget(path);
            }
            return Err(e);
        }

        tracing::info!(
            path = %path.display(),
            cycle = %cycle.id,
            occurrences = result.metadata.occurrences,
            import_inserted = result.metadata.import_inserted,
            "rewrote component script"
        );
        Ok(Outcome::Rewritten)
    }
}

impl DeployHook for BindRewriteHook {
    fn pre_deploy(
        &self,
        cycle: &mut DeployCycle,
        event: &PreDeployEvent,
    ) -> Result<PreDeploySummary> {
        let mut summary = PreDeploySummary::default();

        for artifact in &event.artifacts {
            if !self.is_eligible(artifact) {
                tracing::trace!(kind = %artifact.kind, name = %artifact.name, "not a component bundle");
                continue;
            }

            let path = self.script_path(artifact);
            if cycle.snapshots.contains(&path) {
                tracing::debug!(path = %path.display(), "already rewritten in this cycle");
                continue;
            }

            match self.rewrite_script(cycle, &path) {
                Ok(Outcome::Rewritten) => summary.rewritten.push(path),
                Ok(Outcome::Unchanged) => summary.unchanged.push(path),
                Err(e) => match self.config.on_transform_error {
                    ErrorPolicy::Abort => {
                        tracing::error!(path = %path.display(), error = %e, "pre-deploy aborted");
                        return Err(e);
                    }
                    ErrorPolicy::Skip => {
                        tracing::warn!(path = %path.display(), error = %e, "skipping component");
                        summary.skipped.push(path);
                    }
                },
            }
        }

        tracing::info!(
            cycle = %cycle.id,
            rewritten = summary.rewritten.len(),
            unchanged = summary.unchanged.len(),
            skipped = summary.skipped.len(),
            "pre-deploy complete"
        );
        Ok(summary)
    }

    fn post_deploy(&self, cycle: &mut DeployCycle) -> Result<RestoreReport> {
        cycle.close()?;
        let report = cycle.snapshots.restore_all(self.store.as_ref());

        tracing::info!(
            cycle = %cycle.id,
            restored = report.restored.len(),
            failed = report.failures.len(),
            "post-deploy restore complete"
        );
        Ok(report)
    }
}
