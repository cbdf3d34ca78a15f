use crate::cycle::DeployCycle;
use crate::error::{DeployError, Result};
use crate::hook::{DeployHook, PreDeployEvent, PreDeploySummary};
use crate::snapshot::RestoreReport;

/// Dispatches deploy events to a hook and owns the one active cycle.
///
/// A failed pre-deploy still leaves its cycle active so the matching
/// post-deploy restores whatever was rewritten before the failure.
pub struct Lifecycle<H: DeployHook> {
    hook: H,
    active: Option<DeployCycle>,
}

impl<H: DeployHook> Lifecycle<H> {
    pub fn new(hook: H) -> Self {
        Self { hook, active: None }
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn active_cycle(&self) -> Option<&DeployCycle> {
        self.active.as_ref()
    }

    pub fn emit_pre_deploy(&mut self, event: &PreDeployEvent) -> Result<PreDeploySummary> {
        if let Some(cycle) = &self.active {
            return Err(DeployError::CycleOverlap { active: cycle.id });
        }

        let mut cycle = DeployCycle::new();
        cycle.open()?;
        tracing::debug!(cycle = %cycle.id, artifacts = event.artifacts.len(), "pre-deploy");

        let result = self.hook.pre_deploy(&mut cycle, event);
        self.active = Some(cycle);
        result
    }

    pub fn emit_post_deploy(&mut self) -> Result<RestoreReport> {
        let mut cycle = self.active.take().ok_or(DeployError::NoActiveCycle)?;
        tracing::debug!(cycle = %cycle.id, snapshots = cycle.snapshots.len(), "post-deploy");
        self.hook.post_deploy(&mut cycle)
    }
}
