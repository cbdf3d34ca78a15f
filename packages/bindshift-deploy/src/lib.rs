/*
 * bindshift deploy - pre/post deploy hooks around the rewrite engine
 *
 * Architecture:
 * - Inventory      : which artifacts the deploy will push
 * - Hook           : rewrite eligible scripts, snapshot the originals
 * - Deploy cycle   : Idle → Open → Closed, owns the snapshots
 * - Lifecycle      : one active cycle at a time
 * - Source store   : file I/O port (local filesystem by default)
 */

// Public modules
pub mod config;
pub mod cycle;
pub mod error;
pub mod hook;
pub mod inventory;
pub mod lifecycle;
pub mod snapshot;
pub mod store;

// Re-exports
pub use config::{ConfigError, ErrorPolicy, HookConfig};
pub use cycle::{CycleState, DeployCycle};
pub use error::{DeployError, Result};
pub use hook::{BindRewriteHook, DeployHook, PreDeployEvent, PreDeploySummary};
pub use inventory::{
    ArtifactDescriptor, ComponentInventory, DirectoryInventory, ManifestInventory,
    LIGHTNING_COMPONENT_BUNDLE,
};
pub use lifecycle::Lifecycle;
pub use snapshot::{RestoreFailure, RestoreReport, SnapshotRecord, SnapshotTracker};
pub use store::{LocalFileStore, SourceStore};
