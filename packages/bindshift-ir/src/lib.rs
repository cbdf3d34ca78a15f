/*
 * bindshift IR - decorator rewrite engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span, TransformError)
 * - features/    : Vertical slices (parsing → decorator_rewrite)
 * - pipeline/    : Orchestration (parse → detect → rewrite)
 *
 * Rewrites `@bind(signal)` class fields into
 * `field = bind(this, "field").to(signal)` and adds
 * `import { bind } from "c/signals";` when it is missing.
 */

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use features::decorator_rewrite::{
    DecoratorOccurrence, TransformMetadata, BIND_DECORATOR, BIND_IMPORT, SIGNALS_MODULE,
};
pub use pipeline::{transform, RewriteResult, TransformOrchestrator};
pub use shared::models::{Result, TransformError};
