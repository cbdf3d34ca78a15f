//! Hook configuration
//!
//! ```rust,ignore
//! use bindshift_deploy::config::{HookConfig, ErrorPolicy};
//!
//! let config = HookConfig::from_yaml("bindshift.yaml")?
//!     .with_error_policy(ErrorPolicy::Skip);
//! ```
//!
//! YAML schema v1:
//!
//! ```yaml
//! version: 1
//! bundle_kind: LightningComponentBundle
//! script_extension: js
//! on_transform_error: abort
//! ```

pub mod error;
pub mod hook_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use hook_config::{
    ErrorPolicy, HookConfig, CONFIG_VERSION, DEFAULT_BUNDLE_KIND, DEFAULT_SCRIPT_EXTENSION,
};
