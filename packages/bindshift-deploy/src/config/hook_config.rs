//! Hook configuration
//!
//! Which artifacts are eligible and what happens when one of them fails to
//! transform. The decorator, helper module and import text are fixed by the
//! engine and deliberately absent here.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Current schema version
pub const CONFIG_VERSION: u32 = 1;

/// Bundle kind whose scripts carry `@bind` decorators
pub const DEFAULT_BUNDLE_KIND: &str = "LightningComponentBundle";

/// Extension of a bundle's primary script
pub const DEFAULT_SCRIPT_EXTENSION: &str = "js";

/// What to do when one artifact fails to transform during pre-deploy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Propagate the error; the deploy should not proceed
    #[default]
    Abort,
    /// Leave the artifact untouched and carry on with the rest
    Skip,
}

impl ErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::Abort => "abort",
            ErrorPolicy::Skip => "skip",
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "skip" => Ok(ErrorPolicy::Skip),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pre/post deploy hook settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Artifact kind eligible for rewriting
    #[serde(default = "default_bundle_kind")]
    pub bundle_kind: String,

    /// Extension of the script at `<contentDirectory>/<name>.<ext>`
    #[serde(default = "default_script_extension")]
    pub script_extension: String,

    #[serde(default)]
    pub on_transform_error: ErrorPolicy,
}

fn default_bundle_kind() -> String {
    DEFAULT_BUNDLE_KIND.to_string()
}

fn default_script_extension() -> String {
    DEFAULT_SCRIPT_EXTENSION.to_string()
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            bundle_kind: default_bundle_kind(),
            script_extension: default_script_extension(),
            on_transform_error: ErrorPolicy::default(),
        }
    }
}

impl HookConfig {
    /// Load and validate from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        // Check the version before strict parsing so a missing field gets a clear message
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
        match raw.get("version").and_then(|v| v.as_u64()) {
            None => return Err(ConfigError::MissingVersion),
            Some(v) if v != CONFIG_VERSION as u64 => {
                return Err(ConfigError::UnsupportedVersion {
                    found: v as u32,
                    supported: vec![CONFIG_VERSION],
                })
            }
            Some(_) => {}
        }

        let config: HookConfig = serde_yaml::from_value(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_transform_error = policy;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.bundle_kind.trim().is_empty() {
            return Err(ConfigError::Validation {
                field: "bundle_kind".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.script_extension.is_empty() || self.script_extension.starts_with('.') {
            return Err(ConfigError::Validation {
                field: "script_extension".to_string(),
                reason: format!(
                    "expected an extension without a leading dot, got '{}'",
                    self.script_extension
                ),
            });
        }
        Ok(())
    }

    /// `<dir>/<name>.<ext>`
    pub fn script_path(&self, content_directory: &Path, name: &str) -> std::path::PathBuf {
        content_directory.join(format!("{}.{}", name, self.script_extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
bundle_kind: LightningComponentBundle
on_transform_error: skip
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = HookConfig::from_yaml(temp_file.path()).unwrap();
        assert_eq!(config.on_transform_error, ErrorPolicy::Skip);
        assert_eq!(config.script_extension, "js");
    }

    #[test]
    fn test_yaml_missing_version() {
        let result = HookConfig::from_yaml_str("bundle_kind: Foo\n");
        assert!(matches!(result, Err(ConfigError::MissingVersion)));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let result = HookConfig::from_yaml_str("version: 2\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedVersion { found: 2, .. })
        ));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let result = HookConfig::from_yaml_str("version: 1\ndecorator: track\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = HookConfig::default().with_error_policy(ErrorPolicy::Skip);
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("on_transform_error: skip"));
        assert_eq!(HookConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_validate_extension() {
        let mut config = HookConfig::default();
        config.script_extension = ".js".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { ref field, .. }) if field == "script_extension"
        ));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("SKIP".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Skip);
        assert!("retry".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    fn test_script_path() {
        let config = HookConfig::default();
        assert_eq!(
            config.script_path(Path::new("force-app/lwc/counter"), "counter"),
            Path::new("force-app/lwc/counter/counter.js")
        );
    }
}
