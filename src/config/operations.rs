//! Config loading, validation, and serialization.

use super::model::Config;
use super::types::SCHEMA_VERSION;
use crate::error::{BulldozerError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(BulldozerError::ConfigError)` - Read, parse, or validation failure
    /// * `Err(BulldozerError::InvalidSchemaVersion)` - Unsupported `version`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BulldozerError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loading config");
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are ignored. Unknown enum values (merge methods, title
    /// and body strategies) are rejected.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            BulldozerError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            BulldozerError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `version` must equal the supported schema version
    ///
    /// Branch patterns that fail to compile are not an error here; they are
    /// ignored at resolution time and listed by `MergeConfig::invalid_branch_patterns`.
    pub fn validate(&self) -> Result<()> {
        self.check_version()
    }

    /// Fail with `InvalidSchemaVersion` unless `version` is supported.
    pub fn check_version(&self) -> Result<()> {
        if self.version != SCHEMA_VERSION {
            return Err(BulldozerError::InvalidSchemaVersion {
                found: self.version,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(())
    }
}
