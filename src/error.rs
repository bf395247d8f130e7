//! Error types for bulldozer.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for bulldozer operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BulldozerError {
    /// The config declares a schema version this resolver does not implement.
    #[error("unsupported config version {found} (expected {expected})")]
    InvalidSchemaVersion { found: i64, expected: i64 },

    /// `first_commit_title` was requested for a pull request with no commits.
    #[error("cannot use first_commit_title: pull request has no commits")]
    EmptyCommitHistory,

    /// The config could not be read, parsed, or failed validation.
    #[error("{0}")]
    ConfigError(String),

    /// CLI input other than the config (e.g. pull request facts) was invalid.
    #[error("{0}")]
    InputError(String),
}

impl BulldozerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BulldozerError::InvalidSchemaVersion { .. } => exit_codes::CONFIG_ERROR,
            BulldozerError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            BulldozerError::InputError(_) => exit_codes::CONFIG_ERROR,
            BulldozerError::EmptyCommitHistory => exit_codes::RESOLUTION_FAILURE,
        }
    }
}

/// Result type alias for bulldozer operations.
pub type Result<T> = std::result::Result<T, BulldozerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_version_error_is_config_error() {
        let err = BulldozerError::InvalidSchemaVersion {
            found: 2,
            expected: 1,
        };
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(err.to_string(), "unsupported config version 2 (expected 1)");
    }

    #[test]
    fn empty_commit_history_is_resolution_failure() {
        let err = BulldozerError::EmptyCommitHistory;
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
        assert!(err.to_string().contains("first_commit_title"));
    }

    #[test]
    fn config_and_input_errors_carry_message() {
        let err = BulldozerError::ConfigError("failed to parse config YAML: bad".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(err.to_string(), "failed to parse config YAML: bad");

        let err = BulldozerError::InputError("missing title".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);
    }
}
