//! Configuration model for bulldozer.
//!
//! This module defines the Config struct that represents a repository's
//! `.bulldozer.yml`. Unknown fields are ignored for forward compatibility;
//! enum values and the schema version are checked on load.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{Config, MergeConfig, MergeOptions, SquashOptions, UpdateConfig};
pub use types::{
    BranchMethods, BranchRule, DEFAULT_MESSAGE_DELIMITER, MergeMethod, MessageStrategy,
    SCHEMA_VERSION, TitleStrategy,
};
