//! Config struct definitions.

use super::types::*;
use crate::signals::Signals;
use serde::{Deserialize, Serialize};

/// Merge and update policy for one repository.
///
/// This struct represents the contents of `.bulldozer.yml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version; must equal [`SCHEMA_VERSION`]. A missing key reads as 0.
    #[serde(default)]
    pub version: i64,

    pub merge: MergeConfig,

    #[serde(default)]
    pub update: UpdateConfig,
}

/// Policy governing automatic merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    #[serde(default)]
    pub whitelist: Signals,

    #[serde(default)]
    pub blacklist: Signals,

    /// Delete the head branch once the pull request is merged.
    #[serde(default)]
    pub delete_after_merge: bool,

    /// Merge method used when no `branch_method` pattern matches.
    pub method: MergeMethod,

    #[serde(default)]
    pub options: MergeOptions,

    /// Per-branch method overrides, tried in the order they are written.
    #[serde(default, skip_serializing_if = "BranchMethods::is_empty")]
    pub branch_method: BranchMethods,

    /// Status checks to require in addition to those from branch protection.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_statuses: Vec<String>,
}

impl MergeConfig {
    /// A merge policy with the given default method and nothing else configured.
    pub fn with_method(method: MergeMethod) -> Self {
        Self {
            whitelist: Signals::default(),
            blacklist: Signals::default(),
            delete_after_merge: false,
            method,
            options: MergeOptions::default(),
            branch_method: BranchMethods::default(),
            required_statuses: Vec::new(),
        }
    }
}

/// Per-method merge options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Squash settings; `None` means platform defaults for title and body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash: Option<SquashOptions>,
}

/// How the commit message of a squash merge is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquashOptions {
    pub title: TitleStrategy,
    pub body: MessageStrategy,

    /// Separator between commit bodies for `summarize_commits` (empty means `"\n\n"`).
    pub message_delimiter: String,
}

/// Policy governing automatic updates of a pull request branch from its base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    pub whitelist: Signals,
    pub blacklist: Signals,
}
