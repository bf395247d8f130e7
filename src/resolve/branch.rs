//! Merge method selection from `branch_method` overrides.

use super::patterns::{compile, pattern_matches};
use crate::config::{BranchMethods, MergeConfig, MergeMethod};
use serde::Serialize;
use tracing::debug;

/// Find the method of the first rule whose pattern matches `branch`.
///
/// Rules are tried in document order. Patterns that fail to compile are
/// skipped. Returns `None` when nothing matches.
pub fn resolve_branch_method(rules: &BranchMethods, branch: &str) -> Option<MergeMethod> {
    rules
        .iter()
        .find(|rule| pattern_matches(&rule.pattern, branch))
        .map(|rule| {
            debug!(branch, pattern = %rule.pattern, method = %rule.method, "branch_method override");
            rule.method
        })
}

/// The merge method for `branch`: a matching override, else `config.method`.
pub fn select_method(config: &MergeConfig, branch: &str) -> MergeMethod {
    resolve_branch_method(&config.branch_method, branch).unwrap_or(config.method)
}

/// A `branch_method` pattern that is ignored because it does not compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidPattern {
    pub pattern: String,
    pub reason: String,
}

impl MergeConfig {
    /// List every `branch_method` pattern that will be ignored during resolution.
    pub fn invalid_branch_patterns(&self) -> Vec<InvalidPattern> {
        self.branch_method
            .iter()
            .filter_map(|rule| {
                compile(&rule.pattern).err().map(|e| InvalidPattern {
                    pattern: rule.pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}
