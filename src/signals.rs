//! Whitelist/blacklist signal gating.
//!
//! Signal sets are opaque to this crate: they are kept as raw YAML and handed
//! to a caller-supplied [`SignalEvaluator`], which decides whether a pull
//! request matches them. This module only combines the two verdicts.

use crate::config::{MergeConfig, UpdateConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An opaque signal set (labels, comment substrings, ...) as written in the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signals(serde_yaml::Value);

impl Default for Signals {
    fn default() -> Self {
        Self(serde_yaml::Value::Null)
    }
}

impl Signals {
    pub fn new(raw: serde_yaml::Value) -> Self {
        Self(raw)
    }

    /// The raw YAML, for evaluators to interpret.
    pub fn raw(&self) -> &serde_yaml::Value {
        &self.0
    }

    /// Whether any signal is configured at all.
    ///
    /// `null`, empty strings, empty lists, and mappings whose values are all
    /// themselves empty count as "not configured".
    pub fn is_enabled(&self) -> bool {
        has_content(&self.0)
    }
}

fn has_content(value: &serde_yaml::Value) -> bool {
    use serde_yaml::Value;
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Sequence(items) => items.iter().any(has_content),
        Value::Mapping(map) => map.values().any(has_content),
        Value::Tagged(tagged) => has_content(&tagged.value),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

/// Evaluates a signal set against a pull request.
///
/// Implemented outside this crate; the pull request type is whatever state
/// the evaluator needs (labels, reviews, comments, ...).
pub trait SignalEvaluator {
    type PullRequest: ?Sized;

    /// Returns true when `pr` satisfies at least one signal in `signals`.
    fn matches(&self, signals: &Signals, pr: &Self::PullRequest) -> bool;
}

/// Outcome of gating a pull request on a whitelist/blacklist pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    Allowed,
    /// The blacklist is configured and matched.
    Blacklisted,
    /// The whitelist is not configured, or did not match.
    NotWhitelisted,
}

impl Eligibility {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Combine whitelist and blacklist verdicts. The blacklist always wins.
pub fn evaluate<E: SignalEvaluator>(
    whitelist: &Signals,
    blacklist: &Signals,
    evaluator: &E,
    pr: &E::PullRequest,
) -> Eligibility {
    if blacklist.is_enabled() && evaluator.matches(blacklist, pr) {
        return Eligibility::Blacklisted;
    }
    if whitelist.is_enabled() && evaluator.matches(whitelist, pr) {
        return Eligibility::Allowed;
    }
    Eligibility::NotWhitelisted
}

/// Whether automatic merging is permitted for `pr`.
pub fn merge_eligibility<E: SignalEvaluator>(
    config: &MergeConfig,
    evaluator: &E,
    pr: &E::PullRequest,
) -> Eligibility {
    let verdict = evaluate(&config.whitelist, &config.blacklist, evaluator, pr);
    debug!(?verdict, "merge eligibility");
    verdict
}

/// Whether automatic branch updates are permitted for `pr`.
pub fn update_eligibility<E: SignalEvaluator>(
    config: &UpdateConfig,
    evaluator: &E,
    pr: &E::PullRequest,
) -> Eligibility {
    let verdict = evaluate(&config.whitelist, &config.blacklist, evaluator, pr);
    debug!(?verdict, "update eligibility");
    verdict
}
