//! End-to-end resolution of a pull request into a merge plan.

use super::branch::select_method;
use super::message::{PullRequestFacts, SquashMessage, compose_squash_message};
use crate::config::{Config, MergeMethod};
use crate::error::Result;
use serde::Serialize;
use tracing::debug;

/// What the merge executor should do for one pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergePlan {
    pub method: MergeMethod,
    /// Squash commit message; `None` leaves the message to the platform.
    pub message: Option<SquashMessage>,
    pub delete_after_merge: bool,
    pub required_statuses: Vec<String>,
}

/// Resolve the merge method and commit message for a pull request into `branch`.
///
/// # Errors
///
/// * `InvalidSchemaVersion` - the config version is not supported
/// * `EmptyCommitHistory` - squash with `first_commit_title` and no commits
pub fn resolve(config: &Config, branch: &str, pr: &PullRequestFacts) -> Result<MergePlan> {
    config.check_version()?;

    let merge = &config.merge;
    let method = select_method(merge, branch);

    let message = match method {
        MergeMethod::Squash => Some(compose_squash_message(
            merge.options.squash.as_ref(),
            pr,
        )?),
        MergeMethod::Merge | MergeMethod::Rebase => None,
    };

    debug!(branch, %method, "resolved merge plan");

    Ok(MergePlan {
        method,
        message,
        delete_after_merge: merge.delete_after_merge,
        required_statuses: merge.required_statuses.clone(),
    })
}
