//! Merge strategy resolution.
//!
//! Pure functions from a [`Config`](crate::config::Config), a branch name, and
//! pull request facts to a [`MergePlan`]:
//! 1. Pick the merge method from `branch_method` overrides or the default
//! 2. For squash merges, compose the commit title and body
//!
//! Nothing here performs I/O. The only shared state is the compiled pattern
//! cache in `patterns`, which is safe to use from many threads.

mod branch;
mod message;
pub mod patterns;
mod plan;


// Re-export public API
pub use branch::{InvalidPattern, resolve_branch_method, select_method};
pub use message::{
    CommitMessage, CommitTitle, PullRequestFacts, SquashMessage, compose_squash_message,
};
pub use plan::{MergePlan, resolve};
