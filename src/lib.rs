//! Bulldozer: merge-policy configuration and merge strategy resolution.
//!
//! Given a repository's policy (`.bulldozer.yml`), a pull request's target
//! branch, and its title, body, and commits, work out how it should be merged:
//!
//! - [`config`]: the typed policy document, loaded from YAML
//! - [`resolve`]: branch-pattern method selection and squash message composition
//! - [`signals`]: whitelist/blacklist gating through a caller-supplied evaluator
//!
//! Fetching pull requests, evaluating signals, and performing the merge are
//! left to the caller.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod resolve;
pub mod signals;
