//! CLI argument parsing for bulldozer.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default location of the policy file, relative to the repository root.
pub const DEFAULT_CONFIG_PATH: &str = ".bulldozer.yml";

/// Bulldozer: merge-policy checks and merge strategy resolution.
///
/// Reads a repository's `.bulldozer.yml` and works out how a pull request
/// should be merged: which merge method applies to its branch and, for
/// squash merges, the commit title and body.
#[derive(Parser, Debug)]
#[command(name = "bulldozer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter (trace, debug, info, warn, error, or an EnvFilter directive).
    ///
    /// Falls back to RUST_LOG, then "warn".
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for bulldozer.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a policy file.
    ///
    /// Fails on unreadable files, unknown values, or an unsupported version.
    /// Branch patterns that do not compile are reported but do not fail.
    Check(CheckArgs),

    /// Resolve the merge plan for a pull request.
    ///
    /// Prints the merge method and, for squash merges, the commit title and
    /// body as JSON. A null title means the platform default.
    Resolve(ResolveArgs),
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the policy file.
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Path to the policy file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Target branch name used for `branch_method` matching.
    #[arg(short, long)]
    pub branch: String,

    /// JSON file with pull request facts: {"title", "body", "commits": [{"summary", "body"}]}.
    #[arg(long, conflicts_with_all = ["title", "body", "commits"])]
    pub pr: Option<PathBuf>,

    /// Pull request title.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Pull request description.
    #[arg(long, default_value = "")]
    pub body: String,

    /// Full commit message, oldest first (repeatable).
    #[arg(long = "commit")]
    pub commits: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
