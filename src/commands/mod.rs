//! Command implementations for bulldozer.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

use crate::cli::{CheckArgs, Command, ResolveArgs};
use crate::config::{Config, MergeConfig};
use crate::error::{BulldozerError, Result};
use crate::resolve::{CommitMessage, InvalidPattern, PullRequestFacts, resolve};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => cmd_check(args),
        Command::Resolve(args) => cmd_resolve(args),
    }
}

fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    let invalid = config.merge.invalid_branch_patterns();

    print!("{}", check_report(&args.config, &config.merge, &invalid));
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    let pr = pull_request_facts(&args)?;

    let plan = resolve(&config, &args.branch, &pr)?;
    let json = serde_json::to_string_pretty(&plan).map_err(|e| {
        BulldozerError::InputError(format!("failed to serialize merge plan: {}", e))
    })?;
    println!("{}", json);
    Ok(())
}

/// Build pull request facts from `--pr` or the inline flags.
fn pull_request_facts(args: &ResolveArgs) -> Result<PullRequestFacts> {
    if let Some(path) = &args.pr {
        return read_pull_request(path);
    }

    Ok(PullRequestFacts {
        title: args.title.clone(),
        body: args.body.clone(),
        commits: args
            .commits
            .iter()
            .map(|m| CommitMessage::parse(m))
            .collect(),
    })
}

fn read_pull_request(path: &Path) -> Result<PullRequestFacts> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BulldozerError::InputError(format!(
            "failed to read pull request file '{}': {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        BulldozerError::InputError(format!(
            "failed to parse pull request JSON '{}': {}",
            path.display(),
            e
        ))
    })
}

fn check_report(path: &Path, merge: &MergeConfig, invalid: &[InvalidPattern]) -> String {
    let mut out = format!("{}: ok\n", path.display());
    out.push_str(&format!("  Default method:   {}\n", merge.method));
    out.push_str(&format!("  Branch rules:     {}\n", merge.branch_method.len()));
    for rule in &merge.branch_method {
        out.push_str(&format!("    {} -> {}\n", rule.pattern, rule.method));
    }
    if !merge.required_statuses.is_empty() {
        out.push_str(&format!(
            "  Required checks:  {}\n",
            merge.required_statuses.join(", ")
        ));
    }

    if !invalid.is_empty() {
        out.push_str(&format!(
            "\nWarning: {} branch_method pattern(s) will be ignored:\n",
            invalid.len()
        ));
        for pattern in invalid {
            let reason = pattern.reason.lines().last().unwrap_or("").trim();
            out.push_str(&format!("  '{}': {}\n", pattern.pattern, reason));
        }
    }
    out
}
