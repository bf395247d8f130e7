//! Squash commit message composition.

use crate::config::{DEFAULT_MESSAGE_DELIMITER, MessageStrategy, SquashOptions, TitleStrategy};
use crate::error::{BulldozerError, Result};
use serde::{Deserialize, Serialize};

/// One commit of a pull request, split into its first line and the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    /// First line of the commit message.
    pub summary: String,
    /// Everything after the first line; empty when the message is a single line.
    #[serde(default)]
    pub body: String,
}

impl CommitMessage {
    pub fn new(summary: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            body: body.into(),
        }
    }

    /// Split a full commit message into summary and body.
    ///
    /// Blank lines between the summary and the body, and trailing whitespace,
    /// are dropped.
    pub fn parse(message: &str) -> Self {
        match message.split_once('\n') {
            Some((summary, rest)) => Self {
                summary: summary.trim_end_matches('\r').to_string(),
                body: rest.trim_start_matches(['\r', '\n']).trim_end().to_string(),
            },
            None => Self {
                summary: message.to_string(),
                body: String::new(),
            },
        }
    }
}

/// The pull request facts the composer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFacts {
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Commits in pull request order, oldest first.
    #[serde(default)]
    pub commits: Vec<CommitMessage>,
}

/// Title of a squash commit.
///
/// Serializes as `null` for [`CommitTitle::PlatformDefault`] and as a string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommitTitle {
    /// Leave the title to the hosting platform.
    PlatformDefault,
    Text(String),
}

impl CommitTitle {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::PlatformDefault => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Title and body for a squash merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquashMessage {
    pub title: CommitTitle,
    pub body: String,
}

/// Build the squash commit title and body for `pr`.
///
/// `None` options behave like `title: github_default, body: empty_body`.
///
/// # Errors
///
/// `EmptyCommitHistory` when `first_commit_title` is requested and the pull
/// request has no commits.
pub fn compose_squash_message(
    options: Option<&SquashOptions>,
    pr: &PullRequestFacts,
) -> Result<SquashMessage> {
    let defaults = SquashOptions::default();
    let options = options.unwrap_or(&defaults);

    let title = match options.title {
        TitleStrategy::PullRequestTitle => CommitTitle::Text(pr.title.clone()),
        TitleStrategy::FirstCommitTitle => {
            let first = pr
                .commits
                .first()
                .ok_or(BulldozerError::EmptyCommitHistory)?;
            CommitTitle::Text(first.summary.lines().next().unwrap_or("").to_string())
        }
        TitleStrategy::GithubDefault => CommitTitle::PlatformDefault,
    };

    let body = match options.body {
        MessageStrategy::PullRequestBody => pr.body.clone(),
        MessageStrategy::SummarizeCommits => {
            summarize_commits(&pr.commits, &options.message_delimiter)
        }
        MessageStrategy::EmptyBody => String::new(),
    };

    Ok(SquashMessage { title, body })
}

/// Join non-empty commit bodies with `delimiter` (`"\n\n"` when empty).
fn summarize_commits(commits: &[CommitMessage], delimiter: &str) -> String {
    let delimiter = if delimiter.is_empty() {
        DEFAULT_MESSAGE_DELIMITER
    } else {
        delimiter
    };

    commits
        .iter()
        .map(|c| c.body.as_str())
        .filter(|body| !body.is_empty())
        .collect::<Vec<_>>()
        .join(delimiter)
}
