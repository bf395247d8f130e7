//! Configuration enums, constants, and the ordered branch-method rule list.
//!
//! The enum wire values are the literal strings accepted in `.bulldozer.yml`;
//! unknown values are rejected when the config is parsed.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Schema version implemented by this resolver.
pub const SCHEMA_VERSION: i64 = 1;

/// Delimiter used to join commit bodies when `message_delimiter` is empty.
pub const DEFAULT_MESSAGE_DELIMITER: &str = "\n\n";

/// How a pull request is merged into its base branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMethod {
    /// Create a merge commit.
    Merge,
    /// Squash all commits into one.
    Squash,
    /// Rebase commits onto the base branch.
    Rebase,
}

impl MergeMethod {
    /// Parse a merge method from its wire value.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "merge" => Some(Self::Merge),
            "squash" => Some(Self::Squash),
            "rebase" => Some(Self::Rebase),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Squash => "squash",
            Self::Rebase => "rebase",
        }
    }
}

impl fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the title of a squash commit comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TitleStrategy {
    /// Use the pull request title verbatim.
    PullRequestTitle,
    /// Use the first line of the first commit message.
    FirstCommitTitle,
    /// Let the hosting platform compose the title.
    #[default]
    GithubDefault,
}

impl TitleStrategy {
    /// Parse a title strategy from its wire value.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pull_request_title" => Some(Self::PullRequestTitle),
            "first_commit_title" => Some(Self::FirstCommitTitle),
            "github_default" => Some(Self::GithubDefault),
            _ => None,
        }
    }
}

/// Where the body of a squash commit comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageStrategy {
    /// Use the pull request description verbatim.
    PullRequestBody,
    /// Join the bodies of all commits.
    SummarizeCommits,
    /// Leave the body empty.
    #[default]
    EmptyBody,
}

impl MessageStrategy {
    /// Parse a message strategy from its wire value.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pull_request_body" => Some(Self::PullRequestBody),
            "summarize_commits" => Some(Self::SummarizeCommits),
            "empty_body" => Some(Self::EmptyBody),
            _ => None,
        }
    }
}

/// A single `branch_method` entry: branch pattern and the method it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRule {
    /// Branch pattern; `*` matches any sequence of characters.
    pub pattern: String,
    pub method: MergeMethod,
}

impl BranchRule {
    pub fn new(pattern: impl Into<String>, method: MergeMethod) -> Self {
        Self {
            pattern: pattern.into(),
            method,
        }
    }
}

/// Per-branch merge method overrides, in document order.
///
/// Serialized as a plain mapping (`"release/*": squash`). Order is preserved
/// so that when several patterns match a branch, the first one listed wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchMethods {
    rules: Vec<BranchRule>,
}

impl BranchMethods {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule. A pattern already present keeps its position and takes the new method.
    pub fn insert(&mut self, pattern: impl Into<String>, method: MergeMethod) {
        let pattern = pattern.into();
        match self.rules.iter_mut().find(|r| r.pattern == pattern) {
            Some(rule) => rule.method = method,
            None => self.rules.push(BranchRule { pattern, method }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BranchRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<P: Into<String>> FromIterator<(P, MergeMethod)> for BranchMethods {
    fn from_iter<I: IntoIterator<Item = (P, MergeMethod)>>(iter: I) -> Self {
        let mut methods = Self::new();
        for (pattern, method) in iter {
            methods.insert(pattern, method);
        }
        methods
    }
}

impl<'a> IntoIterator for &'a BranchMethods {
    type Item = &'a BranchRule;
    type IntoIter = std::slice::Iter<'a, BranchRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl Serialize for BranchMethods {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.pattern, &rule.method)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for BranchMethods {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BranchMethodsVisitor;

        impl<'de> Visitor<'de> for BranchMethodsVisitor {
            type Value = BranchMethods;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of branch pattern to merge method")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(BranchMethods::new())
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(BranchMethods::new())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut methods = BranchMethods::new();
                while let Some((pattern, method)) = access.next_entry::<String, MergeMethod>()? {
                    methods.insert(pattern, method);
                }
                Ok(methods)
            }
        }

        deserializer.deserialize_any(BranchMethodsVisitor)
    }
}
