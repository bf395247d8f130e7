//! Branch pattern compilation and the process-wide matcher cache.
//!
//! A branch pattern becomes a regex by replacing each `*` with `.*`. No other
//! character is escaped, so regex metacharacters in a pattern keep their
//! regex meaning. Matching is unanchored: a pattern matches when it is found
//! anywhere in the branch name.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};
use tracing::warn;

/// Maximum number of distinct patterns kept in the matcher cache.
///
/// Patterns seen after the cache is full are compiled on every lookup.
pub const PATTERN_CACHE_CAPACITY: usize = 1024;

/// Compiled matchers keyed by raw pattern, holding at most `capacity` entries.
///
/// `None` records a pattern that failed to compile. Once full, new patterns
/// are compiled on every lookup and not inserted.
#[derive(Debug)]
pub struct PatternCache {
    capacity: usize,
    map: RwLock<HashMap<String, Option<Regex>>>,
}

impl PatternCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: RwLock::new(HashMap::new()),
        }
    }

    /// Look up (or compile and remember) the matcher for `pattern`.
    ///
    /// Returns `None` when the pattern does not compile; a warning is logged
    /// when such a pattern is compiled.
    pub fn matcher(&self, pattern: &str) -> Option<Regex> {
        {
            let map = self.map.read().unwrap_or_else(|poison| poison.into_inner());
            if let Some(cached) = map.get(pattern) {
                return cached.clone();
            }
        }

        let compiled = match compile(pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!(pattern, error = %e, "ignoring branch_method pattern that does not compile");
                None
            }
        };

        let mut map = self.map.write().unwrap_or_else(|poison| poison.into_inner());
        if map.len() < self.capacity {
            map.entry(pattern.to_string()).or_insert_with(|| compiled.clone());
        }
        compiled
    }

    /// Whether `pattern` matches somewhere in `branch`. Invalid patterns never match.
    pub fn pattern_matches(&self, pattern: &str, branch: &str) -> bool {
        self.matcher(pattern).is_some_and(|regex| regex.is_match(branch))
    }

    pub fn is_cached(&self, pattern: &str) -> bool {
        self.map
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.map
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static MATCHERS: LazyLock<PatternCache> =
    LazyLock::new(|| PatternCache::new(PATTERN_CACHE_CAPACITY));

/// Translate a branch glob into regex source.
pub fn glob_to_regex(pattern: &str) -> String {
    pattern.replace('*', ".*")
}

/// Compile a branch glob without consulting the cache.
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&glob_to_regex(pattern))
}

/// Matcher for `pattern` from the process-wide cache.
pub fn matcher(pattern: &str) -> Option<Regex> {
    MATCHERS.matcher(pattern)
}

/// Whether `pattern` matches somewhere in `branch`, using the process-wide cache.
pub fn pattern_matches(pattern: &str, branch: &str) -> bool {
    MATCHERS.pattern_matches(pattern, branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_becomes_dot_star() {
        assert_eq!(glob_to_regex("release/*"), "release/.*");
        assert_eq!(glob_to_regex("*/*"), ".*/.*");
        assert_eq!(glob_to_regex("main"), "main");
    }

    #[test]
    fn other_metacharacters_are_not_escaped() {
        assert_eq!(glob_to_regex("v1.*"), "v1..*");
        // `.` keeps its regex meaning and matches any character.
        assert!(pattern_matches("v1.0", "v1x0"));
    }

    #[test]
    fn matching_is_unanchored() {
        assert!(pattern_matches("release/*", "release/1.0"));
        assert!(pattern_matches("release/*", "prerelease/1.0"));
        assert!(pattern_matches("main", "not-main-branch"));
        assert!(!pattern_matches("release/*", "feature/release"));
    }

    #[test]
    fn empty_branch_matches_only_patterns_that_accept_empty() {
        assert!(pattern_matches("*", ""));
        assert!(pattern_matches("**", ""));
        assert!(pattern_matches("", ""));
        assert!(!pattern_matches("a*", ""));
    }

    #[test]
    fn invalid_pattern_never_matches() {
        assert!(compile("feature/(*").is_err());
        assert!(!pattern_matches("feature/(*", "feature/(x"));
        assert!(matcher("feature/(*").is_none());
    }

    #[test]
    fn matchers_are_cached_by_raw_pattern() {
        let pattern = "cache-check/*/unique";
        let first = matcher(pattern).unwrap();
        assert!(MATCHERS.is_cached(pattern));
        let second = matcher(pattern).unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn failed_compilations_are_cached() {
        let pattern = "cache-check/[unterminated";
        assert!(matcher(pattern).is_none());
        assert!(MATCHERS.is_cached(pattern));
        assert!(matcher(pattern).is_none());
    }

    #[test]
    fn full_cache_compiles_without_inserting() {
        let cache = PatternCache::new(2);
        assert!(cache.pattern_matches("hotfix/*", "hotfix/a"));
        assert!(!cache.pattern_matches("release/[", "release/["));
        assert_eq!(cache.len(), 2);

        assert!(cache.pattern_matches("release/*", "prerelease/1.0"));
        assert!(!cache.pattern_matches("release/*", "feature/x"));
        assert!(!cache.is_cached("release/*"));
        assert_eq!(cache.len(), 2);

        assert!(cache.is_cached("hotfix/*"));
        assert!(cache.is_cached("release/["));
    }

    #[test]
    fn zero_capacity_cache_still_matches() {
        let cache = PatternCache::new(0);
        assert!(cache.pattern_matches("*", ""));
        assert!(cache.matcher("bad/(*").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_lookups_agree() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..50)
                        .map(|i| pattern_matches("hotfix/*", &format!("hotfix/{i}")))
                        .all(|m| m)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
