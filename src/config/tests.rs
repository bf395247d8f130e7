//! Tests for config functionality.

use crate::config::{
    BranchMethods, BranchRule, Config, MergeMethod, MessageStrategy, SquashOptions, TitleStrategy,
};
use crate::error::BulldozerError;

const FULL_YAML: &str = r#"
version: 1

merge:
  whitelist:
    labels: ["merge when ready"]
  blacklist:
    labels: ["do not merge"]
  method: squash
  options:
    squash:
      title: pull_request_title
      body: summarize_commits
      message_delimiter: "---"
  branch_method:
    "develop": merge
    "release/*": rebase
  delete_after_merge: true
  required_statuses:
    - "ci/circleci: ete-tests"

update:
  whitelist:
    labels: ["wip", "update me"]
"#;

#[test]
fn test_parse_full_yaml() {
    let config = Config::from_yaml(FULL_YAML).unwrap();

    assert_eq!(config.version, 1);
    assert_eq!(config.merge.method, MergeMethod::Squash);
    assert!(config.merge.delete_after_merge);
    assert!(config.merge.whitelist.is_enabled());
    assert!(config.merge.blacklist.is_enabled());
    assert_eq!(config.merge.required_statuses, vec!["ci/circleci: ete-tests"]);
    assert_eq!(
        config.merge.options.squash,
        Some(SquashOptions {
            title: TitleStrategy::PullRequestTitle,
            body: MessageStrategy::SummarizeCommits,
            message_delimiter: "---".to_string(),
        })
    );
    assert!(config.update.whitelist.is_enabled());
    assert!(!config.update.blacklist.is_enabled());
}

#[test]
fn test_branch_method_preserves_document_order() {
    let config = Config::from_yaml(FULL_YAML).unwrap();

    let rules: Vec<&BranchRule> = config.merge.branch_method.iter().collect();
    assert_eq!(
        rules,
        vec![
            &BranchRule::new("develop", MergeMethod::Merge),
            &BranchRule::new("release/*", MergeMethod::Rebase),
        ]
    );
}

#[test]
fn test_parse_minimal_yaml() {
    let yaml = r#"
version: 1
merge:
  method: merge
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.merge.method, MergeMethod::Merge);
    assert!(config.merge.branch_method.is_empty());
    assert!(config.merge.required_statuses.is_empty());
    assert!(config.merge.options.squash.is_none());
    assert!(!config.merge.delete_after_merge);
    assert!(!config.merge.whitelist.is_enabled());
    assert!(!config.update.whitelist.is_enabled());
}

#[test]
fn test_null_branch_method_is_empty() {
    let yaml = r#"
version: 1
merge:
  method: rebase
  branch_method:
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.merge.branch_method.is_empty());
}

#[test]
fn test_squash_options_default_to_platform_behaviour() {
    let yaml = r#"
version: 1
merge:
  method: squash
  options:
    squash: {}
"#;
    let config = Config::from_yaml(yaml).unwrap();
    let squash = config.merge.options.squash.unwrap();

    assert_eq!(squash.title, TitleStrategy::GithubDefault);
    assert_eq!(squash.body, MessageStrategy::EmptyBody);
    assert_eq!(squash.message_delimiter, "");
}

#[test]
fn test_missing_method_is_rejected() {
    let yaml = r#"
version: 1
merge:
  delete_after_merge: true
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, BulldozerError::ConfigError(_)));
    assert!(err.to_string().contains("method"));
}

#[test]
fn test_unknown_merge_method_is_rejected() {
    let yaml = r#"
version: 1
merge:
  method: fast_forward
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, BulldozerError::ConfigError(_)));
}

#[test]
fn test_unknown_branch_method_value_is_rejected() {
    let yaml = r#"
version: 1
merge:
  method: merge
  branch_method:
    "hotfix/*": octopus
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_unknown_title_strategy_is_rejected() {
    let yaml = r#"
version: 1
merge:
  method: squash
  options:
    squash:
      title: last_commit_title
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_unsupported_version_is_rejected() {
    let yaml = r#"
version: 2
merge:
  method: merge
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert_eq!(
        err,
        BulldozerError::InvalidSchemaVersion {
            found: 2,
            expected: 1
        }
    );
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
version: 1
future_setting: true
merge:
  method: merge
  something_new: [1, 2]
"#;
    assert!(Config::from_yaml(yaml).is_ok());
}

#[test]
fn test_negative_version_is_rejected() {
    let yaml = r#"
version: -1
merge:
  method: merge
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert_eq!(
        err,
        BulldozerError::InvalidSchemaVersion {
            found: -1,
            expected: 1
        }
    );
}

#[test]
fn test_missing_version_is_rejected() {
    let yaml = r#"
merge:
  method: merge
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert_eq!(
        err,
        BulldozerError::InvalidSchemaVersion {
            found: 0,
            expected: 1
        }
    );
}

#[test]
fn test_empty_required_status_is_loaded_as_written() {
    let yaml = r#"
version: 1
merge:
  method: merge
  required_statuses: ["ci", ""]
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.merge.required_statuses, vec!["ci", ""]);
}

#[test]
fn test_yaml_serialization_preserves_rules() {
    let config = Config::from_yaml(FULL_YAML).unwrap();
    let yaml = config.to_yaml().unwrap();
    let reparsed = Config::from_yaml(&yaml).unwrap();

    assert_eq!(reparsed, config);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(".bulldozer.yml");
    std::fs::write(&path, FULL_YAML).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.merge.method, MergeMethod::Squash);
}

#[test]
fn test_load_missing_file_names_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing.yml");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, BulldozerError::ConfigError(_)));
    assert!(err.to_string().contains("missing.yml"));
}

#[test]
fn test_enum_wire_values() {
    assert_eq!(MergeMethod::from_str("merge"), Some(MergeMethod::Merge));
    assert_eq!(MergeMethod::from_str("squash"), Some(MergeMethod::Squash));
    assert_eq!(MergeMethod::from_str("rebase"), Some(MergeMethod::Rebase));
    assert_eq!(MergeMethod::from_str("Squash"), None);
    assert_eq!(MergeMethod::Rebase.to_string(), "rebase");

    assert_eq!(
        TitleStrategy::from_str("first_commit_title"),
        Some(TitleStrategy::FirstCommitTitle)
    );
    assert_eq!(
        TitleStrategy::from_str("github_default"),
        Some(TitleStrategy::GithubDefault)
    );
    assert_eq!(
        MessageStrategy::from_str("pull_request_body"),
        Some(MessageStrategy::PullRequestBody)
    );
    assert_eq!(MessageStrategy::from_str("empty"), None);
}

#[test]
fn test_branch_methods_insert_replaces_in_place() {
    let mut methods: BranchMethods = [
        ("a/*", MergeMethod::Merge),
        ("b/*", MergeMethod::Rebase),
    ]
    .into_iter()
    .collect();
    methods.insert("a/*", MergeMethod::Squash);

    assert_eq!(methods.len(), 2);
    let first = methods.iter().next().unwrap();
    assert_eq!(first, &BranchRule::new("a/*", MergeMethod::Squash));
}
