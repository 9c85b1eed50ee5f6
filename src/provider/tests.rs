//! Tests for provider adapters.

use super::*;
use crate::error::ForgeError;
use crate::exit_codes;
use crate::model::{ChangeRequestState, FileStatus, IssueState};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

fn github_commit(sha: &str) -> Value {
    json!({
        "sha": sha,
        "commit": {
            "message": "Fix parser\n\nHandle empty hunks.",
            "author": { "name": "Ada Lovelace", "date": "2024-01-02T10:00:00Z" }
        },
        "author": { "login": "ada" }
    })
}

fn github_pull(number: u64) -> Value {
    json!({
        "number": number,
        "title": "Add parser",
        "state": "closed",
        "user": { "login": "ada" },
        "body": "Adds the parser.",
        "created_at": "2024-01-01T00:00:00Z",
        "closed_at": "2024-01-03T00:00:00Z",
        "merged_at": "2024-01-03T00:00:00Z"
    })
}

// =============================================================================
// GitHub
// =============================================================================

#[test]
fn test_github_commit_from_list_payload() {
    let commit = normalize_commit(ProviderKind::GitHub, &github_commit("abc123")).unwrap();

    assert_eq!(commit.sha, "abc123");
    assert_eq!(commit.title(), "Fix parser");
    assert_eq!(commit.author, "Ada Lovelace");
    assert_eq!(commit.date.to_rfc3339(), "2024-01-02T10:00:00+00:00");
    assert_eq!(commit.additions, None);
    assert_eq!(commit.files_changed, None);
}

#[test]
fn test_normalization_is_idempotent() {
    let raw = github_pull(3);
    assert_eq!(
        normalize_change_request(ProviderKind::GitHub, &raw).unwrap(),
        normalize_change_request(ProviderKind::GitHub, &raw).unwrap()
    );
}

#[test]
fn test_github_commit_author_falls_back_to_login_then_unknown() {
    let mut raw = github_commit("abc");
    raw["commit"]["author"]["name"] = Value::Null;
    let commit = normalize_commit(ProviderKind::GitHub, &raw).unwrap();
    assert_eq!(commit.author, "ada");

    raw["author"] = Value::Null;
    let commit = normalize_commit(ProviderKind::GitHub, &raw).unwrap();
    assert_eq!(commit.author, "Unknown");
}

#[test]
fn test_github_commit_detail_carries_stats() {
    let mut raw = github_commit("abc");
    raw["stats"] = json!({ "additions": 12, "deletions": 0, "total": 12 });
    raw["files"] = json!([{ "filename": "a.rs" }, { "filename": "b.rs" }]);

    let commit = normalize_commit(ProviderKind::GitHub, &raw).unwrap();
    assert_eq!(commit.additions, Some(12));
    assert_eq!(commit.deletions, Some(0));
    assert_eq!(commit.files_changed, Some(2));
}

#[test]
fn test_github_commit_missing_sha_is_schema_error() {
    let mut raw = github_commit("abc");
    raw.as_object_mut().unwrap().remove("sha");

    let err = normalize_commit(ProviderKind::GitHub, &raw).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::SCHEMA_FAILURE);
    match err {
        ForgeError::ProviderSchema {
            provider,
            entity,
            field,
            ..
        } => {
            assert_eq!(provider, ProviderKind::GitHub);
            assert_eq!(entity, EntityKind::Commit);
            assert_eq!(field, "sha");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_github_commit_bad_date_is_schema_error() {
    let mut raw = github_commit("abc");
    raw["commit"]["author"]["date"] = json!("yesterday");

    let err = normalize_commit(ProviderKind::GitHub, &raw).unwrap_err();
    assert!(err.to_string().contains("commit.author.date"));
}

#[test]
fn test_github_merged_pull_request() {
    let cr = normalize_change_request(ProviderKind::GitHub, &github_pull(7)).unwrap();

    assert_eq!(cr.number, 7);
    assert_eq!(cr.state, ChangeRequestState::Merged);
    assert!(cr.is_merged());
    assert_eq!(cr.author, "ada");
    assert_eq!(cr.body.as_deref(), Some("Adds the parser."));
    assert_eq!(cr.additions, None);
}

#[test]
fn test_github_closed_unmerged_pull_request() {
    let mut raw = github_pull(8);
    raw["merged_at"] = Value::Null;

    let cr = normalize_change_request(ProviderKind::GitHub, &raw).unwrap();
    assert_eq!(cr.state, ChangeRequestState::Closed);
    assert!(cr.closed_at.is_some());
}

#[test]
fn test_github_unknown_pull_state_is_rejected() {
    let mut raw = github_pull(9);
    raw["state"] = json!("draft");

    let err = normalize_change_request(ProviderKind::GitHub, &raw).unwrap_err();
    assert!(err.to_string().contains("unrecognized value \"draft\""));
}

#[test]
fn test_github_issue_and_repo() {
    let issue = normalize_issue(
        ProviderKind::GitHub,
        &json!({
            "number": 3,
            "title": "Crash on empty diff",
            "state": "open",
            "body": null,
            "created_at": "2024-02-01T00:00:00Z"
        }),
    )
    .unwrap();
    assert_eq!(issue.state, IssueState::Open);
    assert_eq!(issue.body, None);
    assert_eq!(issue.updated_at, None);

    let repo = normalize_repo(
        ProviderKind::GitHub,
        &json!({
            "id": 42,
            "name": "forgeboard",
            "owner": { "login": "acme" },
            "default_branch": "main"
        }),
    )
    .unwrap();
    assert_eq!(repo.full_name, "acme/forgeboard");
    assert_eq!(repo.default_branch.as_deref(), Some("main"));
}

#[test]
fn test_github_contributor_and_branch() {
    let contributor = normalize_contributor(
        ProviderKind::GitHub,
        &json!({ "login": "ada", "contributions": 17 }),
    )
    .unwrap();
    assert_eq!(contributor.display_name(), "ada");
    assert_eq!(contributor.contributions, Some(17));

    let branch = normalize_branch(ProviderKind::GitHub, &json!({ "name": "main" })).unwrap();
    assert_eq!(branch.name, "main");
    assert_eq!(branch.parent, None);
}

#[test]
fn test_github_file_changes_from_commit_detail() {
    let detail = json!({
        "sha": "abc",
        "files": [
            { "filename": "src/new.rs", "status": "added", "additions": 3, "deletions": 0, "patch": "@@ -0,0 +1,3 @@" },
            { "filename": "src/lib.rs", "previous_filename": "src/old.rs", "status": "renamed", "additions": 0, "deletions": 0 }
        ]
    });

    let files = normalize_file_changes(ProviderKind::GitHub, &detail).unwrap();
    assert!(files.is_complete());
    assert_eq!(files.items[0].status, FileStatus::Added);
    assert_eq!(files.items[1].status, FileStatus::Renamed);
    assert_eq!(files.items[1].previous_path.as_deref(), Some("src/old.rs"));
    assert_eq!(files.items[1].patch, None);
}

// =============================================================================
// GitLab
// =============================================================================

#[test]
fn test_gitlab_commit_with_inline_stats() {
    let commit = normalize_commit(
        ProviderKind::GitLab,
        &json!({
            "id": "def456",
            "message": "Refactor lexer",
            "author_name": "Grace",
            "authored_date": "2024-01-02T11:00:00.000+01:00",
            "stats": { "additions": 4, "deletions": 2, "total": 6 }
        }),
    )
    .unwrap();

    assert_eq!(commit.sha, "def456");
    assert_eq!(commit.author, "Grace");
    assert_eq!(commit.date.to_rfc3339(), "2024-01-02T10:00:00+00:00");
    assert_eq!(commit.churn(), Some((4, 2)));
    assert_eq!(commit.files_changed, None);
}

#[test]
fn test_gitlab_commit_date_falls_back_to_created_at() {
    let commit = normalize_commit(
        ProviderKind::GitLab,
        &json!({
            "id": "def456",
            "message": "x",
            "created_at": "2024-01-05T00:00:00Z"
        }),
    )
    .unwrap();
    assert_eq!(commit.author, "Unknown");
    assert_eq!(commit.date.to_rfc3339(), "2024-01-05T00:00:00+00:00");
}

#[test]
fn test_gitlab_merge_request_states() {
    let raw = |state: &str, merged_at: Value| {
        json!({
            "iid": 11,
            "title": "Add lexer",
            "state": state,
            "author": { "username": "grace", "name": "Grace Hopper" },
            "description": "",
            "created_at": "2024-01-01T00:00:00Z",
            "merged_at": merged_at
        })
    };

    let opened = normalize_change_request(ProviderKind::GitLab, &raw("opened", Value::Null)).unwrap();
    assert_eq!(opened.state, ChangeRequestState::Open);
    assert_eq!(opened.number, 11);
    assert_eq!(opened.author, "grace");

    let locked = normalize_change_request(ProviderKind::GitLab, &raw("locked", Value::Null)).unwrap();
    assert_eq!(locked.state, ChangeRequestState::Open);

    let merged = normalize_change_request(
        ProviderKind::GitLab,
        &raw("merged", json!("2024-01-02T00:00:00Z")),
    )
    .unwrap();
    assert_eq!(merged.state, ChangeRequestState::Merged);
    assert_eq!(merged.additions, None);

    let err = normalize_change_request(ProviderKind::GitLab, &raw("open", Value::Null)).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::SCHEMA_FAILURE);
}

#[test]
fn test_gitlab_issue_uses_iid() {
    let issue = normalize_issue(
        ProviderKind::GitLab,
        &json!({
            "id": 9001,
            "iid": 4,
            "title": "Slow timeline",
            "state": "closed",
            "description": "Takes a while.",
            "created_at": "2024-02-01T00:00:00Z",
            "updated_at": "2024-02-02T00:00:00Z"
        }),
    )
    .unwrap();
    assert_eq!(issue.number, 4);
    assert_eq!(issue.state, IssueState::Closed);
    assert!(issue.updated_at.is_some());
}

#[test]
fn test_github_anonymous_contributor() {
    let contributor = normalize_contributor(
        ProviderKind::GitHub,
        &json!({ "type": "Anonymous", "name": "Bob", "contributions": 3 }),
    )
    .unwrap();
    assert_eq!(contributor.login, None);
    assert_eq!(contributor.display_name(), "Bob");
    assert_eq!(contributor.contributions, Some(3));

    let list = normalize_contributors(
        ProviderKind::GitHub,
        &json!([{ "type": "Anonymous", "name": "Bob", "contributions": 3 }, { "login": "ada" }]),
    )
    .unwrap();
    assert_eq!(list.items.len(), 2);
    assert!(list.rejected.is_empty());
}

#[test]
fn test_contributor_without_login_or_name_ranks_as_unknown() {
    let contributor = normalize_contributor(
        ProviderKind::GitLab,
        &json!({ "email": "x@y", "commits": 4 }),
    )
    .unwrap();
    assert_eq!(contributor.name, None);

    let ranking = crate::stats::contributor_ranking(&[contributor]);
    assert_eq!(ranking[0].name, "Unknown");
    assert_eq!(ranking[0].contribution_count, 4);
}

#[test]
fn test_gitlab_repo_and_contributor() {
    let repo = normalize_repo(
        ProviderKind::GitLab,
        &json!({
            "id": 7,
            "name": "Forge Board",
            "path": "forgeboard",
            "path_with_namespace": "acme/tools/forgeboard",
            "namespace": { "path": "tools", "full_path": "acme/tools" }
        }),
    )
    .unwrap();
    assert_eq!(repo.owner, "acme/tools");
    assert_eq!(repo.name, "forgeboard");
    assert_eq!(repo.full_name, "acme/tools/forgeboard");

    let contributor = normalize_contributor(
        ProviderKind::GitLab,
        &json!({ "name": "Grace", "email": "g@example.com", "commits": 5 }),
    )
    .unwrap();
    assert_eq!(contributor.login, None);
    assert_eq!(contributor.display_name(), "Grace");
    assert_eq!(contributor.contributions, Some(5));
}

#[test]
fn test_gitlab_file_changes_from_merge_request_changes() {
    let payload = json!({
        "iid": 11,
        "changes": [
            { "old_path": "a.rs", "new_path": "a.rs", "diff": "@@ -1 +1 @@\n-a\n+b", "new_file": false, "renamed_file": false, "deleted_file": false },
            { "old_path": "old.rs", "new_path": "new.rs", "diff": "", "new_file": false, "renamed_file": true, "deleted_file": false },
            { "old_path": "gone.rs", "new_path": "gone.rs", "diff": "", "new_file": false, "renamed_file": false, "deleted_file": true }
        ]
    });

    let files = normalize_file_changes(ProviderKind::GitLab, &payload).unwrap();
    let statuses: Vec<FileStatus> = files.items.iter().map(|f| f.status).collect();
    assert_eq!(
        statuses,
        vec![FileStatus::Modified, FileStatus::Renamed, FileStatus::Removed]
    );
    assert_eq!(files.items[0].previous_path, None);
    assert_eq!(files.items[1].previous_path.as_deref(), Some("old.rs"));
    assert_eq!(files.items[0].additions, None);
}

// =============================================================================
// Lists
// =============================================================================

#[test]
fn test_bad_item_is_rejected_and_rest_survive() {
    let payload = json!([github_commit("a"), { "commit": {} }, github_commit("c")]);

    let commits = normalize_commits(ProviderKind::GitHub, &payload).unwrap();
    let shas: Vec<&str> = commits.items.iter().map(|c| c.sha.as_str()).collect();
    assert_eq!(shas, vec!["a", "c"]);
    assert_eq!(commits.rejected.len(), 1);
    assert_eq!(commits.rejected[0].index, 1);
    assert!(!commits.is_complete());
}

#[test]
fn test_error_object_is_provider_error() {
    let err = normalize_commits(ProviderKind::GitHub, &json!({ "message": "Bad credentials" }))
        .unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::PROVIDER_FAILURE);
    assert_eq!(err.to_string(), "github request failed: Bad credentials");

    let err = normalize_issues(ProviderKind::GitLab, &json!({ "error": "insufficient_scope" }))
        .unwrap_err();
    assert_eq!(err.to_string(), "gitlab request failed: insufficient_scope");
}

#[test]
fn test_non_list_payload_is_provider_error() {
    let err = normalize_branches(ProviderKind::GitLab, &json!("nope")).unwrap_err();
    assert!(matches!(err, ForgeError::Provider { .. }));
    assert!(err.to_string().contains("found a string"));
}

#[test]
fn test_empty_list_is_fine() {
    let repos = normalize_repos(ProviderKind::GitHub, &json!([])).unwrap();
    assert!(repos.items.is_empty());
    assert!(repos.is_complete());
}

#[test]
fn test_schema_error_item_is_truncated() {
    let long = "x".repeat(500);
    let err = normalize_branch(ProviderKind::GitHub, &json!({ "label": long })).unwrap_err();
    match err {
        ForgeError::ProviderSchema { item, .. } => {
            assert!(item.ends_with("..."));
            assert_eq!(item.chars().count(), 203);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// =============================================================================
// Endpoints
// =============================================================================

#[test]
fn test_project_ref_parse() {
    let project = ProjectRef::parse("acme/tools/forgeboard").unwrap();
    assert_eq!(project.owner, "acme/tools");
    assert_eq!(project.name, "forgeboard");

    assert!(ProjectRef::parse("forgeboard").is_err());
    assert!(ProjectRef::parse("acme/").is_err());
}

#[test]
fn test_github_endpoint_paths() {
    let project = ProjectRef::new("acme", "forgeboard");
    let url = |resource: Resource| {
        Endpoint::Project(project.clone(), resource)
            .url(ProviderKind::GitHub, "https://api.github.com")
            .unwrap()
    };

    assert_eq!(
        url(Resource::ChangeRequests),
        "https://api.github.com/repos/acme/forgeboard/pulls?state=all"
    );
    assert_eq!(
        url(Resource::CommitDetail("abc".to_string())),
        "https://api.github.com/repos/acme/forgeboard/commits/abc"
    );
    assert_eq!(
        url(Resource::ChangeRequestFiles(7)),
        "https://api.github.com/repos/acme/forgeboard/pulls/7/files"
    );
    assert_eq!(
        Endpoint::Repos.path(ProviderKind::GitHub).unwrap(),
        "user/repos"
    );
}

#[test]
fn test_github_rejects_nested_owner() {
    let endpoint = Endpoint::Project(ProjectRef::new("acme/tools", "forgeboard"), Resource::Commits);
    let err = endpoint.path(ProviderKind::GitHub).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::PROVIDER_FAILURE);
}

#[test]
fn test_gitlab_endpoint_encodes_project_path() {
    let project = ProjectRef::new("acme/tools", "forgeboard");

    let path = Endpoint::Project(project.clone(), Resource::Commits)
        .path(ProviderKind::GitLab)
        .unwrap();
    assert_eq!(path, "projects/acme%2Ftools%2Fforgeboard/repository/commits");

    let path = Endpoint::Project(project, Resource::ChangeRequestFiles(3))
        .path(ProviderKind::GitLab)
        .unwrap();
    assert_eq!(path, "projects/acme%2Ftools%2Fforgeboard/merge_requests/3/changes");
}

#[test]
fn test_encode_component() {
    assert_eq!(encode_component("a/b c"), "a%2Fb%20c");
    assert_eq!(encode_component("it's-fine_(ok).~*!"), "it's-fine_(ok).~*!");
    assert_eq!(encode_component("é"), "%C3%A9");
}

// =============================================================================
// Backfill
// =============================================================================

struct FakeSource {
    commits: HashMap<String, Value>,
    pulls: HashMap<u64, Value>,
    calls: AtomicUsize,
}

impl FakeSource {
    fn new() -> Self {
        Self {
            commits: HashMap::new(),
            pulls: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl DetailSource for FakeSource {
    fn commit_detail(&self, sha: &str) -> std::result::Result<Value, DetailFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.commits
            .get(sha)
            .cloned()
            .ok_or_else(|| DetailFetchError(format!("404 for {sha}")))
    }

    fn change_request_detail(&self, number: u64) -> std::result::Result<Value, DetailFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pulls
            .get(&number)
            .cloned()
            .ok_or_else(|| DetailFetchError("rate limited".to_string()))
    }
}

fn listed_commits(shas: &[&str]) -> Vec<Commit> {
    shas.iter()
        .map(|sha| normalize_commit(ProviderKind::GitHub, &github_commit(sha)).unwrap())
        .collect()
}

#[test]
fn test_backfill_respects_limit_and_order() {
    let mut source = FakeSource::new();
    for sha in ["a", "b", "c"] {
        source.commits.insert(
            sha.to_string(),
            json!({ "stats": { "additions": 5, "deletions": 1 }, "files": [{}] }),
        );
    }

    let result = backfill_commits(ProviderKind::GitHub, listed_commits(&["a", "b", "c"]), 2, &source);

    let shas: Vec<&str> = result.items.iter().map(|c| c.sha.as_str()).collect();
    assert_eq!(shas, vec!["a", "b", "c"]);
    assert_eq!(result.items[0].size(), Some((5, 1, 1)));
    assert_eq!(result.items[1].size(), Some((5, 1, 1)));
    assert_eq!(result.items[2].additions, None);
    assert!(result.degraded.is_empty());
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_backfill_failure_degrades_single_item() {
    let mut source = FakeSource::new();
    source
        .commits
        .insert("a".to_string(), json!({ "stats": { "additions": 1, "deletions": 1 } }));

    let result = backfill_commits(ProviderKind::GitHub, listed_commits(&["a", "b"]), 10, &source);

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].churn(), Some((1, 1)));
    assert_eq!(result.items[1].churn(), None);
    assert_eq!(
        result.degraded,
        vec![Degraded {
            key: "b".to_string(),
            reason: "404 for b".to_string()
        }]
    );
}

#[test]
fn test_zero_limit_disables_backfill() {
    let source = FakeSource::new();
    let result = backfill_commits(ProviderKind::GitHub, listed_commits(&["a"]), 0, &source);
    assert_eq!(result.items.len(), 1);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_change_request_backfill() {
    let mut source = FakeSource::new();
    source.pulls.insert(
        7,
        json!({ "additions": 40, "deletions": 2, "changed_files": 3 }),
    );
    let listed = vec![
        normalize_change_request(ProviderKind::GitHub, &github_pull(7)).unwrap(),
        normalize_change_request(ProviderKind::GitHub, &github_pull(8)).unwrap(),
    ];

    let result = backfill_change_requests(ProviderKind::GitHub, listed, 10, &source);

    assert_eq!(result.items[0].additions, Some(40));
    assert_eq!(result.items[0].files_changed, Some(3));
    assert_eq!(result.items[1].additions, None);
    assert_eq!(result.degraded.len(), 1);
    assert_eq!(result.degraded[0].key, "8");
}

#[test]
fn test_gitlab_skips_backfill() {
    let source = FakeSource::new();
    let listed = vec![
        normalize_commit(
            ProviderKind::GitLab,
            &json!({ "id": "x", "message": "m", "authored_date": "2024-01-01T00:00:00Z" }),
        )
        .unwrap(),
    ];

    let result = backfill_commits(ProviderKind::GitLab, listed, 10, &source);
    assert!(result.degraded.is_empty());
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_provider_kind_parse() {
    assert_eq!("GitHub".parse::<ProviderKind>().unwrap(), ProviderKind::GitHub);
    assert_eq!("gitlab".parse::<ProviderKind>().unwrap(), ProviderKind::GitLab);
    assert!("bitbucket".parse::<ProviderKind>().is_err());
    assert_eq!(ProviderKind::GitLab.to_string(), "gitlab");
}
