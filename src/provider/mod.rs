//! Provider adapters: raw GitHub/GitLab JSON in, canonical entities out.
//!
//! Call sites pick a [`ProviderKind`] once and go through these functions;
//! provider field names never leak past this module. Adding a provider means
//! one new `ProviderKind` variant and one [`Adapter`] implementation.

mod adapter;
mod backfill;
mod endpoint;
mod fields;
mod github;
mod gitlab;
mod kind;
mod list;

#[cfg(test)]
mod tests;

pub use adapter::Adapter;
pub use backfill::{
    Backfilled, Degraded, DetailFetchError, DetailSource, backfill_change_requests,
    backfill_commits,
};
pub use endpoint::{Endpoint, ProjectRef, Resource, encode_component};
pub use kind::ProviderKind;
pub use list::{Normalized, RejectedItem};

use crate::error::Result;
use crate::model::{Branch, ChangeRequest, Commit, Contributor, EntityKind, FileChange, Issue, Repo};
use serde_json::Value;

pub fn normalize_repo(provider: ProviderKind, raw: &Value) -> Result<Repo> {
    provider.adapter().normalize_repo(raw)
}

pub fn normalize_commit(provider: ProviderKind, raw: &Value) -> Result<Commit> {
    provider.adapter().normalize_commit(raw)
}

pub fn normalize_change_request(provider: ProviderKind, raw: &Value) -> Result<ChangeRequest> {
    provider.adapter().normalize_change_request(raw)
}

pub fn normalize_issue(provider: ProviderKind, raw: &Value) -> Result<Issue> {
    provider.adapter().normalize_issue(raw)
}

pub fn normalize_branch(provider: ProviderKind, raw: &Value) -> Result<Branch> {
    provider.adapter().normalize_branch(raw)
}

pub fn normalize_contributor(provider: ProviderKind, raw: &Value) -> Result<Contributor> {
    provider.adapter().normalize_contributor(raw)
}

pub fn normalize_file_change(provider: ProviderKind, raw: &Value) -> Result<FileChange> {
    provider.adapter().normalize_file_change(raw)
}

// =============================================================================
// List payloads
// =============================================================================

pub fn normalize_repos(provider: ProviderKind, payload: &Value) -> Result<Normalized<Repo>> {
    let adapter = provider.adapter();
    list::normalize_list(adapter, EntityKind::Repo, payload, |raw| adapter.normalize_repo(raw))
}

pub fn normalize_commits(provider: ProviderKind, payload: &Value) -> Result<Normalized<Commit>> {
    let adapter = provider.adapter();
    list::normalize_list(adapter, EntityKind::Commit, payload, |raw| {
        adapter.normalize_commit(raw)
    })
}

pub fn normalize_change_requests(
    provider: ProviderKind,
    payload: &Value,
) -> Result<Normalized<ChangeRequest>> {
    let adapter = provider.adapter();
    list::normalize_list(adapter, EntityKind::ChangeRequest, payload, |raw| {
        adapter.normalize_change_request(raw)
    })
}

pub fn normalize_issues(provider: ProviderKind, payload: &Value) -> Result<Normalized<Issue>> {
    let adapter = provider.adapter();
    list::normalize_list(adapter, EntityKind::Issue, payload, |raw| {
        adapter.normalize_issue(raw)
    })
}

pub fn normalize_branches(provider: ProviderKind, payload: &Value) -> Result<Normalized<Branch>> {
    let adapter = provider.adapter();
    list::normalize_list(adapter, EntityKind::Branch, payload, |raw| {
        adapter.normalize_branch(raw)
    })
}

pub fn normalize_contributors(
    provider: ProviderKind,
    payload: &Value,
) -> Result<Normalized<Contributor>> {
    let adapter = provider.adapter();
    list::normalize_list(adapter, EntityKind::Contributor, payload, |raw| {
        adapter.normalize_contributor(raw)
    })
}

/// Files from a commit detail, commit diff, change-request files, or MR changes payload.
pub fn normalize_file_changes(
    provider: ProviderKind,
    payload: &Value,
) -> Result<Normalized<FileChange>> {
    let adapter = provider.adapter();
    list::normalize_list(adapter, EntityKind::FileChange, payload, |raw| {
        adapter.normalize_file_change(raw)
    })
}
