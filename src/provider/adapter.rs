//! The per-provider adapter seam.
//!
//! Each provider implements [`Adapter`] once. Everything outside this module
//! works with canonical entities and never inspects raw field names.

use super::ProviderKind;
use super::endpoint::{ProjectRef, Resource};
use crate::error::Result;
use crate::model::{Branch, ChangeRequest, Commit, Contributor, EntityKind, FileChange, Issue, Repo};
use serde_json::Value;

/// Maps one provider's raw JSON into canonical entities.
pub trait Adapter: Sync {
    fn kind(&self) -> ProviderKind;

    fn normalize_repo(&self, raw: &Value) -> Result<Repo>;
    fn normalize_commit(&self, raw: &Value) -> Result<Commit>;
    fn normalize_change_request(&self, raw: &Value) -> Result<ChangeRequest>;
    fn normalize_issue(&self, raw: &Value) -> Result<Issue>;
    fn normalize_branch(&self, raw: &Value) -> Result<Branch>;
    fn normalize_contributor(&self, raw: &Value) -> Result<Contributor>;
    fn normalize_file_change(&self, raw: &Value) -> Result<FileChange>;

    /// Object key under which a list of `entity` may be wrapped, if any.
    fn list_wrapper(&self, _entity: EntityKind) -> Option<&'static str> {
        None
    }

    /// Whether list payloads for `entity` omit stats that a detail call supplies.
    fn backfills_details(&self, _entity: EntityKind) -> bool {
        false
    }

    /// Merge a commit detail payload into a list-level commit.
    ///
    /// Stats absent from the detail keep their list-level value.
    fn apply_commit_detail(&self, commit: Commit, _detail: &Value) -> Commit {
        commit
    }

    /// Merge a change-request detail payload into a list-level change request.
    fn apply_change_request_detail(&self, change_request: ChangeRequest, _detail: &Value) -> ChangeRequest {
        change_request
    }

    /// Path segment addressing a project, relative to the API base.
    fn project_path(&self, project: &ProjectRef) -> Result<String>;

    /// Path listing the authenticated user's repositories.
    fn repos_path(&self) -> &'static str;

    /// Path suffix for a project-scoped resource, appended to `project_path`.
    fn resource_path(&self, resource: &Resource) -> String;
}
