//! GitLab REST v4 schema.
//!
//! Merge requests carry no line stats in list or detail payloads, and GitLab
//! never reports them; they stay unknown.

use super::endpoint::{ProjectRef, Resource, encode_component};
use super::fields::Fields;
use super::{Adapter, ProviderKind};
use crate::error::{ForgeError, Result};
use crate::model::{
    Branch, ChangeRequest, ChangeRequestState, Commit, Contributor, EntityKind, FileChange,
    FileStatus, Issue, IssueState, Repo, UNKNOWN_NAME,
};
use serde_json::Value;

pub struct GitLabAdapter;

impl GitLabAdapter {
    fn fields<'a>(&self, entity: EntityKind, raw: &'a Value) -> Fields<'a> {
        Fields::new(ProviderKind::GitLab, entity, raw)
    }
}

impl Adapter for GitLabAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::GitLab
    }

    fn normalize_repo(&self, raw: &Value) -> Result<Repo> {
        let f = self.fields(EntityKind::Repo, raw);
        let name = f.required_str(&["path"])?;
        let owner = f.required_str(&["namespace", "full_path"])?;
        Ok(Repo {
            id: f.required_u64(&["id"])?,
            name: name.to_string(),
            owner: owner.to_string(),
            full_name: f
                .optional_str(&["path_with_namespace"])
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}/{}", owner, name)),
            description: f.optional_str(&["description"]).map(str::to_string),
            default_branch: f.optional_str(&["default_branch"]).map(str::to_string),
        })
    }

    fn normalize_commit(&self, raw: &Value) -> Result<Commit> {
        let f = self.fields(EntityKind::Commit, raw);
        Ok(Commit {
            sha: f.required_str(&["id"])?.to_string(),
            message: f.required_str(&["message"])?.to_string(),
            author: f
                .first_str(&[&["author_name"]])
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            date: f.first_timestamp(&[&["authored_date"], &["created_at"], &["committed_date"]])?,
            additions: f.optional_u64(&["stats", "additions"]),
            deletions: f.optional_u64(&["stats", "deletions"]),
            files_changed: None,
        })
    }

    fn normalize_change_request(&self, raw: &Value) -> Result<ChangeRequest> {
        let f = self.fields(EntityKind::ChangeRequest, raw);
        let reported = match f.required_str(&["state"])? {
            "opened" | "locked" => ChangeRequestState::Open,
            "closed" => ChangeRequestState::Closed,
            "merged" => ChangeRequestState::Merged,
            other => return Err(f.invalid(&["state"], other)),
        };
        let merged_at = f.optional_timestamp(&["merged_at"]);

        Ok(ChangeRequest {
            number: f.required_u64(&["iid"])?,
            title: f.required_str(&["title"])?.to_string(),
            state: ChangeRequestState::resolve(reported, merged_at.as_ref()),
            author: f
                .first_str(&[&["author", "username"], &["author", "name"]])
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            body: f.optional_str(&["description"]).map(str::to_string),
            created_at: f.required_timestamp(&["created_at"])?,
            closed_at: f.optional_timestamp(&["closed_at"]),
            merged_at,
            additions: None,
            deletions: None,
            files_changed: None,
        })
    }

    fn normalize_issue(&self, raw: &Value) -> Result<Issue> {
        let f = self.fields(EntityKind::Issue, raw);
        let state = match f.required_str(&["state"])? {
            "opened" => IssueState::Open,
            "closed" => IssueState::Closed,
            other => return Err(f.invalid(&["state"], other)),
        };
        Ok(Issue {
            number: f.required_u64(&["iid"])?,
            title: f.required_str(&["title"])?.to_string(),
            state,
            body: f.optional_str(&["description"]).map(str::to_string),
            created_at: f.required_timestamp(&["created_at"])?,
            updated_at: f.optional_timestamp(&["updated_at"]),
        })
    }

    fn normalize_branch(&self, raw: &Value) -> Result<Branch> {
        let f = self.fields(EntityKind::Branch, raw);
        Ok(Branch::new(f.required_str(&["name"])?))
    }

    fn normalize_contributor(&self, raw: &Value) -> Result<Contributor> {
        let f = self.fields(EntityKind::Contributor, raw);
        Ok(Contributor {
            login: None,
            name: f.optional_str(&["name"]).map(str::to_string),
            contributions: f.optional_u64(&["commits"]),
        })
    }

    fn normalize_file_change(&self, raw: &Value) -> Result<FileChange> {
        let f = self.fields(EntityKind::FileChange, raw);
        let path = f.required_str(&["new_path"])?;
        let old_path = f.optional_str(&["old_path"]);

        let status = if f.flag(&["new_file"]) {
            FileStatus::Added
        } else if f.flag(&["deleted_file"]) {
            FileStatus::Removed
        } else if f.flag(&["renamed_file"]) {
            FileStatus::Renamed
        } else {
            FileStatus::Modified
        };

        Ok(FileChange {
            path: path.to_string(),
            previous_path: old_path
                .filter(|old| status == FileStatus::Renamed && *old != path)
                .map(str::to_string),
            status,
            patch: f.optional_str(&["diff"]).map(str::to_string),
            additions: None,
            deletions: None,
        })
    }

    fn list_wrapper(&self, entity: EntityKind) -> Option<&'static str> {
        // Merge-request changes nest their files.
        match entity {
            EntityKind::FileChange => Some("changes"),
            _ => None,
        }
    }

    fn project_path(&self, project: &ProjectRef) -> Result<String> {
        if project.owner.is_empty() || project.name.is_empty() || project.name.contains('/') {
            return Err(ForgeError::Provider {
                provider: ProviderKind::GitLab,
                message: format!("invalid project path '{}'", project.full_name()),
            });
        }
        Ok(format!("projects/{}", encode_component(&project.full_name())))
    }

    fn repos_path(&self) -> &'static str {
        "projects?membership=true"
    }

    fn resource_path(&self, resource: &Resource) -> String {
        match resource {
            Resource::Commits => "repository/commits".to_string(),
            Resource::CommitDetail(sha) => {
                format!("repository/commits/{}/diff", encode_component(sha))
            }
            Resource::ChangeRequests => "merge_requests?state=all".to_string(),
            Resource::ChangeRequestDetail(number) => format!("merge_requests/{}", number),
            Resource::ChangeRequestFiles(number) => format!("merge_requests/{}/changes", number),
            Resource::Issues => "issues".to_string(),
            Resource::Issue(number) => format!("issues/{}", number),
            Resource::Branches => "repository/branches".to_string(),
            Resource::Contributors => "repository/contributors".to_string(),
        }
    }
}
