//! GitHub REST v3 schema.
//!
//! List endpoints omit commit and pull-request stats, so both are
//! backfilled from detail endpoints.

use super::endpoint::{ProjectRef, Resource, single_segment};
use super::fields::Fields;
use super::{Adapter, ProviderKind};
use crate::error::Result;
use crate::model::{
    Branch, ChangeRequest, ChangeRequestState, Commit, Contributor, EntityKind, FileChange,
    FileStatus, Issue, IssueState, Repo, UNKNOWN_NAME,
};
use serde_json::Value;

pub struct GitHubAdapter;

impl GitHubAdapter {
    fn fields<'a>(&self, entity: EntityKind, raw: &'a Value) -> Fields<'a> {
        Fields::new(ProviderKind::GitHub, entity, raw)
    }
}

impl Adapter for GitHubAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::GitHub
    }

    fn normalize_repo(&self, raw: &Value) -> Result<Repo> {
        let f = self.fields(EntityKind::Repo, raw);
        let name = f.required_str(&["name"])?;
        let owner = f.required_str(&["owner", "login"])?;
        Ok(Repo {
            id: f.required_u64(&["id"])?,
            name: name.to_string(),
            owner: owner.to_string(),
            full_name: f
                .optional_str(&["full_name"])
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}/{}", owner, name)),
            description: f.optional_str(&["description"]).map(str::to_string),
            default_branch: f.optional_str(&["default_branch"]).map(str::to_string),
        })
    }

    fn normalize_commit(&self, raw: &Value) -> Result<Commit> {
        let f = self.fields(EntityKind::Commit, raw);
        Ok(Commit {
            sha: f.required_str(&["sha"])?.to_string(),
            message: f.required_str(&["commit", "message"])?.to_string(),
            author: f
                .first_str(&[&["commit", "author", "name"], &["author", "login"]])
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            date: f.required_timestamp(&["commit", "author", "date"])?,
            additions: f.optional_u64(&["stats", "additions"]),
            deletions: f.optional_u64(&["stats", "deletions"]),
            files_changed: f.array_len(&["files"]),
        })
    }

    fn normalize_change_request(&self, raw: &Value) -> Result<ChangeRequest> {
        let f = self.fields(EntityKind::ChangeRequest, raw);
        let reported = match f.required_str(&["state"])? {
            "open" => ChangeRequestState::Open,
            "closed" => ChangeRequestState::Closed,
            other => return Err(f.invalid(&["state"], other)),
        };
        let merged_at = f.optional_timestamp(&["merged_at"]);

        Ok(ChangeRequest {
            number: f.required_u64(&["number"])?,
            title: f.required_str(&["title"])?.to_string(),
            state: ChangeRequestState::resolve(reported, merged_at.as_ref()),
            author: f
                .first_str(&[&["user", "login"]])
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            body: f.optional_str(&["body"]).map(str::to_string),
            created_at: f.required_timestamp(&["created_at"])?,
            closed_at: f.optional_timestamp(&["closed_at"]),
            merged_at,
            additions: f.optional_u64(&["additions"]),
            deletions: f.optional_u64(&["deletions"]),
            files_changed: f.optional_u64(&["changed_files"]),
        })
    }

    fn normalize_issue(&self, raw: &Value) -> Result<Issue> {
        let f = self.fields(EntityKind::Issue, raw);
        let state = match f.required_str(&["state"])? {
            "open" => IssueState::Open,
            "closed" => IssueState::Closed,
            other => return Err(f.invalid(&["state"], other)),
        };
        Ok(Issue {
            number: f.required_u64(&["number"])?,
            title: f.required_str(&["title"])?.to_string(),
            state,
            body: f.optional_str(&["body"]).map(str::to_string),
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
            // Anonymous contributors carry only a name.
            login: f.optional_str(&["login"]).map(str::to_string),
            name: f.optional_str(&["name"]).map(str::to_string),
            contributions: f.optional_u64(&["contributions"]),
        })
    }

    fn normalize_file_change(&self, raw: &Value) -> Result<FileChange> {
        let f = self.fields(EntityKind::FileChange, raw);
        let status = match f.required_str(&["status"])? {
            "added" | "copied" => FileStatus::Added,
            "removed" => FileStatus::Removed,
            "renamed" => FileStatus::Renamed,
            "modified" | "changed" | "unchanged" => FileStatus::Modified,
            other => return Err(f.invalid(&["status"], other)),
        };
        Ok(FileChange {
            path: f.required_str(&["filename"])?.to_string(),
            previous_path: f.optional_str(&["previous_filename"]).map(str::to_string),
            status,
            patch: f.optional_str(&["patch"]).map(str::to_string),
            additions: f.optional_u64(&["additions"]),
            deletions: f.optional_u64(&["deletions"]),
        })
    }

    fn list_wrapper(&self, entity: EntityKind) -> Option<&'static str> {
        // Commit detail nests its files.
        match entity {
            EntityKind::FileChange => Some("files"),
            _ => None,
        }
    }

    fn backfills_details(&self, entity: EntityKind) -> bool {
        matches!(entity, EntityKind::Commit | EntityKind::ChangeRequest)
    }

    fn apply_commit_detail(&self, commit: Commit, detail: &Value) -> Commit {
        let f = self.fields(EntityKind::Commit, detail);
        Commit {
            additions: f.optional_u64(&["stats", "additions"]).or(commit.additions),
            deletions: f.optional_u64(&["stats", "deletions"]).or(commit.deletions),
            files_changed: f.array_len(&["files"]).or(commit.files_changed),
            ..commit
        }
    }

    fn apply_change_request_detail(&self, change_request: ChangeRequest, detail: &Value) -> ChangeRequest {
        let f = self.fields(EntityKind::ChangeRequest, detail);
        ChangeRequest {
            additions: f.optional_u64(&["additions"]).or(change_request.additions),
            deletions: f.optional_u64(&["deletions"]).or(change_request.deletions),
            files_changed: f.optional_u64(&["changed_files"]).or(change_request.files_changed),
            ..change_request
        }
    }

    fn project_path(&self, project: &ProjectRef) -> Result<String> {
        Ok(format!(
            "repos/{}/{}",
            single_segment(self, "owner", &project.owner)?,
            single_segment(self, "repository", &project.name)?
        ))
    }

    fn repos_path(&self) -> &'static str {
        "user/repos"
    }

    fn resource_path(&self, resource: &Resource) -> String {
        use super::endpoint::encode_component as enc;
        match resource {
            Resource::Commits => "commits".to_string(),
            Resource::CommitDetail(sha) => format!("commits/{}", enc(sha)),
            Resource::ChangeRequests => "pulls?state=all".to_string(),
            Resource::ChangeRequestDetail(number) => format!("pulls/{}", number),
            Resource::ChangeRequestFiles(number) => format!("pulls/{}/files", number),
            Resource::Issues => "issues".to_string(),
            Resource::Issue(number) => format!("issues/{}", number),
            Resource::Branches => "branches".to_string(),
            Resource::Contributors => "contributors".to_string(),
        }
    }
}
