//! Canonical, provider-agnostic entities.
//!
//! Every provider adapter maps its raw payloads into these types. They are
//! plain values: constructed fresh per fetch and never mutated afterwards
//! except by detail backfill, which produces a new value.
//!
//! Optional numeric fields use `None` for "unknown". Zero always means zero.

mod branch;
mod change_request;
mod commit;
mod contributor;
mod file_change;
mod issue;
mod repo;


pub use branch::{Branch, BranchAnomaly, BranchSet};
pub use change_request::{ChangeRequest, ChangeRequestState};
pub use commit::Commit;
pub use contributor::{Contributor, UNKNOWN_NAME};
pub use file_change::{FileChange, FileStatus};
pub use issue::{Issue, IssueState};
pub use repo::Repo;

use serde::{Deserialize, Serialize};

/// The kind of canonical entity an adapter was producing.
///
/// Used to label schema errors and rejected list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Repo,
    Commit,
    ChangeRequest,
    Issue,
    Branch,
    Contributor,
    FileChange,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Repo => write!(f, "repository"),
            EntityKind::Commit => write!(f, "commit"),
            EntityKind::ChangeRequest => write!(f, "change request"),
            EntityKind::Issue => write!(f, "issue"),
            EntityKind::Branch => write!(f, "branch"),
            EntityKind::Contributor => write!(f, "contributor"),
            EntityKind::FileChange => write!(f, "file change"),
        }
    }
}
