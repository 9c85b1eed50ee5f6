//! Canonical change request (GitHub pull request, GitLab merge request).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Lifecycle state of a change request.
///
/// `Merged` and `Closed` are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeRequestState {
    Open,
    Closed,
    Merged,
}

impl ChangeRequestState {
    /// Resolve the canonical state from a reported state and the merge timestamp.
    ///
    /// A merge timestamp always wins: GitHub reports merged pull requests as
    /// plain `closed`.
    pub fn resolve(reported: ChangeRequestState, merged_at: Option<&DateTime<Utc>>) -> Self {
        if merged_at.is_some() {
            ChangeRequestState::Merged
        } else {
            reported
        }
    }
}

impl std::fmt::Display for ChangeRequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeRequestState::Open => write!(f, "open"),
            ChangeRequestState::Closed => write!(f, "closed"),
            ChangeRequestState::Merged => write!(f, "merged"),
        }
    }
}

/// A pull request or merge request. Identity is `number` within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequest {
    pub number: u64,
    pub title: String,
    pub state: ChangeRequestState,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_changed: Option<u64>,
}

impl ChangeRequest {
    /// Whether the request carries a merge timestamp.
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// Fractional days between creation and close, when closed.
    pub fn lifetime_days(&self) -> Option<f64> {
        let closed_at = self.closed_at?;
        let seconds = (closed_at - self.created_at).num_milliseconds() as f64 / 1000.0;
        Some(seconds / SECONDS_PER_DAY)
    }
}
