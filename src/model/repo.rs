//! Canonical repository.

use serde::{Deserialize, Serialize};

/// A repository (GitHub) or project (GitLab).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repo {
    /// Provider-assigned numeric identifier.
    pub id: u64,
    /// Short repository name.
    pub name: String,
    /// Owning user, organization, or namespace path.
    pub owner: String,
    /// `owner/name` as the provider reports it.
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}
