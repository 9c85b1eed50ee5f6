//! Provider tags.

use super::adapter::Adapter;
use super::github::GitHubAdapter;
use super::gitlab::GitLabAdapter;
use crate::error::ForgeError;
use serde::{Deserialize, Serialize};

static GITHUB: GitHubAdapter = GitHubAdapter;
static GITLAB: GitLabAdapter = GitLabAdapter;

/// A supported source-control provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// GitHub REST v3.
    GitHub,
    /// GitLab REST v4.
    GitLab,
}

impl ProviderKind {
    /// The adapter implementing this provider's schema.
    pub fn adapter(self) -> &'static dyn Adapter {
        match self {
            ProviderKind::GitHub => &GITHUB,
            ProviderKind::GitLab => &GITLAB,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::GitHub => write!(f, "github"),
            ProviderKind::GitLab => write!(f, "gitlab"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github" => Ok(ProviderKind::GitHub),
            "gitlab" => Ok(ProviderKind::GitLab),
            _ => Err(ForgeError::UserError(format!(
                "unknown provider '{}'. Valid options: github, gitlab",
                s
            ))),
        }
    }
}
