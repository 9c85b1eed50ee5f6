//! Canonical changed file, as listed by commit and change-request detail payloads.

use serde::{Deserialize, Serialize};

const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStatus::Added => write!(f, "added"),
            FileStatus::Modified => write!(f, "modified"),
            FileStatus::Removed => write!(f, "removed"),
            FileStatus::Renamed => write!(f, "renamed"),
        }
    }
}

/// One file touched by a commit or change request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChange {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_path: Option<String>,
    pub status: FileStatus,
    /// Unified-diff text; absent for binary or oversized files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletions: Option<u64>,
}

impl FileChange {
    /// Short teaser of the patch for file lists.
    pub fn preview(&self) -> String {
        match self.patch.as_deref() {
            Some(patch) if !patch.is_empty() => {
                let head: String = patch.chars().take(PREVIEW_CHARS).collect();
                format!("{}...", head)
            }
            _ => "No diff available.".to_string(),
        }
    }
}
