//! Canonical commit.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single commit. Identity is `sha`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commit {
    pub sha: String,
    /// Full message: the first line is the title, the remainder the body.
    pub message: String,
    pub author: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_changed: Option<u64>,
}

impl Commit {
    /// First line of the message.
    pub fn title(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Message lines after the title, without the separating blank lines.
    ///
    /// Returns `None` when nothing but whitespace follows the title.
    pub fn body(&self) -> Option<&str> {
        let (_, rest) = self.message.split_once('\n')?;
        let rest = rest.trim_start_matches(['\n', '\r']).trim_end();
        if rest.is_empty() { None } else { Some(rest) }
    }

    /// UTC calendar day of the commit.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Additions and deletions, when both are known.
    pub fn churn(&self) -> Option<(u64, u64)> {
        Some((self.additions?, self.deletions?))
    }

    /// Additions, deletions, and files changed, when all three are known.
    pub fn size(&self) -> Option<(u64, u64, u64)> {
        Some((self.additions?, self.deletions?, self.files_changed?))
    }
}
