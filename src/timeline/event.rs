//! Timeline events.

use crate::config::types::{DEFAULT_DESCRIPTION_MAX_CHARS, DEFAULT_DESCRIPTION_PLACEHOLDER};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Variant-specific part of a timeline event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Commit { sha: String },
    PullRequest { number: u64 },
    Merge { number: u64 },
}

/// One entry in a merged commit / change-request stream.
///
/// Derived per query; `id` is unique within one result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletions: Option<u64>,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl TimelineEvent {
    pub fn is_commit(&self) -> bool {
        matches!(self.kind, EventKind::Commit { .. })
    }
}

/// How event descriptions are derived from message and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionStyle {
    /// Used when there is no text at all.
    pub placeholder: String,
    /// Change-request bodies longer than this many characters are cut and get `...`.
    pub max_chars: usize,
}

impl Default for DescriptionStyle {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_DESCRIPTION_PLACEHOLDER.to_string(),
            max_chars: DEFAULT_DESCRIPTION_MAX_CHARS,
        }
    }
}

impl DescriptionStyle {
    pub(super) fn commit_description(&self, body: Option<&str>) -> String {
        match body {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => self.placeholder.clone(),
        }
    }

    pub(super) fn change_request_description(&self, body: Option<&str>) -> String {
        let text = match body {
            Some(text) if !text.is_empty() => text,
            _ => return self.placeholder.clone(),
        };

        if text.chars().count() > self.max_chars {
            let head: String = text.chars().take(self.max_chars).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        }
    }
}
