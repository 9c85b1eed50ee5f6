//! Merge commits and change requests into one ordered stream.

use super::event::{DescriptionStyle, EventKind, TimelineEvent};
use super::range::{EventFilter, TimeRange};
use crate::model::{ChangeRequest, Commit};
use chrono::{DateTime, Utc};

/// Build a newest-first timeline.
///
/// Commits are range-filtered by their date, change requests by `created_at`.
/// A change request with a merge timestamp becomes a `Merge` event dated at
/// the merge; otherwise a `PullRequest` event dated at creation. Equal dates
/// keep input order, commits before change requests.
pub fn build_timeline(
    commits: &[Commit],
    change_requests: &[ChangeRequest],
    filter: EventFilter,
    range: TimeRange,
    now: DateTime<Utc>,
    style: &DescriptionStyle,
) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    if filter.includes_commits() {
        events.extend(
            commits
                .iter()
                .filter(|c| range.contains(now, &c.date))
                .map(|c| commit_event(c, style)),
        );
    }

    if filter.includes_change_requests() {
        events.extend(
            change_requests
                .iter()
                .filter(|cr| range.contains(now, &cr.created_at))
                .filter(|cr| filter.accepts_change_request(cr.merged_at.is_some()))
                .map(|cr| change_request_event(cr, style)),
        );
    }

    // Vec::sort_by is stable.
    events.sort_by(|a, b| b.date.cmp(&a.date));
    log::debug!(
        "timeline: {} events (filter={}, range={})",
        events.len(),
        filter,
        range
    );
    events
}

fn commit_event(commit: &Commit, style: &DescriptionStyle) -> TimelineEvent {
    TimelineEvent {
        id: commit.sha.clone(),
        title: commit.title().to_string(),
        description: style.commit_description(commit.body()),
        author: commit.author.clone(),
        date: commit.date,
        additions: commit.additions,
        deletions: commit.deletions,
        kind: EventKind::Commit {
            sha: commit.sha.clone(),
        },
    }
}

fn change_request_event(cr: &ChangeRequest, style: &DescriptionStyle) -> TimelineEvent {
    let (kind, date) = match cr.merged_at {
        Some(merged_at) => (EventKind::Merge { number: cr.number }, merged_at),
        None => (EventKind::PullRequest { number: cr.number }, cr.created_at),
    };

    TimelineEvent {
        id: format!("pr-{}", cr.number),
        title: cr.title.clone(),
        description: style.change_request_description(cr.body.as_deref()),
        author: cr.author.clone(),
        date,
        additions: cr.additions,
        deletions: cr.deletions,
        kind,
    }
}
