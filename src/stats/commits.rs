//! Per-day commit reducers and average commit size.

use super::mean_rounded;
use crate::model::Commit;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyChurn {
    pub date: NaiveDate,
    pub additions: u64,
    pub deletions: u64,
}

impl DailyChurn {
    /// Lines added plus lines removed.
    pub fn total(&self) -> u64 {
        self.additions + self.deletions
    }
}

/// Mean size over commits that report all three stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitSizeAverage {
    pub additions: u64,
    pub deletions: u64,
    pub files_changed: u64,
    /// How many commits qualified.
    pub sample_size: u64,
}

/// Commits per UTC day, ascending by day.
pub fn commit_frequency(commits: &[Commit]) -> Vec<DailyCount> {
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for commit in commits {
        *by_day.entry(commit.day()).or_default() += 1;
    }
    by_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Lines added and removed per UTC day, ascending by day.
///
/// Commits without both additions and deletions are skipped.
pub fn code_churn(commits: &[Commit]) -> Vec<DailyChurn> {
    let mut by_day: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
    for commit in commits {
        let Some((additions, deletions)) = commit.churn() else {
            continue;
        };
        let entry = by_day.entry(commit.day()).or_default();
        entry.0 += additions;
        entry.1 += deletions;
    }
    by_day
        .into_iter()
        .map(|(date, (additions, deletions))| DailyChurn {
            date,
            additions,
            deletions,
        })
        .collect()
}

/// Rounded means of additions, deletions, and files changed.
///
/// A commit missing any of the three is left out of all three means. With
/// no qualifying commit every field is zero.
pub fn average_commit_size(commits: &[Commit]) -> CommitSizeAverage {
    let sizes: Vec<(u64, u64, u64)> = commits.iter().filter_map(Commit::size).collect();
    let count = sizes.len() as u64;

    let (additions, deletions, files) = sizes
        .iter()
        .fold((0, 0, 0), |(a, d, f), (ca, cd, cf)| (a + ca, d + cd, f + cf));

    CommitSizeAverage {
        additions: mean_rounded(additions, count),
        deletions: mean_rounded(deletions, count),
        files_changed: mean_rounded(files, count),
        sample_size: count,
    }
}
