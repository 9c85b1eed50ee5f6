//! One-shot repository activity overview.

use super::{
    ChangeRequestStats, CommitSizeAverage, ContributorRank, DailyChurn, DailyCount,
    average_commit_size, change_request_stats, code_churn, commit_frequency, contributor_ranking,
};
use crate::model::{ChangeRequest, Commit, Contributor};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub total_commits: u64,
    pub total_change_requests: u64,
    pub contributor_count: u64,
    pub commit_frequency: Vec<DailyCount>,
    pub code_churn: Vec<DailyChurn>,
    pub average_commit_size: CommitSizeAverage,
    pub change_requests: ChangeRequestStats,
    pub contributors: Vec<ContributorRank>,
}

pub fn summarize(
    commits: &[Commit],
    change_requests: &[ChangeRequest],
    contributors: &[Contributor],
) -> ActivitySummary {
    ActivitySummary {
        total_commits: commits.len() as u64,
        total_change_requests: change_requests.len() as u64,
        contributor_count: contributors.len() as u64,
        commit_frequency: commit_frequency(commits),
        code_churn: code_churn(commits),
        average_commit_size: average_commit_size(commits),
        change_requests: change_request_stats(change_requests),
        contributors: contributor_ranking(contributors),
    }
}
