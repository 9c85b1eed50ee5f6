//! Aggregate metrics over canonical collections.
//!
//! Every reducer is a pure function of its input slice. Optional stats that
//! are unknown are skipped, never counted as zero.

mod activity;
mod change_requests;
mod commits;
mod contributors;


pub use activity::{ActivitySummary, summarize};
pub use change_requests::{ChangeRequestStats, change_request_stats};
pub use commits::{
    CommitSizeAverage, DailyChurn, DailyCount, average_commit_size, code_churn, commit_frequency,
};
pub use contributors::{ContributorRank, contributor_ranking, ranked_by_contributions};

/// Integer mean rounded half up.
fn mean_rounded(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (2 * total + count) / (2 * count)
}
