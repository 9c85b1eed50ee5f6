//! Contributor ranking.

use crate::model::Contributor;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributorRank {
    pub name: String,
    pub contribution_count: u64,
}

/// One entry per contributor, in the provider's order.
///
/// Unknown contribution counts rank as zero.
pub fn contributor_ranking(contributors: &[Contributor]) -> Vec<ContributorRank> {
    contributors
        .iter()
        .map(|c| ContributorRank {
            name: c.display_name().to_string(),
            contribution_count: c.contributions.unwrap_or(0),
        })
        .collect()
}

/// The ranking sorted by count, highest first; ties keep provider order.
pub fn ranked_by_contributions(contributors: &[Contributor]) -> Vec<ContributorRank> {
    let mut ranking = contributor_ranking(contributors);
    ranking.sort_by(|a, b| b.contribution_count.cmp(&a.contribution_count));
    ranking
}
