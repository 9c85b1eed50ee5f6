//! Implementation of the `forgeboard stats` command.

use super::input::read_json;
use super::{print_json, report_rejected};
use crate::cli::StatsArgs;
use forgeboard::error::Result;
use forgeboard::provider;
use forgeboard::stats::{ranked_by_contributions, summarize};

/// Execute the `forgeboard stats` command.
///
/// Any payload left out counts as an empty collection.
pub(super) fn cmd_stats(args: StatsArgs) -> Result<()> {
    let commits = match &args.commits {
        Some(path) => report_rejected(
            "commit",
            provider::normalize_commits(args.provider, &read_json(path)?)?,
        ),
        None => Vec::new(),
    };
    let change_requests = match &args.change_requests {
        Some(path) => report_rejected(
            "change request",
            provider::normalize_change_requests(args.provider, &read_json(path)?)?,
        ),
        None => Vec::new(),
    };
    let contributors = match &args.contributors {
        Some(path) => report_rejected(
            "contributor",
            provider::normalize_contributors(args.provider, &read_json(path)?)?,
        ),
        None => Vec::new(),
    };

    let mut summary = summarize(&commits, &change_requests, &contributors);
    if args.sorted {
        summary.contributors = ranked_by_contributions(&contributors);
    }
    print_json(&summary)
}
