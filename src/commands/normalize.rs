//! Implementation of the `forgeboard normalize` command.

use super::input::{RecordedDetails, read_json};
use super::{print_json, report_degraded, report_rejected};
use crate::cli::{EntityArg, NormalizeArgs};
use forgeboard::config::{Config, MAX_ENRICHMENT_LIMIT};
use forgeboard::error::{ForgeError, Result};
use forgeboard::provider::{self, ProviderKind};
use serde_json::Value;

/// Execute the `forgeboard normalize` command.
///
/// Prints the canonical items as a JSON array (or a single object with
/// `--single`). Rejected items and failed detail lookups are logged as
/// warnings and do not change the exit code.
pub(super) fn cmd_normalize(config: &Config, args: NormalizeArgs) -> Result<()> {
    let payload = read_json(&args.payload)?;
    let provider = args.provider;

    if args.single {
        return print_single(provider, args.entity, &payload);
    }

    let limit = args.limit.unwrap_or(config.enrichment_limit);
    if limit > MAX_ENRICHMENT_LIMIT {
        return Err(ForgeError::UserError(format!(
            "--limit must be at most {} (found {})",
            MAX_ENRICHMENT_LIMIT, limit
        )));
    }
    let details = args
        .details
        .as_deref()
        .map(RecordedDetails::load)
        .transpose()?;

    match args.entity {
        EntityArg::Repos => {
            print_json(&report_rejected("repository", provider::normalize_repos(provider, &payload)?))
        }
        EntityArg::Commits => {
            let commits = report_rejected("commit", provider::normalize_commits(provider, &payload)?);
            let commits = match &details {
                Some(source) => report_degraded(
                    "commit",
                    provider::backfill_commits(provider, commits, limit, source),
                ),
                None => commits,
            };
            print_json(&commits)
        }
        EntityArg::ChangeRequests => {
            let crs = report_rejected(
                "change request",
                provider::normalize_change_requests(provider, &payload)?,
            );
            let crs = match &details {
                Some(source) => report_degraded(
                    "change request",
                    provider::backfill_change_requests(provider, crs, limit, source),
                ),
                None => crs,
            };
            print_json(&crs)
        }
        EntityArg::Issues => {
            print_json(&report_rejected("issue", provider::normalize_issues(provider, &payload)?))
        }
        EntityArg::Branches => print_json(&report_rejected(
            "branch",
            provider::normalize_branches(provider, &payload)?,
        )),
        EntityArg::Contributors => print_json(&report_rejected(
            "contributor",
            provider::normalize_contributors(provider, &payload)?,
        )),
        EntityArg::Files => print_json(&report_rejected(
            "file change",
            provider::normalize_file_changes(provider, &payload)?,
        )),
    }
}

fn print_single(provider: ProviderKind, entity: EntityArg, raw: &Value) -> Result<()> {
    match entity {
        EntityArg::Repos => print_json(&provider::normalize_repo(provider, raw)?),
        EntityArg::Commits => print_json(&provider::normalize_commit(provider, raw)?),
        EntityArg::ChangeRequests => {
            print_json(&provider::normalize_change_request(provider, raw)?)
        }
        EntityArg::Issues => print_json(&provider::normalize_issue(provider, raw)?),
        EntityArg::Branches => print_json(&provider::normalize_branch(provider, raw)?),
        EntityArg::Contributors => print_json(&provider::normalize_contributor(provider, raw)?),
        EntityArg::Files => print_json(&provider::normalize_file_change(provider, raw)?),
    }
}
