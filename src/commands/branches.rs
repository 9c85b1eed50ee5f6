//! Implementation of the `forgeboard branches` command.

use super::input::read_json;
use super::{print_json, report_rejected};
use crate::cli::BranchesArgs;
use forgeboard::error::{ForgeError, Result};
use forgeboard::model::{Branch, BranchAnomaly, BranchSet};
use forgeboard::provider;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
struct BranchReport<'a> {
    trunk: Option<&'a str>,
    branches: &'a [Branch],
    anomalies: Vec<BranchAnomaly>,
}

/// Execute the `forgeboard branches` command.
///
/// Anomalies are reported in the output and as warnings; they never fail
/// the command.
pub(super) fn cmd_branches(args: BranchesArgs) -> Result<()> {
    let parents = parse_parents(&args.parents)?;
    let mut branches = report_rejected(
        "branch",
        provider::normalize_branches(args.provider, &read_json(&args.payload)?)?,
    );
    for branch in &mut branches {
        if let Some(parent) = parents.get(branch.name.as_str()) {
            branch.parent = Some(parent.to_string());
        }
    }

    let set = BranchSet::new(&branches);
    let anomalies = set.anomalies();
    for anomaly in &anomalies {
        log::warn!("branch anomaly: {:?}", anomaly);
    }

    print_json(&BranchReport {
        trunk: set.trunk().map(|b| b.name.as_str()),
        branches: &branches,
        anomalies,
    })
}

/// Parse `branch=parent` pairs.
pub(super) fn parse_parents(pairs: &[String]) -> Result<HashMap<&str, &str>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((branch, parent)) if !branch.is_empty() && !parent.is_empty() => {
                Ok((branch, parent))
            }
            _ => Err(ForgeError::UserError(format!(
                "invalid --parent '{}'. Expected 'branch=parent'",
                pair
            ))),
        })
        .collect()
}
