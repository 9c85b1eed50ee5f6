//! Bounded, parallel detail backfill.
//!
//! Only the first `limit` items are enriched. Each enrichment is independent;
//! a failed detail fetch leaves that item with its list-level fields and is
//! reported as [`Degraded`] rather than failing the list.

use super::ProviderKind;
use crate::model::{ChangeRequest, Commit, EntityKind};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A detail request that could not be satisfied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DetailFetchError(pub String);

/// Supplies per-item detail payloads. Called concurrently.
pub trait DetailSource: Sync {
    fn commit_detail(&self, sha: &str) -> Result<Value, DetailFetchError>;
    fn change_request_detail(&self, number: u64) -> Result<Value, DetailFetchError>;
}

/// An item that kept its list-level fields because its detail was unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Degraded {
    /// Commit SHA or change-request number.
    pub key: String,
    pub reason: String,
}

/// Items after backfill, in their original order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Backfilled<T> {
    pub items: Vec<T>,
    pub degraded: Vec<Degraded>,
}

pub fn backfill_commits(
    provider: ProviderKind,
    commits: Vec<Commit>,
    limit: usize,
    source: &dyn DetailSource,
) -> Backfilled<Commit> {
    let adapter = provider.adapter();
    if !adapter.backfills_details(EntityKind::Commit) {
        return untouched(commits);
    }

    backfill(commits, limit, |commit| match source.commit_detail(&commit.sha) {
        Ok(detail) => (adapter.apply_commit_detail(commit, &detail), None),
        Err(e) => {
            let degraded = Degraded {
                key: commit.sha.clone(),
                reason: e.to_string(),
            };
            (commit, Some(degraded))
        }
    })
}

pub fn backfill_change_requests(
    provider: ProviderKind,
    change_requests: Vec<ChangeRequest>,
    limit: usize,
    source: &dyn DetailSource,
) -> Backfilled<ChangeRequest> {
    let adapter = provider.adapter();
    if !adapter.backfills_details(EntityKind::ChangeRequest) {
        return untouched(change_requests);
    }

    backfill(change_requests, limit, |cr| {
        match source.change_request_detail(cr.number) {
            Ok(detail) => (adapter.apply_change_request_detail(cr, &detail), None),
            Err(e) => {
                let degraded = Degraded {
                    key: cr.number.to_string(),
                    reason: e.to_string(),
                };
                (cr, Some(degraded))
            }
        }
    })
}

fn untouched<T>(items: Vec<T>) -> Backfilled<T> {
    Backfilled {
        items,
        degraded: Vec::new(),
    }
}

fn backfill<T, F>(mut items: Vec<T>, limit: usize, enrich: F) -> Backfilled<T>
where
    T: Send,
    F: Fn(T) -> (T, Option<Degraded>) + Sync + Send,
{
    let rest = items.split_off(limit.min(items.len()));
    log::debug!("backfilling {} items, {} beyond limit", items.len(), rest.len());

    let (mut enriched, degraded): (Vec<T>, Vec<Option<Degraded>>) =
        items.into_par_iter().map(enrich).unzip();

    let degraded: Vec<Degraded> = degraded.into_iter().flatten().collect();
    for d in &degraded {
        log::debug!("detail unavailable for {}: {}", d.key, d.reason);
    }

    enriched.extend(rest);
    Backfilled {
        items: enriched,
        degraded,
    }
}
