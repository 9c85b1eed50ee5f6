//! Command implementations for forgeboard.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands act as the I/O layer around the library: they
//! read files, report degraded and rejected items as warnings, and print.

mod branches;
mod diff;
mod endpoint;
mod input;
mod normalize;
mod stats;
mod timeline;


use crate::cli::{Cli, Command};
use forgeboard::config::Config;
use forgeboard::error::Result;
use forgeboard::provider::{Backfilled, Normalized};

/// Dispatch a command to its implementation.
///
/// Loads the config once (defaults when `--config` is absent) and routes
/// each command to its handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Normalize(args) => normalize::cmd_normalize(&config, args),
        Command::Diff(args) => diff::cmd_diff(args),
        Command::Timeline(args) => timeline::cmd_timeline(&config, args),
        Command::Stats(args) => stats::cmd_stats(args),
        Command::Branches(args) => branches::cmd_branches(args),
        Command::Endpoint(args) => endpoint::cmd_endpoint(&config, args),
    }
}

/// Log every rejected list item and hand back the survivors.
fn report_rejected<T>(label: &str, normalized: Normalized<T>) -> Vec<T> {
    for rejected in &normalized.rejected {
        log::warn!("skipping {} item {}: {}", label, rejected.index, rejected.error);
    }
    normalized.items
}

/// Log every degraded backfill entry and hand back the items.
fn report_degraded<T>(label: &str, backfilled: Backfilled<T>) -> Vec<T> {
    for degraded in &backfilled.degraded {
        log::warn!(
            "{} {} kept list-level fields: {}",
            label,
            degraded.key,
            degraded.reason
        );
    }
    backfilled.items
}

/// Pretty-print a serializable value to stdout.
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| {
        forgeboard::error::ForgeError::UserError(format!("failed to serialize output: {}", e))
    })?;
    println!("{}", rendered);
    Ok(())
}
