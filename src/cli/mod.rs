//! CLI argument parsing for forgeboard.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use forgeboard::provider::ProviderKind;
use forgeboard::timeline::{EventFilter, TimeRange};
use std::path::PathBuf;

/// Forgeboard: repository activity across GitHub and GitLab.
///
/// Reads raw provider JSON payloads and patch text from files (or `-` for
/// stdin) and prints canonical, provider-agnostic results.
#[derive(Parser, Debug)]
#[command(name = "forgeboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a forgeboard.yaml config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for forgeboard.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize a raw provider payload into canonical JSON.
    ///
    /// List payloads keep every valid item; invalid items are reported
    /// and skipped. Commit and change-request lists can be backfilled
    /// from a file of recorded detail payloads.
    Normalize(NormalizeArgs),

    /// Parse a unified-diff patch and render it.
    Diff(DiffArgs),

    /// Build a merged commit / change-request timeline.
    Timeline(TimelineArgs),

    /// Compute activity statistics.
    Stats(StatsArgs),

    /// Report the trunk and ancestry anomalies of a branch list.
    Branches(BranchesArgs),

    /// Print the REST URL for a provider resource.
    Endpoint(EndpointArgs),
}

/// Entity kinds accepted by `normalize`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityArg {
    Repos,
    Commits,
    ChangeRequests,
    Issues,
    Branches,
    Contributors,
    Files,
}

/// Arguments for the `normalize` command.
#[derive(Parser, Debug)]
pub struct NormalizeArgs {
    /// Entity kind the payload holds.
    #[arg(value_enum)]
    pub entity: EntityArg,

    /// Payload file (JSON), or `-` for stdin.
    pub payload: PathBuf,

    /// Provider that produced the payload.
    #[arg(short, long)]
    pub provider: ProviderKind,

    /// Treat the payload as a single item rather than a list.
    #[arg(long)]
    pub single: bool,

    /// JSON file of recorded detail payloads: {"commits": {sha: ...}, "change_requests": {number: ...}}.
    #[arg(long)]
    pub details: Option<PathBuf>,

    /// Override the configured enrichment limit.
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Diff rendering modes.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiffView {
    #[default]
    Unified,
    Split,
}

/// Arguments for the `diff` command.
#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Patch file, or `-` for stdin.
    pub patch: PathBuf,

    /// Rendering mode.
    #[arg(long, value_enum, default_value_t = DiffView::Unified)]
    pub view: DiffView,

    /// Column width of each side in split view.
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Print rows as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `timeline` command.
#[derive(Parser, Debug)]
pub struct TimelineArgs {
    /// Provider that produced the payloads.
    #[arg(short, long)]
    pub provider: ProviderKind,

    /// Commit list payload.
    #[arg(long)]
    pub commits: Option<PathBuf>,

    /// Change-request list payload.
    #[arg(long)]
    pub change_requests: Option<PathBuf>,

    /// Time range (week, month, year, all). Defaults to the configured range.
    #[arg(long)]
    pub range: Option<TimeRange>,

    /// Event filter (all, commits, pull_requests, merges). Defaults to the configured filter.
    #[arg(long)]
    pub filter: Option<EventFilter>,

    /// Reference time (RFC 3339). Defaults to now.
    #[arg(long)]
    pub now: Option<String>,

    /// Print events as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command.
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Provider that produced the payloads.
    #[arg(short, long)]
    pub provider: ProviderKind,

    /// Commit list payload.
    #[arg(long)]
    pub commits: Option<PathBuf>,

    /// Change-request list payload.
    #[arg(long)]
    pub change_requests: Option<PathBuf>,

    /// Contributor list payload.
    #[arg(long)]
    pub contributors: Option<PathBuf>,

    /// Sort contributors by contribution count.
    #[arg(long)]
    pub sorted: bool,
}

/// Arguments for the `branches` command.
#[derive(Parser, Debug)]
pub struct BranchesArgs {
    /// Branch list payload.
    pub payload: PathBuf,

    /// Provider that produced the payload.
    #[arg(short, long)]
    pub provider: ProviderKind,

    /// Parent annotations as `branch=parent`.
    #[arg(long = "parent", value_delimiter = ',')]
    pub parents: Vec<String>,
}

/// Resources accepted by `endpoint`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceArg {
    Repos,
    Commits,
    Commit,
    ChangeRequests,
    ChangeRequest,
    ChangeRequestFiles,
    Issues,
    Issue,
    Branches,
    Contributors,
}

/// Arguments for the `endpoint` command.
#[derive(Parser, Debug)]
pub struct EndpointArgs {
    /// Resource to address.
    #[arg(value_enum)]
    pub resource: ResourceArg,

    /// Project as `owner/name` (GitLab owners may be nested groups).
    pub project: Option<String>,

    /// Provider to build the URL for.
    #[arg(short, long)]
    pub provider: ProviderKind,

    /// Commit SHA for `commit`.
    #[arg(long)]
    pub sha: Option<String>,

    /// Number for `change-request`, `change-request-files`, and `issue`.
    #[arg(long)]
    pub number: Option<u64>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
