//! Config struct definition and default implementation.

use super::types::*;
use crate::timeline::{EventFilter, TimeRange};
use serde::{Deserialize, Serialize};

/// Configuration for forgeboard.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Provider settings
    // =========================================================================
    /// How many list items receive a per-item detail backfill (0 disables).
    #[serde(default = "default_enrichment_limit")]
    pub enrichment_limit: usize,

    /// Base URL for GitHub REST endpoints.
    #[serde(default = "default_github_api_base")]
    pub github_api_base: String,

    /// Base URL for GitLab REST endpoints.
    #[serde(default = "default_gitlab_api_base")]
    pub gitlab_api_base: String,

    // =========================================================================
    // Timeline settings
    // =========================================================================
    /// Window used when no time range is requested explicitly.
    #[serde(default)]
    pub time_range: TimeRange,

    /// Event types shown when no filter is requested explicitly.
    #[serde(default)]
    pub event_filter: EventFilter,

    /// Text used when a commit or change request has no description.
    #[serde(default = "default_description_placeholder")]
    pub description_placeholder: String,

    /// Change-request bodies longer than this are truncated with `...`.
    #[serde(default = "default_description_max_chars")]
    pub description_max_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enrichment_limit: default_enrichment_limit(),
            github_api_base: default_github_api_base(),
            gitlab_api_base: default_gitlab_api_base(),
            time_range: TimeRange::default(),
            event_filter: EventFilter::default(),
            description_placeholder: default_description_placeholder(),
            description_max_chars: default_description_max_chars(),
        }
    }
}
