//! Configuration constants and defaults for forgeboard.

/// Upper bound for `enrichment_limit`.
///
/// Matches the largest page size either provider serves, so a higher cap
/// could never be reached by a single list payload.
pub const MAX_ENRICHMENT_LIMIT: usize = 100;

/// Default number of list items that receive a detail backfill.
pub const DEFAULT_ENRICHMENT_LIMIT: usize = 10;

/// Default placeholder shown when an event has no description.
pub const DEFAULT_DESCRIPTION_PLACEHOLDER: &str = "No description provided";

/// Default length above which change-request bodies are truncated.
pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 150;

// Default value functions for serde
pub(crate) fn default_enrichment_limit() -> usize {
    DEFAULT_ENRICHMENT_LIMIT
}
pub(crate) fn default_description_placeholder() -> String {
    DEFAULT_DESCRIPTION_PLACEHOLDER.to_string()
}
pub(crate) fn default_description_max_chars() -> usize {
    DEFAULT_DESCRIPTION_MAX_CHARS
}
pub(crate) fn default_github_api_base() -> String {
    "https://api.github.com".to_string()
}
pub(crate) fn default_gitlab_api_base() -> String {
    "https://gitlab.com/api/v4".to_string()
}
