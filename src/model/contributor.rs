//! Canonical contributor.

use serde::{Deserialize, Serialize};

/// Name used when a contributor has neither a login nor a display name.
pub const UNKNOWN_NAME: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributions: Option<u64>,
}

impl Contributor {
    /// Login, else display name, else `"Unknown"`.
    ///
    /// Empty strings count as missing.
    pub fn display_name(&self) -> &str {
        self.login
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(UNKNOWN_NAME)
    }
}
