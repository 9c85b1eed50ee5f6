//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::MAX_ENRICHMENT_LIMIT;
use crate::error::{ForgeError, Result};
use crate::provider::ProviderKind;
use crate::timeline::{DescriptionStyle, EventFilter, TimeRange};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ForgeError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ForgeError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults. Unknown `time_range` or
    /// `event_filter` tokens are `FilterValidation` errors.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            let value: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|e| {
                ForgeError::UserError(format!("failed to parse config YAML: {}", e))
            })?;
            check_filter_tokens(&value)?;
            serde_yaml::from_value(value).map_err(|e| {
                ForgeError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ForgeError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `enrichment_limit` must not exceed `MAX_ENRICHMENT_LIMIT`
    /// - `description_max_chars` must be positive
    /// - API base URLs must be non-empty http(s) URLs without a trailing slash
    pub fn validate(&self) -> Result<()> {
        if self.enrichment_limit > MAX_ENRICHMENT_LIMIT {
            return Err(ForgeError::UserError(format!(
                "config validation failed: enrichment_limit must be at most {} (found {})",
                MAX_ENRICHMENT_LIMIT, self.enrichment_limit
            )));
        }

        if self.description_max_chars == 0 {
            return Err(ForgeError::UserError(
                "config validation failed: description_max_chars must be greater than 0"
                    .to_string(),
            ));
        }

        for (key, value) in [
            ("github_api_base", &self.github_api_base),
            ("gitlab_api_base", &self.gitlab_api_base),
        ] {
            if !(value.starts_with("https://") || value.starts_with("http://")) {
                return Err(ForgeError::UserError(format!(
                    "config validation failed: {} must be an http(s) URL (found '{}')",
                    key, value
                )));
            }
            if value.ends_with('/') {
                return Err(ForgeError::UserError(format!(
                    "config validation failed: {} must not end with '/'. Use '{}' instead.",
                    key,
                    value.trim_end_matches('/')
                )));
            }
        }

        Ok(())
    }

    /// Base URL for the given provider's REST API.
    pub fn api_base(&self, provider: ProviderKind) -> &str {
        match provider {
            ProviderKind::GitHub => &self.github_api_base,
            ProviderKind::GitLab => &self.gitlab_api_base,
        }
    }

    /// Description settings for timeline construction.
    pub fn description_style(&self) -> DescriptionStyle {
        DescriptionStyle {
            placeholder: self.description_placeholder.clone(),
            max_chars: self.description_max_chars,
        }
    }
}

/// Run filter tokens through their strict parsers before serde sees them.
fn check_filter_tokens(value: &serde_yaml::Value) -> Result<()> {
    if let Some(token) = value.get("time_range").and_then(serde_yaml::Value::as_str) {
        token.parse::<TimeRange>()?;
    }
    if let Some(token) = value.get("event_filter").and_then(serde_yaml::Value::as_str) {
        token.parse::<EventFilter>()?;
    }
    Ok(())
}
