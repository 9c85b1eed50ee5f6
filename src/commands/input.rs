//! Reading payload and patch files.

use forgeboard::error::{ForgeError, Result};
use forgeboard::provider::{DetailFetchError, DetailSource};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when the path is `-`.
pub(super) fn read_text(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| ForgeError::UserError(format!("failed to read stdin: {}", e)))?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        ForgeError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}

pub(super) fn read_json(path: &Path) -> Result<Value> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|e| {
        ForgeError::UserError(format!("'{}' is not valid JSON: {}", path.display(), e))
    })
}

/// Detail payloads recorded ahead of time, keyed by SHA and number.
#[derive(Debug, Default, Deserialize)]
pub(super) struct RecordedDetails {
    #[serde(default)]
    commits: HashMap<String, Value>,
    #[serde(default)]
    change_requests: HashMap<u64, Value>,
}

impl RecordedDetails {
    pub(super) fn load(path: &Path) -> Result<Self> {
        let raw = read_json(path)?;
        serde_json::from_value(raw).map_err(|e| {
            ForgeError::UserError(format!(
                "'{}' is not a detail file ({{\"commits\": ..., \"change_requests\": ...}}): {}",
                path.display(),
                e
            ))
        })
    }
}

impl DetailSource for RecordedDetails {
    fn commit_detail(&self, sha: &str) -> std::result::Result<Value, DetailFetchError> {
        self.commits
            .get(sha)
            .cloned()
            .ok_or_else(|| DetailFetchError(format!("no detail recorded for commit {}", sha)))
    }

    fn change_request_detail(&self, number: u64) -> std::result::Result<Value, DetailFetchError> {
        self.change_requests.get(&number).cloned().ok_or_else(|| {
            DetailFetchError(format!("no detail recorded for change request {}", number))
        })
    }
}
