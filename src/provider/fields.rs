//! Typed field extraction from raw provider JSON.
//!
//! Required fields fail with `ForgeError::ProviderSchema`; optional fields
//! treat `null`, absence, and a wrong JSON type alike as "unknown".

use super::ProviderKind;
use crate::error::{ForgeError, Result};
use crate::model::EntityKind;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Longest raw-item rendering embedded in a schema error.
const ITEM_PREVIEW_CHARS: usize = 200;

/// A raw item being normalized into one canonical entity.
pub(super) struct Fields<'a> {
    provider: ProviderKind,
    entity: EntityKind,
    raw: &'a Value,
}

impl<'a> Fields<'a> {
    pub(super) fn new(provider: ProviderKind, entity: EntityKind, raw: &'a Value) -> Self {
        Self {
            provider,
            entity,
            raw,
        }
    }

    /// Follow a path of object keys; `null` counts as absent.
    fn lookup(&self, path: &[&str]) -> Option<&'a Value> {
        let mut current = self.raw;
        for key in path {
            current = current.get(key)?;
        }
        if current.is_null() { None } else { Some(current) }
    }

    pub(super) fn required_str(&self, path: &[&str]) -> Result<&'a str> {
        self.optional_str(path).ok_or_else(|| self.missing(path, None))
    }

    pub(super) fn optional_str(&self, path: &[&str]) -> Option<&'a str> {
        self.lookup(path).and_then(Value::as_str)
    }

    /// First non-empty string among several candidate paths.
    pub(super) fn first_str(&self, paths: &[&[&str]]) -> Option<&'a str> {
        paths
            .iter()
            .filter_map(|path| self.optional_str(path))
            .find(|s| !s.is_empty())
    }

    pub(super) fn required_u64(&self, path: &[&str]) -> Result<u64> {
        self.optional_u64(path).ok_or_else(|| self.missing(path, None))
    }

    pub(super) fn optional_u64(&self, path: &[&str]) -> Option<u64> {
        self.lookup(path).and_then(Value::as_u64)
    }

    pub(super) fn flag(&self, path: &[&str]) -> bool {
        self.lookup(path).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Length of an array field, when present.
    pub(super) fn array_len(&self, path: &[&str]) -> Option<u64> {
        self.lookup(path)
            .and_then(Value::as_array)
            .map(|items| items.len() as u64)
    }

    pub(super) fn required_timestamp(&self, path: &[&str]) -> Result<DateTime<Utc>> {
        let raw = self.required_str(path)?;
        parse_timestamp(raw).ok_or_else(|| self.missing(path, Some("not an RFC 3339 timestamp")))
    }

    /// First parseable timestamp among several candidate paths.
    pub(super) fn first_timestamp(&self, paths: &[&[&str]]) -> Result<DateTime<Utc>> {
        paths
            .iter()
            .find_map(|path| self.optional_timestamp(path))
            .ok_or_else(|| {
                let first = paths.first().copied().unwrap_or(&[]);
                self.missing(first, None)
            })
    }

    pub(super) fn optional_timestamp(&self, path: &[&str]) -> Option<DateTime<Utc>> {
        let raw = self.optional_str(path)?;
        let parsed = parse_timestamp(raw);
        if parsed.is_none() {
            log::debug!(
                "{} {}: ignoring unparseable timestamp {}={:?}",
                self.provider,
                self.entity,
                path.join("."),
                raw
            );
        }
        parsed
    }

    /// Schema error for a field with an unexpected value.
    pub(super) fn invalid(&self, path: &[&str], value: &str) -> ForgeError {
        let reason = format!("unrecognized value {:?}", value);
        self.missing(path, Some(reason.as_str()))
    }

    fn missing(&self, path: &[&str], reason: Option<&str>) -> ForgeError {
        let mut field = path.join(".");
        if let Some(reason) = reason {
            field = format!("{} ({})", field, reason);
        }
        ForgeError::ProviderSchema {
            provider: self.provider,
            entity: self.entity,
            field,
            item: describe_item(self.raw),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Compact, bounded rendering of a raw item for error messages.
pub(super) fn describe_item(raw: &Value) -> String {
    let rendered = raw.to_string();
    if rendered.chars().count() <= ITEM_PREVIEW_CHARS {
        rendered
    } else {
        let head: String = rendered.chars().take(ITEM_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
