//! List normalization with per-item rejection.

use super::Adapter;
use crate::error::{ForgeError, Result};
use crate::model::EntityKind;
use serde::Serialize;
use serde_json::Value;

/// A normalized list plus the items that could not be normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Normalized<T> {
    pub items: Vec<T>,
    pub rejected: Vec<RejectedItem>,
}

impl<T> Normalized<T> {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// One list item that failed schema validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedItem {
    /// Position in the raw list.
    pub index: usize,
    #[serde(serialize_with = "serialize_error")]
    pub error: ForgeError,
}

fn serialize_error<S: serde::Serializer>(error: &ForgeError, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&error.to_string())
}

/// Normalize every item of a list payload.
///
/// A payload that is not a list at all fails as a whole. A single bad item
/// is rejected and the rest of the list survives.
pub(super) fn normalize_list<T>(
    adapter: &dyn Adapter,
    entity: EntityKind,
    payload: &Value,
    normalize: impl Fn(&Value) -> Result<T>,
) -> Result<Normalized<T>> {
    let raw_items = unwrap_list(adapter, entity, payload)?;

    let mut items = Vec::with_capacity(raw_items.len());
    let mut rejected = Vec::new();
    for (index, raw) in raw_items.iter().enumerate() {
        match normalize(raw) {
            Ok(item) => items.push(item),
            Err(error) => {
                log::debug!("rejecting {} at index {}: {}", entity, index, error);
                rejected.push(RejectedItem { index, error });
            }
        }
    }

    Ok(Normalized { items, rejected })
}

fn unwrap_list<'a>(adapter: &dyn Adapter, entity: EntityKind, payload: &'a Value) -> Result<&'a [Value]> {
    let provider = adapter.kind();

    if let Some(items) = payload.as_array() {
        return Ok(items);
    }

    if let Some(object) = payload.as_object() {
        if let Some(key) = adapter.list_wrapper(entity) {
            if let Some(items) = object.get(key).and_then(Value::as_array) {
                return Ok(items);
            }
        }

        let reported = ["message", "error"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str));
        if let Some(message) = reported {
            return Err(ForgeError::Provider {
                provider,
                message: message.to_string(),
            });
        }
    }

    Err(ForgeError::Provider {
        provider,
        message: format!(
            "expected a JSON array of {} items, found {}",
            entity,
            json_type_name(payload)
        ),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
