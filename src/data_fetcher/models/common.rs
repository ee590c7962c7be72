//! Shared model types and tolerant decoding helpers.
//!
//! The upstream API is third-party and its schema drifts. Missing, null or
//! mistyped fields decode to empty values instead of failing the whole payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Country or region an entity belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    #[serde(default, deserialize_with = "lenient_option")]
    pub name: Option<String>,
    #[serde(default, alias = "ensignUrl", deserialize_with = "lenient_option")]
    pub flag: Option<String>,
}

/// Normalized result of every list call: the items plus the upstream total.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub count: u64,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
        }
    }
}

/// Case-insensitive text search used by list views.
pub trait Searchable {
    /// `needle` is already lowercased.
    fn matches_search(&self, needle: &str) -> bool;
}

/// True when `needle` is empty or is contained in any of the given fields.
pub(crate) fn any_field_contains(fields: &[Option<&str>], needle: &str) -> bool {
    needle.is_empty()
        || fields
            .iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Decodes `T`, falling back to `T::default()` on null or mistyped values.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        warn!("Ignoring undecodable field value: {e}");
        T::default()
    }))
}

/// Decodes an optional value; null and mistyped values become `None`.
pub(crate) fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!("Ignoring undecodable optional field: {e}");
            Ok(None)
        }
    }
}

/// Decodes an array field element by element. A null or non-array value is an
/// empty list; elements that fail to decode are skipped.
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let elements = match value {
        Value::Array(elements) => elements,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!("Expected an array, got {}; using empty list", json_kind(&other));
            return Ok(Vec::new());
        }
    };

    Ok(elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Skipping undecodable element at index {index}: {e}");
                None
            }
        })
        .collect())
}

/// Decodes a count; anything other than a non-negative integer is 0.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or(0))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
