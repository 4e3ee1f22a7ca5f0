//! Sampled document values
//!
//! `SampledValue` is the closed variant set the type namer dispatches on.
//! It is produced exactly once, at the document-store boundary, so the rest
//! of the crate never inspects raw wire JSON.

use serde_json::Value;

/// A single value sampled from a document field.
///
/// Document stores exclude self-referential structures, so every value is
/// finite and recursion over it terminates.
#[derive(Debug, Clone, PartialEq)]
pub enum SampledValue {
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Any numeric value; width is deliberately not tracked
    Number(f64),
    /// String
    Str(String),
    /// Array of values
    Array(Vec<SampledValue>),
    /// Map-like value as (key, value) pairs.
    ///
    /// Covers both plain field records and ordered key-value structures;
    /// both normalize to pairs here, so downstream code needs no runtime
    /// shape check.
    Map(Vec<(String, SampledValue)>),
}

/// The named fields of one sampled document
pub type FieldRecord = Vec<(String, SampledValue)>;

impl SampledValue {
    /// Build a map value from an iterator of (key, value) entries
    pub fn map_from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, SampledValue)>,
    {
        SampledValue::Map(entries.into_iter().collect())
    }
}

impl From<Value> for SampledValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SampledValue::Null,
            Value::Bool(b) => SampledValue::Bool(b),
            Value::Number(n) => SampledValue::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => SampledValue::Str(s),
            Value::Array(items) => {
                SampledValue::Array(items.into_iter().map(SampledValue::from).collect())
            }
            Value::Object(map) => SampledValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, SampledValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Convert a JSON object into a field record.
///
/// Non-object values yield an empty record; a document's data is always an
/// object in every backing store we read from.
pub fn field_record_from_json(value: Value) -> FieldRecord {
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(k, v)| (k, SampledValue::from(v)))
            .collect(),
        _ => Vec::new(),
    }
}
