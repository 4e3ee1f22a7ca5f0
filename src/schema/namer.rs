//! Type naming from sampled values
//!
//! Maps a `SampledValue` to its canonical type-name string. Names derived
//! from structurally identical values are byte-identical, so set membership
//! is enough to deduplicate unions.

use crate::value::SampledValue;
use std::collections::BTreeSet;

/// Compute the canonical type name for a sampled value.
///
/// Pure and total over the finite `SampledValue` variant set:
/// - arrays render as `"(t1 | t2)[]"` with element names deduplicated and
///   sorted; an empty array renders as `"()[]"`;
/// - maps render as `"{k1:t1;k2:t2}"` with entries sorted by key and
///   duplicate keys collapsed to their first occurrence; an empty map
///   renders as `"{}"`;
/// - a string whose content is exactly `"string"`, `"boolean"`, or
///   `"number"` names itself. This sentinel quirk lets a document mark a
///   field's intended type with a literal string and is preserved
///   bit-for-bit for compatibility.
pub fn type_name(value: &SampledValue) -> String {
    match value {
        SampledValue::Null => "null".to_string(),
        SampledValue::Bool(_) => "boolean".to_string(),
        SampledValue::Number(_) => "number".to_string(),
        SampledValue::Str(s) if is_primitive_token(s) => s.clone(),
        SampledValue::Str(_) => "string".to_string(),
        SampledValue::Array(items) => array_type_name(items),
        SampledValue::Map(entries) => map_type_name(entries),
    }
}

/// Whether a string literal is one of the sentinel primitive tokens
fn is_primitive_token(s: &str) -> bool {
    matches!(s, "string" | "boolean" | "number")
}

fn array_type_name(items: &[SampledValue]) -> String {
    let names: BTreeSet<String> = items.iter().map(type_name).collect();
    let joined = names.into_iter().collect::<Vec<_>>().join(" | ");
    format!("({joined})[]")
}

fn map_type_name(entries: &[(String, SampledValue)]) -> String {
    let mut named: Vec<(&str, String)> = entries
        .iter()
        .map(|(key, value)| (key.as_str(), type_name(value)))
        .collect();

    // Stable sort, then collapse duplicate keys to the first occurrence.
    named.sort_by(|(a, _), (b, _)| a.cmp(b));
    named.dedup_by(|(a, _), (b, _)| a == b);

    let body = named
        .into_iter()
        .map(|(key, name)| format!("{key}:{name}"))
        .collect::<Vec<_>>()
        .join(";");
    format!("{{{body}}}")
}
