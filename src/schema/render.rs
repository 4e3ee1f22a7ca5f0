//! Declaration rendering
//!
//! Turns an aggregated schema plus a collection path into declaration text.
//! Rendering performs no I/O; persistence belongs to [`crate::output`].

use super::aggregate::CollectionSchema;

/// Suffix appended to the derived type base name in the export line
const TYPE_SUFFIX: &str = "Type";

/// A rendered type declaration for one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Collection path the declaration was derived from
    pub collection_path: String,
    /// Capitalized last path segment, e.g. `"Users"`
    pub type_name: String,
    /// The declaration text
    pub text: String,
}

impl Declaration {
    /// Exported TypeScript identifier, e.g. `"UsersType"`
    pub fn export_name(&self) -> String {
        format!("{}{TYPE_SUFFIX}", self.type_name)
    }

    /// Deterministic artifact file name, e.g. `"Users.types.ts"`
    pub fn file_name(&self, ext: &str) -> String {
        format!("{}.types.{ext}", self.type_name)
    }
}

/// Derive the type base name from a collection path.
///
/// Returns `None` when the path yields no usable last segment (empty path
/// or trailing slash), which the traversal driver reports and skips.
pub fn type_base_name(collection_path: &str) -> Option<String> {
    let segment = collection_path.rsplit('/').next().unwrap_or_default();
    let mut chars = segment.chars();
    let first = chars.next()?;
    Some(format!("{}{}", first.to_uppercase(), chars.as_str()))
}

/// Render a collection schema into declaration text.
///
/// The text shape is a fixed contract:
///
/// ```text
/// // users
/// export type UsersType = {
///     name: string;
///     age?: number;
/// };
/// ```
pub fn render(collection_path: &str, type_name: &str, schema: &CollectionSchema) -> Declaration {
    let mut text = String::new();
    text.push_str(&format!("// {collection_path}\n"));
    text.push_str(&format!("export type {type_name}{TYPE_SUFFIX} = {{\n"));
    for field in &schema.fields {
        let optional = if schema.is_optional(field) { "?" } else { "" };
        text.push_str(&format!(
            "    {}{}: {};\n",
            field.name,
            optional,
            field.type_union()
        ));
    }
    text.push_str("};\n");

    Declaration {
        collection_path: collection_path.to_string(),
        type_name: type_name.to_string(),
        text,
    }
}
