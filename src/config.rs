//! Generator configuration
//!
//! A single configuration value constructed once and passed explicitly into
//! the traversal driver; nothing is read from ambient state.

use serde::{Deserialize, Serialize};

/// Default number of subcollections visited per document
pub const DEFAULT_SUBCOLLECTION_LIMIT: usize = 5;

/// Rendering order for schema fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldOrder {
    /// First-seen order across the document iteration
    #[default]
    FirstSeen,
    /// Sorted by field name
    Alphabetical,
}

/// Configuration for a type-generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Maximum subcollections visited per document; 0 disables recursion
    pub limit: usize,
    /// Field rendering order
    pub field_order: FieldOrder,
    /// Artifact file extension
    pub extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SUBCOLLECTION_LIMIT,
            field_order: FieldOrder::default(),
            extension: "ts".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-document subcollection limit
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the field rendering order
    #[must_use]
    pub fn with_field_order(mut self, order: FieldOrder) -> Self {
        self.field_order = order;
        self
    }

    /// Set the artifact file extension
    #[must_use]
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }
}
