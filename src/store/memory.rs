//! In-memory document store
//!
//! Backs tests and offline runs. Child collections are derived from the set
//! of registered collection paths, so a fixture only has to register the
//! collections it wants visible.

use super::{CollectionRef, Document, DocumentStore};
use crate::error::Result;
use crate::value::field_record_from_json;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// In-memory `DocumentStore` built from JSON fixtures
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Collection path -> documents, in insertion order
    collections: BTreeMap<String, Vec<Document>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document to a collection, creating the collection on first use.
    ///
    /// `data` must be a JSON object; its fields become the document's record.
    #[must_use]
    pub fn with_document(mut self, collection_path: &str, id: &str, data: Value) -> Self {
        self.add_document(collection_path, id, data);
        self
    }

    /// Register a collection with no documents
    #[must_use]
    pub fn with_empty_collection(mut self, collection_path: &str) -> Self {
        self.collections.entry(collection_path.to_string()).or_default();
        self
    }

    /// Add a document to a collection
    pub fn add_document(&mut self, collection_path: &str, id: &str, data: Value) {
        let document = Document {
            id: id.to_string(),
            path: format!("{collection_path}/{id}"),
            fields: field_record_from_json(data),
        };
        self.collections
            .entry(collection_path.to_string())
            .or_default()
            .push(document);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn fetch_documents(&self, collection_path: &str) -> Result<Vec<Document>> {
        Ok(self
            .collections
            .get(collection_path)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_child_collections(&self, document: &Document) -> Result<Vec<CollectionRef>> {
        let prefix = format!("{}/", document.path);
        // BTreeMap iteration keeps the listing order deterministic.
        let children = self
            .collections
            .keys()
            .filter(|path| {
                path.strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
            })
            .map(CollectionRef::new)
            .collect();
        Ok(children)
    }
}
