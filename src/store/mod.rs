//! Document store module
//!
//! The traversal driver only ever talks to the [`DocumentStore`] trait;
//! the Firestore REST client and the in-memory store both implement it.
//! Raw store values are decoded into [`crate::value::SampledValue`] at this
//! boundary so nothing downstream inspects wire formats.

mod firestore;
mod memory;

pub use firestore::{FirestoreStore, DEFAULT_BASE_URL};
pub use memory::MemoryStore;

use crate::error::Result;
use crate::value::FieldRecord;
use async_trait::async_trait;

/// Reference to a collection by its slash-delimited path, relative to the
/// store's document root (e.g. `"users/alice/orders"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRef {
    /// Relative collection path
    pub path: String,
}

impl CollectionRef {
    /// Create a reference from a path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// One sampled document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Document id within its collection
    pub id: String,
    /// Relative document path (collection path + `/` + id)
    pub path: String,
    /// The document's named field values
    pub fields: FieldRecord,
}

impl Document {
    /// Reference to a child collection of this document
    pub fn child_collection(&self, collection_id: &str) -> CollectionRef {
        CollectionRef::new(format!("{}/{collection_id}", self.path))
    }
}

/// A hierarchical document store.
///
/// `fetch_documents` returns the entire snapshot currently visible for the
/// collection; failures abort the traversal branch they occur in.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch all documents currently visible in a collection
    async fn fetch_documents(&self, collection_path: &str) -> Result<Vec<Document>>;

    /// List the child collections owned by a document
    async fn list_child_collections(&self, document: &Document) -> Result<Vec<CollectionRef>>;
}
