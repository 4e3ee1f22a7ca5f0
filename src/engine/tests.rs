//! Traversal engine tests

use super::*;
use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::output::TypeWriter;
use crate::store::{CollectionRef, Document, DocumentStore, MemoryStore};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;

fn writer_for(dir: &Path) -> TypeWriter {
    TypeWriter::new(dir, "ts")
}

fn users_store() -> MemoryStore {
    MemoryStore::new()
        .with_document("users", "alice", json!({"name": "Alice", "age": 30}))
        .with_document("users", "bob", json!({"name": "Bob"}))
}

#[tokio::test]
async fn test_generate_single_collection() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = Generator::new(users_store(), writer_for(dir.path()), GeneratorConfig::new());

    generator.generate("users").await.unwrap();

    let written = std::fs::read_to_string(dir.path().join("Users.types.ts")).unwrap();
    assert_eq!(
        written,
        "// users\nexport type UsersType = {\n    name: string;\n    age?: number;\n};\n"
    );

    let stats = generator.stats();
    assert_eq!(stats.collections_visited, 1);
    assert_eq!(stats.documents_sampled, 2);
    assert_eq!(stats.declarations_written, 1);
    assert_eq!(stats.collections_skipped, 0);
}

#[tokio::test]
async fn test_generate_recurses_into_subcollections() {
    let store = users_store()
        .with_document("users/alice/orders", "o1", json!({"total": 9.5}))
        .with_document("users/alice/orders", "o2", json!({"total": 12, "note": "gift"}));

    let dir = tempfile::tempdir().unwrap();
    let mut generator = Generator::new(store, writer_for(dir.path()), GeneratorConfig::new());

    generator.generate("users").await.unwrap();

    assert!(dir.path().join("Users.types.ts").exists());
    let orders = std::fs::read_to_string(dir.path().join("Orders.types.ts")).unwrap();
    assert_eq!(
        orders,
        "// users/alice/orders\nexport type OrdersType = {\n    total: number;\n    note?: string;\n};\n"
    );

    assert_eq!(generator.stats().declarations_written, 2);
}

#[tokio::test]
async fn test_empty_collection_is_skipped() {
    let store = MemoryStore::new().with_empty_collection("users");
    let dir = tempfile::tempdir().unwrap();
    let mut generator = Generator::new(store, writer_for(dir.path()), GeneratorConfig::new());

    generator.generate("users").await.unwrap();

    assert!(!dir.path().join("Users.types.ts").exists());
    assert_eq!(generator.stats().collections_skipped, 1);
    assert_eq!(generator.stats().declarations_written, 0);
}

#[tokio::test]
async fn test_underivable_name_is_skipped() {
    let store = MemoryStore::new().with_document("users/", "d1", json!({"a": 1}));
    let dir = tempfile::tempdir().unwrap();
    let mut generator = Generator::new(store, writer_for(dir.path()), GeneratorConfig::new());

    generator.generate("users/").await.unwrap();

    assert_eq!(generator.stats().collections_skipped, 1);
    assert_eq!(generator.stats().declarations_written, 0);
}

#[tokio::test]
async fn test_limit_zero_disables_recursion() {
    let store = users_store().with_document("users/alice/orders", "o1", json!({"total": 1}));
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new().with_limit(0);
    let mut generator = Generator::new(store, writer_for(dir.path()), config);

    generator.generate("users").await.unwrap();

    assert!(dir.path().join("Users.types.ts").exists());
    assert!(!dir.path().join("Orders.types.ts").exists());
    assert_eq!(generator.stats().collections_visited, 1);
}

#[tokio::test]
async fn test_limit_caps_subcollections_per_document() {
    // Four children in listing (sorted) order; only the first two visited.
    let store = MemoryStore::new()
        .with_document("users", "alice", json!({"name": "Alice"}))
        .with_document("users/alice/a_first", "d", json!({"x": 1}))
        .with_document("users/alice/b_second", "d", json!({"x": 2}))
        .with_document("users/alice/c_third", "d", json!({"x": 3}))
        .with_document("users/alice/d_fourth", "d", json!({"x": 4}));

    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new().with_limit(2);
    let mut generator = Generator::new(store, writer_for(dir.path()), config);

    generator.generate("users").await.unwrap();

    assert!(dir.path().join("A_first.types.ts").exists());
    assert!(dir.path().join("B_second.types.ts").exists());
    assert!(!dir.path().join("C_third.types.ts").exists());
    assert!(!dir.path().join("D_fourth.types.ts").exists());
    // Root plus exactly two children.
    assert_eq!(generator.stats().collections_visited, 3);
}

#[tokio::test]
async fn test_generate_is_idempotent() {
    let store = users_store().with_document("users/alice/orders", "o1", json!({"total": 1}));
    let dir = tempfile::tempdir().unwrap();

    let mut generator = Generator::new(store, writer_for(dir.path()), GeneratorConfig::new());
    generator.generate("users").await.unwrap();
    let first = std::fs::read_to_string(dir.path().join("Users.types.ts")).unwrap();

    generator.generate("users").await.unwrap();
    let second = std::fs::read_to_string(dir.path().join("Users.types.ts")).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_write_failure_does_not_stop_traversal() {
    let store = users_store().with_document("users/alice/orders", "o1", json!({"total": 1}));

    // A file standing where the output directory should be makes every
    // write fail.
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("occupied");
    std::fs::write(&blocked, "not a directory").unwrap();

    let mut generator = Generator::new(store, writer_for(&blocked), GeneratorConfig::new());
    generator.generate("users").await.unwrap();

    let stats = generator.stats();
    assert_eq!(stats.write_failures, 2);
    assert_eq!(stats.declarations_written, 0);
    assert_eq!(stats.collections_visited, 2);
}

/// Store that fails every call, for branch-fatal error propagation
struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn fetch_documents(&self, collection_path: &str) -> crate::error::Result<Vec<Document>> {
        Err(Error::store(collection_path, "connection refused"))
    }

    async fn list_child_collections(
        &self,
        document: &Document,
    ) -> crate::error::Result<Vec<CollectionRef>> {
        Err(Error::store(&document.path, "connection refused"))
    }
}

#[tokio::test]
async fn test_store_error_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let mut generator = Generator::new(FailingStore, writer_for(dir.path()), GeneratorConfig::new());

    let err = generator.generate("users").await.unwrap_err();
    assert!(matches!(err, Error::Store { .. }));
}
