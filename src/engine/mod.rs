//! Traversal engine module
//!
//! Drives the recursive walk over a collection tree: sample documents,
//! aggregate a schema, render and persist a declaration, then descend into
//! each document's subcollections up to the configured breadth limit.
//!
//! # Overview
//!
//! - `Generator` - orchestrates one generation run over a `DocumentStore`
//! - `GenStats` - counters for visited/skipped collections and writes

mod types;

pub use types::GenStats;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::output::TypeWriter;
use crate::schema::{render, type_base_name, SchemaAggregator};
use crate::store::{CollectionRef, DocumentStore};
use futures::future::BoxFuture;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Type-declaration generator over a document store.
///
/// Traversal is depth-first and strictly sequential: one fetch or listing in
/// flight at a time, each recursive call owning its own aggregator. Depth is
/// unbounded (the store's hierarchy is finite); breadth is capped per
/// document by [`GeneratorConfig::limit`].
pub struct Generator<S> {
    store: S,
    writer: TypeWriter,
    config: GeneratorConfig,
    stats: GenStats,
}

impl<S: DocumentStore> Generator<S> {
    /// Create a generator
    pub fn new(store: S, writer: TypeWriter, config: GeneratorConfig) -> Self {
        Self {
            store,
            writer,
            config,
            stats: GenStats::default(),
        }
    }

    /// Statistics for the run so far
    pub fn stats(&self) -> &GenStats {
        &self.stats
    }

    /// Generate declarations for a collection and its subcollection tree.
    ///
    /// A store failure anywhere in the branch propagates and aborts the run;
    /// empty collections, underivable names and write failures are logged
    /// and do not stop the traversal.
    pub async fn generate(&mut self, collection_path: &str) -> Result<()> {
        let start = Instant::now();
        self.visit(CollectionRef::new(collection_path)).await?;
        self.stats.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Generated {} declaration(s) from {} collection(s) ({} skipped, {} write failure(s))",
            self.stats.declarations_written,
            self.stats.collections_visited,
            self.stats.collections_skipped,
            self.stats.write_failures
        );
        Ok(())
    }

    fn visit(&mut self, collection: CollectionRef) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            debug!("Visiting collection: {}", collection.path);
            let documents = self.store.fetch_documents(&collection.path).await?;
            self.stats.add_collection();

            if documents.is_empty() {
                warn!("Lack of documents in collection: {}", collection.path);
                self.stats.add_skip();
                return Ok(());
            }

            let Some(type_name) = type_base_name(&collection.path) else {
                warn!("Collection name not found: {}", collection.path);
                self.stats.add_skip();
                return Ok(());
            };

            let mut aggregator = SchemaAggregator::new(self.config.field_order);
            for document in &documents {
                aggregator.add_document(&document.fields);
            }
            self.stats.add_documents(documents.len());

            let declaration = render(&collection.path, &type_name, &aggregator.finish());

            // The declaration is already computed; a failed write only loses
            // persistence, so the traversal continues.
            match self.writer.write(&declaration) {
                Ok(path) => {
                    info!("Types saved in {}", path.display());
                    self.stats.add_written();
                }
                Err(e) => {
                    error!("Failed to save types for {}: {e}", collection.path);
                    self.stats.add_write_failure();
                }
            }

            if self.config.limit == 0 {
                return Ok(());
            }

            for document in &documents {
                let children = self.store.list_child_collections(document).await?;
                for child in children.into_iter().take(self.config.limit) {
                    self.visit(child).await?;
                }
            }

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests;
