//! # firetype
//!
//! Generate TypeScript type declarations from sampled Firestore collections.
//!
//! ## Features
//!
//! - **Type inference**: canonical type names for any sampled value,
//!   recursive over nested arrays and maps
//! - **Schema aggregation**: per-field type unions and optionality derived
//!   from a collection's document sample
//! - **Recursive traversal**: depth-first walk into subcollections with a
//!   configurable per-document breadth limit
//! - **One file per collection**: `<Name>.types.ts` declaration artifacts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use firetype::config::GeneratorConfig;
//! use firetype::engine::Generator;
//! use firetype::output::TypeWriter;
//! use firetype::store::MemoryStore;
//! use firetype::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = MemoryStore::new()
//!         .with_document("users", "alice", serde_json::json!({"name": "Alice"}));
//!     let writer = TypeWriter::new("types", "ts");
//!
//!     let mut generator = Generator::new(store, writer, GeneratorConfig::new());
//!     generator.generate("users").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Traversal Driver                         │
//! │  fetch sample → aggregate schema → render → write → recurse │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴──────────────┬─────────────────┐
//! │    Store     │          Schema            │     Output      │
//! ├──────────────┼────────────────────────────┼─────────────────┤
//! │ Firestore    │ Type naming                │ TypeWriter      │
//! │ In-memory    │ Aggregation / optionality  │ <Name>.types.ts │
//! │ Auth (JWT)   │ Declaration rendering      │                 │
//! └──────────────┴────────────────────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for firetype
pub mod error;

/// Sampled document values
pub mod value;

/// Schema inference: type naming, aggregation, rendering
pub mod schema;

/// Document stores (Firestore REST, in-memory)
pub mod store;

/// Service-account authentication
pub mod auth;

/// Generator configuration
pub mod config;

/// Declaration file writer
pub mod output;

/// Traversal engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use value::{FieldRecord, SampledValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
