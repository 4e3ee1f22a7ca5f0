//! Schema inference module
//!
//! The algorithmic core: naming the type of any sampled value, merging
//! observed field types across a collection's document sample, and rendering
//! the aggregated schema as declaration text.
//!
//! # Overview
//!
//! - **Type naming**: canonical type-name string per value, recursive over
//!   nested arrays and maps
//! - **Aggregation**: per-field type sets and occurrence counts, with
//!   optionality derived from occurrence vs sample size
//! - **Rendering**: deterministic declaration text per collection

mod aggregate;
mod namer;
mod render;

pub use aggregate::{CollectionSchema, SchemaAggregator, SchemaField};
pub use namer::type_name;
pub use render::{render, type_base_name, Declaration};
