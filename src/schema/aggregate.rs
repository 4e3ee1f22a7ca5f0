//! Schema aggregation across a collection's document sample

use super::namer::type_name;
use crate::config::FieldOrder;
use crate::value::FieldRecord;
use std::collections::{BTreeSet, HashMap, HashSet};

/// One field of an aggregated collection schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    /// Field name
    pub name: String,
    /// Every type name observed for this field, deduplicated and sorted
    pub types: BTreeSet<String>,
    /// How many sampled documents carried the field
    pub occurrences: usize,
}

impl SchemaField {
    /// Render the field's type union, e.g. `"number | string"`
    pub fn type_union(&self) -> String {
        self.types.iter().cloned().collect::<Vec<_>>().join(" | ")
    }
}

/// Aggregated schema for one collection's document sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchema {
    /// Fields in the configured rendering order
    pub fields: Vec<SchemaField>,
    /// Size of the sample the schema was built from
    pub total_documents: usize,
}

impl CollectionSchema {
    /// A field is optional iff at least one sampled document lacked it
    pub fn is_optional(&self, field: &SchemaField) -> bool {
        field.occurrences < self.total_documents
    }
}

/// Aggregates per-field type sets and occurrence counts over a document
/// sample. One aggregator per collection per traversal; never shared across
/// recursive branches.
#[derive(Debug)]
pub struct SchemaAggregator {
    order: FieldOrder,
    /// Fields in first-seen order
    fields: Vec<SchemaField>,
    /// Field name -> index into `fields`
    index: HashMap<String, usize>,
    total_documents: usize,
}

impl SchemaAggregator {
    /// Create an aggregator with the given field ordering policy
    pub fn new(order: FieldOrder) -> Self {
        Self {
            order,
            fields: Vec::new(),
            index: HashMap::new(),
            total_documents: 0,
        }
    }

    /// Fold one document's fields into the running schema.
    ///
    /// A field absent from the record is simply not counted for this
    /// document; it is never inserted with a placeholder type.
    pub fn add_document(&mut self, record: &FieldRecord) {
        self.total_documents += 1;

        let mut seen_in_doc: HashSet<&str> = HashSet::new();
        for (name, value) in record {
            let idx = match self.index.get(name.as_str()) {
                Some(idx) => *idx,
                None => {
                    self.fields.push(SchemaField {
                        name: name.clone(),
                        types: BTreeSet::new(),
                        occurrences: 0,
                    });
                    let idx = self.fields.len() - 1;
                    self.index.insert(name.clone(), idx);
                    idx
                }
            };

            self.fields[idx].types.insert(type_name(value));
            // Count each field once per document even if a record carries
            // a duplicate key.
            if seen_in_doc.insert(name.as_str()) {
                self.fields[idx].occurrences += 1;
            }
        }
    }

    /// Number of documents folded in so far
    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    /// Finish aggregation, applying the configured field order
    pub fn finish(self) -> CollectionSchema {
        let mut fields = self.fields;
        if self.order == FieldOrder::Alphabetical {
            fields.sort_by(|a, b| a.name.cmp(&b.name));
        }
        CollectionSchema {
            fields,
            total_documents: self.total_documents,
        }
    }
}
