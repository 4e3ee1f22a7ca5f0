//! Engine statistics

/// Counters for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenStats {
    /// Collections visited, including skipped ones
    pub collections_visited: usize,
    /// Collections skipped (empty sample or underivable name)
    pub collections_skipped: usize,
    /// Documents folded into schemas
    pub documents_sampled: usize,
    /// Declarations successfully persisted
    pub declarations_written: usize,
    /// Declarations whose write failed (computed but not persisted)
    pub write_failures: usize,
    /// Total run duration in milliseconds
    pub duration_ms: u64,
}

impl GenStats {
    /// Record a visited collection
    pub fn add_collection(&mut self) {
        self.collections_visited += 1;
    }

    /// Record a skipped collection
    pub fn add_skip(&mut self) {
        self.collections_skipped += 1;
    }

    /// Record sampled documents
    pub fn add_documents(&mut self, count: usize) {
        self.documents_sampled += count;
    }

    /// Record a persisted declaration
    pub fn add_written(&mut self) {
        self.declarations_written += 1;
    }

    /// Record a failed write
    pub fn add_write_failure(&mut self) {
        self.write_failures += 1;
    }

    /// Set the run duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
