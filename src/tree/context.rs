//! Mutable state threaded through one scan

use std::io;
use std::path::PathBuf;

use tracing::warn;

use crate::error::SkippedEntry;
use crate::stats::{ExtensionAccumulator, TopKTracker};

/// Aggregation state for a single scan, owned by the walking thread.
#[derive(Debug)]
pub struct ScanContext {
    pub extensions: ExtensionAccumulator,
    pub top_files: TopKTracker,
    pub skipped: Vec<SkippedEntry>,
    pub files: u64,
    pub directories: u64,
}

impl ScanContext {
    pub fn new(top_files: usize) -> Self {
        Self {
            extensions: ExtensionAccumulator::new(),
            top_files: TopKTracker::new(top_files),
            skipped: Vec::new(),
            files: 0,
            directories: 0,
        }
    }

    /// Feed a visited file into both statistics.
    pub fn record_file(&mut self, name: &str, size: u64) {
        self.files += 1;
        self.extensions.record(name, size);
        self.top_files.offer(name, size);
    }

    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    /// Note an entry that had to be left out.
    pub fn skip(&mut self, path: PathBuf, err: &io::Error) {
        warn!(path = %path.display(), error = %err, "skipping entry");
        self.skipped.push(SkippedEntry::new(path, err));
    }
}
