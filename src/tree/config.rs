//! Configuration types for scanning

use crate::stats::DEFAULT_TOP_FILES;

/// Configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Deepest directory level that is enumerated. The root is level 0.
    /// Files inside a directory at this level are still recorded; its
    /// subdirectories are not visited.
    pub max_depth: usize,
    /// How many of the largest files to keep
    pub top_files: usize,
    /// Leave out per-entry extras (access time, read-only flag)
    pub skip_expensive_metadata: bool,
}

impl ScanConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            top_files: DEFAULT_TOP_FILES,
            skip_expensive_metadata: false,
        }
    }
}
