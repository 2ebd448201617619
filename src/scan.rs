//! Scan entry point and the result handed to renderers

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::error::{Result, ScanError, SkippedEntry};
use crate::stats::{Metric, StatItem};
use crate::tree::{DirectoryWalker, HierarchyEntry, ScanConfig, ScanContext};

/// Everything a scan produces.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub root: PathBuf,
    pub hierarchy: HierarchyEntry,
    /// One entry per extension, unordered
    pub extension_stats: Vec<StatItem>,
    /// The largest files, ascending by size
    pub top_files: Vec<StatItem>,
    pub files_scanned: u64,
    pub directories_scanned: u64,
    pub skipped: Vec<SkippedEntry>,
    pub scan_time_ms: u64,
}

impl ScanResult {
    /// Subtotal of the root directory.
    pub fn total_size(&self) -> u64 {
        self.hierarchy.size
    }

    /// Extension statistics sorted ascending by `metric`.
    pub fn extensions_by(&self, metric: Metric) -> Vec<StatItem> {
        let mut items = self.extension_stats.clone();
        metric.sort(&mut items);
        items
    }
}

/// Runs scans with a fixed configuration.
pub struct Scanner {
    walker: DirectoryWalker,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            walker: DirectoryWalker::new(config),
        }
    }

    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        let start = Instant::now();

        if !root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        let root = root.canonicalize().map_err(|_| ScanError::RootNotFound {
            path: root.to_path_buf(),
        })?;

        let mut ctx = ScanContext::new(self.walker.config().top_files);
        let hierarchy = self
            .walker
            .walk(&root, 0, &mut ctx)
            .map_err(|source| ScanError::RootUnreadable {
                path: root.clone(),
                source,
            })?;

        let scan_time_ms = start.elapsed().as_millis() as u64;
        info!(
            root = %root.display(),
            files = ctx.files,
            directories = ctx.directories,
            skipped = ctx.skipped.len(),
            elapsed_ms = scan_time_ms,
            "scan complete"
        );

        Ok(ScanResult {
            root,
            hierarchy,
            extension_stats: ctx.extensions.into_snapshot(),
            top_files: ctx.top_files.into_snapshot(),
            files_scanned: ctx.files,
            directories_scanned: ctx.directories,
            skipped: ctx.skipped,
            scan_time_ms,
        })
    }
}

/// Scan `root` with `config`.
pub fn scan(root: &Path, config: ScanConfig) -> Result<ScanResult> {
    Scanner::new(config).scan(root)
}
